//! The publish workflow: clean, compile, stage manifests, publish.
//!
//! [`ReleaseDriver`] runs the five steps in strict sequence; the submodules
//! hold the tool invocation plumbing and the filesystem helpers the steps
//! are built from.

mod command;
mod driver;
pub mod fs;

pub use command::ToolCommand;
pub use driver::ReleaseDriver;
