//! Command line interface for npm_dist_release.
//!
//! Argument parsing, colored terminal output, and the glue that turns a
//! parsed invocation into a release run with user feedback.

mod args;
pub mod commands;
mod output;

pub use args::{Args, RuntimeConfig};
pub use commands::execute_command;
pub use output::OutputManager;

use crate::error::Result;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute_command(args).await
}
