//! # npm_dist_release
//!
//! Release driver for npm packages built from TypeScript sources.
//!
//! This crate automates the publish workflow for a single package: wipe the
//! build output directory, run the TypeScript compiler, stage the package
//! manifests into the output directory, and run `npm publish` with public
//! access from inside it.
//!
//! ## Workflow
//!
//! The driver executes five steps in strict sequence:
//!
//! 1. **Clean**: remove `dist/` if present (missing directory is a no-op)
//! 2. **Compile**: run `tsc` in the project root to repopulate `dist/`
//! 3. **Stage exclusion manifest**: copy `.npmignore` into `dist/`
//! 4. **Stage package manifest**: copy `package.json` into `dist/`
//! 5. **Publish**: run `npm publish --access public` with cwd set to `dist/`
//!
//! ## Usage
//!
//! ```bash
//! npm_dist_release                  # Publish the package in the current directory
//! npm_dist_release /path/to/pkg     # Publish a package elsewhere
//! npm_dist_release --strict         # Fail fast on any non-zero tool exit
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod cli;
pub mod error;
pub mod publish;

// Re-export main types for public API
pub use cli::Args;
pub use error::{CliError, ManifestError, ReleaseError, Result};
pub use publish::{ReleaseDriver, ToolCommand};

use std::path::{Path, PathBuf};

/// Configuration for a release run.
///
/// Defaults mirror the conventional npm/TypeScript layout: `dist/` output,
/// `.npmignore` and `package.json` in the project root, `tsc` as the
/// compiler, and `npm publish --access public` as the publisher.
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    /// Project root the compiler runs in and manifests are read from
    pub project_root: PathBuf,
    /// Build output directory, relative to the project root
    pub dist_dir: PathBuf,
    /// Package-exclusion manifest filename, relative to the project root
    pub exclusion_manifest: PathBuf,
    /// Package descriptor filename, relative to the project root
    pub package_manifest: PathBuf,
    /// Compiler invocation (expected to populate the output directory)
    pub compiler: ToolCommand,
    /// Publish invocation (run from inside the output directory)
    pub publisher: ToolCommand,
    /// Treat any non-zero tool exit status as a fatal error
    pub strict: bool,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            dist_dir: PathBuf::from("dist"),
            exclusion_manifest: PathBuf::from(".npmignore"),
            package_manifest: PathBuf::from("package.json"),
            compiler: ToolCommand::bare("tsc"),
            publisher: ToolCommand::new("npm", ["publish", "--access", "public"]),
            strict: false,
        }
    }
}

impl ReleaseConfig {
    /// Create a configuration for the given project root with default names
    pub fn for_project(root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: root.into(),
            ..Self::default()
        }
    }

    /// Resolved path of the build output directory
    pub fn dist_path(&self) -> PathBuf {
        self.resolve(&self.dist_dir)
    }

    /// Resolved path of the exclusion manifest source file
    pub fn exclusion_manifest_path(&self) -> PathBuf {
        self.resolve(&self.exclusion_manifest)
    }

    /// Resolved path of the package manifest source file
    pub fn package_manifest_path(&self) -> PathBuf {
        self.resolve(&self.package_manifest)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}

/// Result of a full release run
#[derive(Debug, Clone)]
pub struct ReleaseOutcome {
    /// Exit code reported by the compiler
    pub compile_exit: i32,
    /// Exit code reported by the publish tool
    pub publish_exit: i32,
    /// Manifest files staged into the output directory
    pub staged: Vec<PathBuf>,
}

impl ReleaseOutcome {
    /// Process exit code for the run: the publish tool's status, matching
    /// the de facto result of the original workflow
    pub fn exit_code(&self) -> i32 {
        self.publish_exit
    }
}
