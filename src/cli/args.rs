//! Command line argument parsing and validation.
//!
//! This module provides minimal CLI argument parsing. The tool is designed
//! to "just work": run it with no arguments from a package root and it
//! cleans, compiles, stages, and publishes.

use clap::Parser;
use std::path::PathBuf;

/// Release driver for npm packages
#[derive(Parser, Debug)]
#[command(
    name = "npm_dist_release",
    version,
    about = "Clean, compile, stage manifests, and publish an npm package",
    long_about = "Publish an npm package built from TypeScript sources.

Usage:
  npm_dist_release
  npm_dist_release /path/to/package
  npm_dist_release --strict"
)]
pub struct Args {
    /// Package root containing package.json and .npmignore (default: current directory)
    #[arg(index = 1, value_name = "PROJECT_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Treat any non-zero compiler or publish exit status as a fatal error
    #[arg(long)]
    pub strict: bool,

    /// Show per-step detail
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolved project root (current directory when omitted)
    pub fn root(&self) -> PathBuf {
        self.project_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        let root = self.root();
        if !root.is_dir() {
            return Err(format!(
                "Project root '{}' is not a directory",
                root.display()
            ));
        }
        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print message
    pub fn println(&self, message: &str) {
        let _ = self.output.println(message);
    }

    /// Print verbose message (only shown with --verbose)
    pub fn verbose_println(&self, message: &str) {
        let _ = self.output.verbose(message);
    }

    /// Print error message (always shown)
    pub fn error_println(&self, message: &str) {
        self.output.error(message);
    }

    /// Print warning message
    pub fn warning_println(&self, message: &str) {
        let _ = self.output.warn(message);
    }

    /// Print success message
    pub fn success_println(&self, message: &str) {
        let _ = self.output.success(message);
    }

    /// Check if verbose output is enabled
    pub fn is_verbose(&self) -> bool {
        self.output.is_verbose()
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.output.is_quiet()
    }
}
