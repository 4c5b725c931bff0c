//! Error types for npm_dist_release operations.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for npm_dist_release operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all npm_dist_release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Manifest staging errors
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// CLI and tool invocation errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Errors raised while staging manifest files into the output directory
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest source file does not exist
    #[error("Manifest file not found at {path}")]
    SourceMissing {
        /// Path where the manifest was expected
        path: PathBuf,
    },

    /// Manifest source path exists but is not a regular file
    #[error("Manifest path {path} is not a regular file")]
    NotAFile {
        /// Offending path
        path: PathBuf,
    },

    /// Output directory does not exist when a copy step runs
    #[error("Output directory {path} does not exist. Did the compile step run?")]
    OutputDirMissing {
        /// Expected output directory
        path: PathBuf,
    },
}

/// CLI-specific and tool invocation errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// External tool not found on PATH
    #[error("Tool '{tool}' not found on PATH")]
    ToolNotFound {
        /// Tool program name
        tool: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl ReleaseError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ReleaseError::Manifest(ManifestError::SourceMissing { path }) => vec![
                format!("Create {} in the project root", path.display()),
                "Run from the directory containing package.json".to_string(),
            ],
            ReleaseError::Manifest(ManifestError::OutputDirMissing { .. }) => vec![
                "Check that the compiler ran and emitted build output".to_string(),
                "Verify outDir in tsconfig.json points at the output directory".to_string(),
            ],
            ReleaseError::Cli(CliError::ToolNotFound { tool }) => vec![
                format!("Install '{}' and ensure it is on PATH", tool),
                "Node.js toolchain: https://nodejs.org or your package manager".to_string(),
            ],
            ReleaseError::Cli(CliError::ExecutionFailed { command, .. }) => vec![
                format!("Run '{}' by hand to inspect its output", command),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            ReleaseError::Cli(CliError::ToolNotFound { .. })
                | ReleaseError::Cli(CliError::InvalidArguments { .. })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_not_found_has_suggestions() {
        let err = ReleaseError::Cli(CliError::ToolNotFound {
            tool: "npm".to_string(),
        });
        let suggestions = err.recovery_suggestions();
        assert!(suggestions.iter().any(|s| s.contains("npm")));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn output_dir_missing_mentions_compile_step() {
        let err = ManifestError::OutputDirMissing {
            path: PathBuf::from("dist"),
        };
        assert!(err.to_string().contains("compile step"));
    }

    #[test]
    fn io_errors_convert_to_release_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ReleaseError = io.into();
        assert!(matches!(err, ReleaseError::Io(_)));
        assert!(err.is_recoverable());
    }
}
