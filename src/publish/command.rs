//! External tool invocation.
//!
//! Tools are resolved on PATH before spawning so a missing toolchain surfaces
//! as a clear error instead of a raw spawn failure, then run with inherited
//! stdio so their output streams straight to the operator's terminal.

use crate::error::{CliError, Result};
use std::path::Path;
use std::process::ExitStatus;

/// An external program invocation: program name plus fixed arguments
#[derive(Debug, Clone)]
pub struct ToolCommand {
    /// Program name, resolved on PATH at spawn time
    pub program: String,
    /// Arguments passed to the program
    pub args: Vec<String>,
}

impl ToolCommand {
    /// Create a tool command with arguments
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a tool command with no arguments
    pub fn bare(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Render the command line for display and error messages
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }

    /// Run the tool to completion in the given working directory.
    ///
    /// Waits synchronously for the process to exit; stdio is inherited.
    /// Returns the exit status without interpreting it — callers decide
    /// whether a non-zero status matters.
    pub async fn status(&self, cwd: &Path) -> Result<ExitStatus> {
        which::which(&self.program).map_err(|_| CliError::ToolNotFound {
            tool: self.program.clone(),
        })?;

        log::debug!("running '{}' in {}", self.display(), cwd.display());

        let status = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .current_dir(cwd)
            .status()
            .await
            .map_err(|e| CliError::ExecutionFailed {
                command: self.display(),
                reason: e.to_string(),
            })?;

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReleaseError;

    #[test]
    fn display_includes_arguments() {
        let cmd = ToolCommand::new("npm", ["publish", "--access", "public"]);
        assert_eq!(cmd.display(), "npm publish --access public");
        assert_eq!(ToolCommand::bare("tsc").display(), "tsc");
    }

    #[tokio::test]
    async fn missing_tool_is_reported_by_name() {
        let cmd = ToolCommand::bare("definitely-not-a-real-tool-xyz");
        let err = cmd.status(Path::new(".")).await.unwrap_err();
        match err {
            ReleaseError::Cli(CliError::ToolNotFound { tool }) => {
                assert_eq!(tool, "definitely-not-a-real-tool-xyz");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn exit_status_is_passed_through() {
        let cmd = ToolCommand::new("sh", ["-c", "exit 3"]);
        let status = cmd.status(Path::new(".")).await.unwrap();
        assert_eq!(status.code(), Some(3));
    }
}
