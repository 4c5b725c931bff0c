//! The release driver: five steps in strict sequence.

use crate::error::{CliError, Result};
use crate::publish::fs;
use crate::{ReleaseConfig, ReleaseOutcome};
use std::path::PathBuf;

/// Executes the publish workflow described by a [`ReleaseConfig`].
///
/// Steps run strictly in order with no branching: clean, compile, stage the
/// two manifests, publish. There are no retries and no rollback; a failure
/// in a staging or publish step leaves earlier side effects (the wiped
/// directory, compiled output) in place.
#[derive(Debug)]
pub struct ReleaseDriver {
    config: ReleaseConfig,
}

impl ReleaseDriver {
    /// Create a driver for the given configuration
    pub fn new(config: ReleaseConfig) -> Self {
        Self { config }
    }

    /// Access the driver's configuration
    pub fn config(&self) -> &ReleaseConfig {
        &self.config
    }

    /// Step 1: remove the output directory. Missing directory is a no-op.
    pub async fn clean(&self) -> Result<()> {
        let dist = self.config.dist_path();
        log::debug!("cleaning {}", dist.display());
        fs::remove_dir_all_if_exists(&dist).await
    }

    /// Step 2: run the compiler in the project root.
    ///
    /// Returns the compiler's exit code. In strict mode a non-zero exit is
    /// an error; otherwise it is reported to the caller and the workflow
    /// may continue, matching the original behavior of the script this
    /// tool replaces.
    pub async fn compile(&self) -> Result<i32> {
        let status = self
            .config
            .compiler
            .status(&self.config.project_root)
            .await?;
        let code = status.code().unwrap_or(1);

        if !status.success() {
            if self.config.strict {
                return Err(CliError::ExecutionFailed {
                    command: self.config.compiler.display(),
                    reason: format!("exited with status {code}"),
                }
                .into());
            }
            log::warn!(
                "compiler '{}' exited with status {code}; continuing",
                self.config.compiler.display()
            );
        }

        Ok(code)
    }

    /// Steps 3 and 4: copy the exclusion manifest and the package manifest
    /// into the output directory.
    ///
    /// Both copies require the output directory to exist already; they
    /// depend on the compile step having created it. Returns the staged
    /// destination paths.
    pub async fn stage_manifests(&self) -> Result<Vec<PathBuf>> {
        let dist = self.config.dist_path();
        let exclusion = fs::copy_manifest(&self.config.exclusion_manifest_path(), &dist).await?;
        let package = fs::copy_manifest(&self.config.package_manifest_path(), &dist).await?;
        Ok(vec![exclusion, package])
    }

    /// Step 5: run the publish tool with the output directory as its
    /// working directory.
    ///
    /// Returns the publish tool's exit code; in strict mode a non-zero
    /// exit is an error.
    pub async fn publish(&self) -> Result<i32> {
        let status = self.config.publisher.status(&self.config.dist_path()).await?;
        let code = status.code().unwrap_or(1);

        if !status.success() && self.config.strict {
            return Err(CliError::ExecutionFailed {
                command: self.config.publisher.display(),
                reason: format!("exited with status {code}"),
            }
            .into());
        }

        Ok(code)
    }

    /// Run the full workflow and report the outcome.
    pub async fn run(&self) -> Result<ReleaseOutcome> {
        self.clean().await?;
        let compile_exit = self.compile().await?;
        let staged = self.stage_manifests().await?;
        let publish_exit = self.publish().await?;

        Ok(ReleaseOutcome {
            compile_exit,
            publish_exit,
            staged,
        })
    }
}
