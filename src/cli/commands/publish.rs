//! The publish command: run the five workflow steps with user feedback.

use crate::cli::{Args, RuntimeConfig};
use crate::error::Result;
use crate::publish::ReleaseDriver;
use crate::ReleaseConfig;

/// Execute the full release run, printing progress per step.
///
/// Returns the publish tool's exit code, which is the run's de facto
/// result.
pub(super) async fn execute_publish(args: &Args, config: &RuntimeConfig) -> Result<i32> {
    let mut release = ReleaseConfig::for_project(args.root());
    release.strict = args.strict;

    let dist = release.dist_path();
    let driver = ReleaseDriver::new(release);

    // Step 1: clean
    config.verbose_println(&format!("Removing {}", dist.display()));
    driver.clean().await?;
    let _ = config.output().progress(&format!("Cleared {}", dist.display()));

    // Step 2: compile
    let _ = config
        .output()
        .progress(&format!("Running {}", driver.config().compiler.display()));
    let compile_exit = driver.compile().await?;
    if compile_exit == 0 {
        config.success_println("Compiled");
    } else {
        config.warning_println(&format!(
            "Compiler exited with status {compile_exit}; continuing"
        ));
    }

    // Steps 3 and 4: stage manifests
    let staged = driver.stage_manifests().await?;
    for path in &staged {
        config.verbose_println(&format!("Staged {}", path.display()));
    }
    config.success_println(&format!("Staged {} manifest files", staged.len()));

    // Step 5: publish
    let _ = config
        .output()
        .progress(&format!("Running {}", driver.config().publisher.display()));
    let publish_exit = driver.publish().await?;
    if publish_exit == 0 {
        config.success_println("Published");
    } else {
        config.warning_println(&format!("Publish exited with status {publish_exit}"));
    }

    Ok(publish_exit)
}
