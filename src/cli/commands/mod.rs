//! Command execution coordinating the release workflow.
//!
//! Validates arguments, runs the publish workflow with step-by-step user
//! feedback, and translates errors into exit codes with recovery
//! suggestions.

mod publish;

use crate::cli::{Args, OutputManager, RuntimeConfig};
use crate::error::Result;

use publish::execute_publish;

/// Execute the release run described by the parsed arguments
pub async fn execute_command(args: Args) -> Result<i32> {
    // Validate arguments
    if let Err(validation_error) = args.validate() {
        // Validation errors are never quiet
        let output = OutputManager::new(false, false);
        output.error(&format!("Invalid arguments: {}", validation_error));
        return Ok(1);
    }

    let config = RuntimeConfig::from(&args);

    match execute_publish(&args, &config).await {
        Ok(exit_code) => Ok(exit_code),
        Err(e) => {
            config.error_println(&format!("Release failed: {}", e));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                config.println("\n💡 Recovery suggestions:");
                for suggestion in suggestions {
                    config.println(&format!("  • {}", suggestion));
                }
            }

            Ok(1)
        }
    }
}
