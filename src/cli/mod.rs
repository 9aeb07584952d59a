//! CLI module for pushgate
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration merging (CLI args + config files)
//! - Command execution and the serve handler

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

// Re-export public types for convenience
pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands, Environment, LogLevel};

use crate::config::settings::Settings;

/// Load and merge configuration from CLI arguments
///
/// This function handles the complete configuration loading process:
/// 1. Apply the `--env` override, if given
/// 2. Load base configuration from files and environment variables
/// 3. Merge CLI argument overrides
/// 4. Validate the final configuration
///
/// # Errors
/// Returns error if configuration loading, merging, or validation fails
pub fn load_and_merge_config(cli: &Cli) -> anyhow::Result<Settings> {
    if let Some(ref env) = cli.env {
        let env: crate::config::Environment = env.clone().into();
        unsafe {
            std::env::set_var(crate::config::Environment::ENV_VAR, env.as_str());
        }
    }

    let merger = ConfigurationMerger::from_config_path(cli.config.as_ref())?;
    let settings = merger.merge_cli_args(cli)?;
    Ok(settings)
}
