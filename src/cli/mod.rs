//! Command-line interface for registrar
//!
//! Parses arguments, merges them over file and environment configuration,
//! and runs the commands that do not start the server.

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands, Environment, LogLevel};

use anyhow::Context;

use crate::config::Settings;
use crate::logger::init_logger;

/// Load configuration and apply the CLI overrides on top.
///
/// # Errors
/// Returns error if configuration loading, merging, or validation fails
pub fn load_and_merge_config(cli: &Cli) -> anyhow::Result<Settings> {
    let merger =
        ConfigurationMerger::from_config_path(cli.config.as_deref(), cli.env.map(Into::into))
            .context("Failed to load configuration")?;

    merger
        .merge_cli_args(cli)
        .context("Invalid configuration")
}

/// Install the global tracing subscriber described by `settings`.
pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<()> {
    let logger_config = settings
        .logger
        .clone()
        .into_logger_config()
        .context("Invalid logger configuration")?;

    init_logger(logger_config)
}
