//! Configuration merger for CLI arguments and config files
//!
//! CLI arguments override file and environment configuration. The merged
//! result is validated once, after every override has been applied.

use std::path::Path;

use super::parser::{Cli, Commands};
use crate::config::{ConfigError, ConfigLoader, Environment, Settings, StorageBackend};

/// Applies CLI overrides on top of loaded configuration
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Load base configuration from `config_path`, or from the layered
    /// configuration directory when no path is given.
    ///
    /// The result is not validated yet; see [`merge_cli_args`](Self::merge_cli_args).
    pub fn from_config_path(
        config_path: Option<&Path>,
        environment: Option<Environment>,
    ) -> Result<Self, ConfigError> {
        let mut loader = ConfigLoader::new()?;
        if let Some(environment) = environment {
            loader = loader.with_environment(environment);
        }
        if let Some(path) = config_path {
            loader = loader.with_config_file(path);
        }

        Ok(Self::new(loader.load_unvalidated()?))
    }

    /// Apply CLI overrides and validate the merged settings.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(Commands::Serve {
            ref host,
            port,
            log_level,
            in_memory,
            ..
        }) = cli.command
        {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            // Command level wins over --verbose/--quiet.
            if let Some(level) = log_level {
                config.logger.level = level.as_str().to_string();
            }
            if in_memory {
                config.database.backend = StorageBackend::Memory;
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}
