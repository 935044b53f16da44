//! Serve command handler
//!
//! Only the dry run lives here; starting the server is `Server::run`.

use crate::config::{Settings, StorageBackend};
use crate::error::AppResult;

/// Handler for `serve --dry-run`
pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Validate configuration and report what the server would do.
    pub fn validate_only(&self) -> AppResult<()> {
        self.config.validate()?;

        println!("✓ Configuration is valid");
        println!("✓ Server would bind to: {}", self.config.server.address());
        match self.config.database.backend {
            StorageBackend::Postgres => println!(
                "✓ Storage: postgres (pool {}..={} connections)",
                self.config.database.min_connections, self.config.database.max_connections
            ),
            StorageBackend::Memory => println!("✓ Storage: memory (records are not persisted)"),
        }
        println!("✓ Log level: {}", self.config.logger.level);
        println!("Dry run completed successfully");
        Ok(())
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Settings {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/registrar_test".to_string();
        config
    }

    #[test]
    fn test_serve_handler_new() {
        let config = valid_config();
        let handler = ServeCommandHandler::new(config.clone());
        assert_eq!(handler.config(), &config);
    }

    #[test]
    fn test_serve_handler_dry_run() {
        assert!(ServeCommandHandler::new(valid_config()).validate_only().is_ok());
    }

    #[test]
    fn test_serve_handler_dry_run_invalid_config() {
        let mut config = valid_config();
        config.server.port = 0;
        assert!(ServeCommandHandler::new(config).validate_only().is_err());
    }
}
