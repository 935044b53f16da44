//! Migrate command handler
//!
//! Applies, previews or reverts the embedded schema migrations.

use crate::config::{Settings, StorageBackend};
use crate::db;
use crate::error::{AppError, AppResult};

/// Handler for the migrate command
pub struct MigrateCommandHandler {
    config: Settings,
}

impl MigrateCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Execute the migrate command
    ///
    /// # Errors
    /// - The memory backend is configured (there is no schema to migrate)
    /// - Database connection or migration errors
    pub async fn execute(&self, dry_run: bool, rollback: Option<u32>) -> AppResult<()> {
        if self.config.database.backend == StorageBackend::Memory {
            return Err(AppError::Validation {
                field: "database.backend".to_string(),
                reason: "Migrations require the postgres backend".to_string(),
            });
        }
        self.config.database.validate()?;

        let url = self.config.database.url.as_str();
        match (dry_run, rollback) {
            (true, _) => {
                println!("Checking for pending migrations...");
                let pending = db::pending_migrations(url).await?;
                if pending.is_empty() {
                    println!("✓ No pending migrations found - database is up to date");
                } else {
                    println!("Found {} pending migration(s):", pending.len());
                    for name in &pending {
                        println!("  - {}", name);
                    }
                    println!("\nRun without --dry-run to apply these migrations");
                }
            }
            (false, Some(steps)) => {
                println!("Rolling back {} migration(s)...", steps);
                let reverted = db::revert_migrations(url, steps).await?;
                for version in &reverted {
                    println!("  - {}", version);
                }
                println!("✓ Rolled back {} migration(s)", reverted.len());
            }
            (false, None) => {
                println!("Running database migrations...");
                let applied = db::run_pending_migrations(url).await?;
                if applied.is_empty() {
                    println!("✓ No migrations to apply - database is already up to date");
                } else {
                    println!("✓ Applied {} migration(s):", applied.len());
                    for version in &applied {
                        println!("  - {}", version);
                    }
                }
            }
        }

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
    fn test_migrate_handler_new() {
        let config = valid_config();
        let handler = MigrateCommandHandler::new(config.clone());
        assert_eq!(handler.config(), &config);
    }

    #[tokio::test]
    async fn test_migrate_handler_zero_rollback_steps() {
        let handler = MigrateCommandHandler::new(valid_config());

        match handler.execute(false, Some(0)).await {
            Err(AppError::Validation { field, reason }) => {
                assert_eq!(field, "rollback_steps");
                assert!(reason.contains("must be greater than 0"));
            }
            _ => panic!("Expected validation error for zero rollback steps"),
        }
    }

    #[tokio::test]
    async fn test_migrate_handler_rejects_memory_backend() {
        let mut config = valid_config();
        config.database.backend = StorageBackend::Memory;
        let handler = MigrateCommandHandler::new(config);

        match handler.execute(false, None).await {
            Err(AppError::Validation { field, .. }) => assert_eq!(field, "database.backend"),
            _ => panic!("Expected validation error for memory backend"),
        }
    }
}
