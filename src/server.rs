//! Server module for managing HTTP server lifecycle
//!
//! This module handles backend selection, startup, and graceful shutdown.

use std::future::Future;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

use crate::api::create_router;
use crate::config::{Settings, StorageBackend};
use crate::db::{establish_async_connection_pool, run_pending_migrations};
use crate::state::AppState;

/// HTTP server manager
pub struct Server {
    settings: Settings,
}

impl Server {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Start the server and run until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    /// - Database connection pool or migration errors
    /// - Address binding errors
    /// - Server runtime errors
    pub async fn run(self) -> anyhow::Result<()> {
        self.log_configuration();

        let state = self.build_state().await?;
        let router = create_router(state, &self.settings.server);

        let address = self.settings.server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind to address");
            anyhow::anyhow!("Failed to bind to {}: {}", address, e)
        })?;

        serve(listener, router, shutdown_signal()).await?;
        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Application state for the configured storage backend.
    ///
    /// For postgres this opens the pool and, when `auto_migrate` is set,
    /// applies pending migrations first.
    pub async fn build_state(&self) -> anyhow::Result<AppState> {
        let database = &self.settings.database;
        match database.backend {
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; records are lost on shutdown");
                Ok(AppState::in_memory())
            }
            StorageBackend::Postgres => {
                if database.auto_migrate {
                    let applied = run_pending_migrations(&database.url)
                        .await
                        .context("Failed to apply pending migrations")?;
                    tracing::info!(count = applied.len(), "Pending migrations applied");
                }

                tracing::info!("Initializing database connection pool...");
                let pool = establish_async_connection_pool(database)
                    .await
                    .context("Failed to initialize database connection pool")?;
                tracing::info!("Database connection pool initialized");

                Ok(AppState::postgres(pool))
            }
        }
    }

    fn log_configuration(&self) {
        let settings = &self.settings;
        tracing::info!(
            app_name = %settings.application.name,
            app_version = %settings.application.version,
            "Application starting"
        );
        tracing::info!(
            host = %settings.server.host,
            port = settings.server.port,
            request_timeout = settings.server.request_timeout,
            keep_alive_timeout = settings.server.keep_alive_timeout,
            "Server configuration loaded"
        );
        // The URL may embed credentials, so it is never logged.
        tracing::info!(
            backend = %settings.database.backend,
            max_connections = settings.database.max_connections,
            min_connections = settings.database.min_connections,
            connection_timeout = settings.database.connection_timeout,
            auto_migrate = settings.database.auto_migrate,
            "Database configuration loaded"
        );
        tracing::info!(
            level = %settings.logger.level,
            console_enabled = settings.logger.console.enabled,
            file_enabled = settings.logger.file.enabled,
            "Logger configuration loaded"
        );
    }
}

/// Serve `router` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(address) = listener.local_addr() {
        tracing::info!(address = %address, "Server listening");
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Waits for Ctrl+C or SIGTERM.
///
/// A signal whose handler cannot be installed is logged and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend_needs_no_database() {
        let mut settings = Settings::default();
        settings.database.backend = StorageBackend::Memory;

        let state = Server::new(settings).build_state().await.unwrap();
        assert!(state.db_pool.is_none());
        assert!(state.services.students.find_all().await.unwrap().is_empty());
    }
}
