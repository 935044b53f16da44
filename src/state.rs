//! Application state for Axum web framework.

use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;

/// Shared services handed to every request handler.
///
/// Cloning is cheap since Services and AsyncDbPool are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    /// Present only for the postgres backend; health checks ping it directly.
    pub db_pool: Option<AsyncDbPool>,
}

impl AppState {
    /// State backed by PostgreSQL.
    ///
    /// # Example
    /// ```ignore
    /// let pool = establish_async_connection_pool(&settings.database).await?;
    /// let state = AppState::postgres(pool);
    /// ```
    pub fn postgres(pool: AsyncDbPool) -> Self {
        Self {
            services: Services::new(Repositories::postgres(pool.clone())),
            db_pool: Some(pool),
        }
    }

    /// State backed by a fresh, empty memory store.
    pub fn in_memory() -> Self {
        Self::from_repositories(Repositories::in_memory())
    }

    /// State over caller-supplied stores, without a database pool.
    pub fn from_repositories(repos: Repositories) -> Self {
        Self {
            services: Services::new(repos),
            db_pool: None,
        }
    }
}
