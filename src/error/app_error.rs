use crate::error::DatabaseErrorConverter;
use crate::models::EnrollmentKey;
use thiserror::Error;

/// Application-wide error type that represents all possible errors in the system.
///
/// `NotFound` and `Conflict` carry the exact client-facing message; their
/// `Display` output is that message and nothing else.
#[derive(Error, Debug)]
pub enum AppError {
    /// A referenced record does not exist
    #[error("{message}")]
    NotFound { entity: String, message: String },

    /// The write would create a second record with the same identity
    #[error("{message}")]
    Conflict { entity: String, message: String },

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Bad request error with descriptive message
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Database operation error with operation context
    #[error("Database operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Connection pool error
    #[error("Connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn student_not_found(id: i64) -> Self {
        AppError::NotFound {
            entity: "student".to_string(),
            message: format!("student with id {} not found", id),
        }
    }

    pub fn course_not_found(id: i64) -> Self {
        AppError::NotFound {
            entity: "course".to_string(),
            message: format!("course with id {} not found", id),
        }
    }

    pub fn enrollment_not_found(key: EnrollmentKey) -> Self {
        AppError::NotFound {
            entity: "enrollment".to_string(),
            message: format!(
                "enrollment for user with id {} and course with id {} not found",
                key.student_id, key.course_id
            ),
        }
    }

    pub fn already_enrolled(key: EnrollmentKey) -> Self {
        AppError::Conflict {
            entity: "enrollment".to_string(),
            message: format!(
                "student {} is already enrolled in the course {}",
                key.student_id, key.course_id
            ),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(error: diesel::result::Error) -> Self {
        DatabaseErrorConverter::convert_diesel_error(error, "database operation")
    }
}

impl From<diesel_async::pooled_connection::PoolError> for AppError {
    fn from(error: diesel_async::pooled_connection::PoolError) -> Self {
        AppError::ConnectionPool {
            source: anyhow::Error::new(error),
        }
    }
}

impl From<bb8::RunError<diesel_async::pooled_connection::PoolError>> for AppError {
    fn from(error: bb8::RunError<diesel_async::pooled_connection::PoolError>) -> Self {
        AppError::ConnectionPool {
            source: anyhow::Error::new(error),
        }
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(error: crate::config::ConfigError) -> Self {
        let key = match error {
            crate::config::ConfigError::ValidationError { ref field, .. } => field.clone(),
            _ => "settings".to_string(),
        };
        AppError::Configuration {
            key,
            source: anyhow::Error::new(error),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
