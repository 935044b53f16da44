//! Error handler for converting AppError to HTTP responses.
//!
//! Every error becomes an [`ErrorResponse`] carrying the id of the request
//! that failed. NotFound and Conflict messages pass through verbatim; server
//! side failures are logged in full and answered with a generic message.

use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use super::request_id::current_request_id;
use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);
        let message = match &self {
            AppError::NotFound { message, .. } | AppError::Conflict { message, .. } => {
                message.clone()
            }
            AppError::BadRequest { message } => message.clone(),
            AppError::Validation { .. } => self.to_string(),
            AppError::Database { operation, .. } => {
                format!("Database operation failed: {}", operation)
            }
            AppError::Configuration { .. } => "Server configuration error".to_string(),
            AppError::ConnectionPool { .. } => "Database connection unavailable".to_string(),
            AppError::Internal { .. } => "An internal error occurred".to_string(),
        };

        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let body = ErrorResponse::new(error_to_code(&self), message)
            .with_request_id(current_request_id());
        (status, Json(body)).into_response()
    }
}

/// Maps an AppError variant to its HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Conflict { .. } => StatusCode::CONFLICT,
        AppError::Validation { .. } | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Database { .. } | AppError::Configuration { .. } | AppError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Maps an AppError variant to the `code` field of the error body.
pub fn error_to_code(error: &AppError) -> &'static str {
    match error {
        AppError::NotFound { .. } => "NOT_FOUND",
        AppError::Conflict { .. } => "CONFLICT",
        AppError::Validation { .. } | AppError::BadRequest { .. } => "BAD_REQUEST",
        AppError::ConnectionPool { .. } => "SERVICE_UNAVAILABLE",
        AppError::Database { .. } => "DATABASE_ERROR",
        AppError::Configuration { .. } | AppError::Internal { .. } => "INTERNAL_ERROR",
    }
}

/// Router fallback for paths no route matches.
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound {
        entity: "route".to_string(),
        message: format!("no route for {}", uri.path()),
    }
}
