//! # API Error Types
//!
//! Unified error handling for request handlers and the task store.
//!
//! The taxonomy is small and maps one-to-one onto HTTP statuses: malformed
//! input is the caller's fault (400), a missing delete target is 404, and
//! anything the database driver reports surfaces as 500 with the driver
//! message passed through in the response body. There is no structured error
//! code beyond the status itself.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Handler operation result type
pub type ApiResult<T> = Result<T, ApiError>;

/// Error taxonomy for the task service
#[derive(Debug, Error)]
pub enum ApiError {
    /// Unparseable request body or path segment
    #[error("{0}")]
    MalformedInput(String),

    /// Delete target absent
    #[error("task with id {id} not found")]
    NotFound { id: i32 },

    /// Any failure from the persistence layer
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Create a malformed-input error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput(message.into())
    }

    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            error!(status = %status, error = %message, "request failed");
        }

        (status, message).into_response()
    }
}
