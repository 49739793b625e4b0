//! Centralized error handling.
//!
//! Provides a unified error type for the entire application. Every variant
//! is fatal: errors propagate to `main`, which logs them and exits. Inside
//! the web front-end an error becomes a `500` response tagged with
//! [`FatalError`] so the server can be stopped.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Connection provider
    #[error("Invalid connection string: {0}")]
    Connection(String),

    // User repository
    #[error("Failed to create users table: {0}")]
    Schema(#[source] DbErr),

    #[error("Failed to insert user: {0}")]
    Write(#[source] DbErr),

    #[error("Failed to read users: {0}")]
    Read(#[source] DbErr),

    // Web front-end
    #[error("Failed to render view: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("Server stopped after a failed request: {0}")]
    Aborted(String),

    // Internal
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Get error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Connection(_) => "CONNECTION_ERROR",
            AppError::Schema(_) => "SCHEMA_ERROR",
            AppError::Write(_) => "WRITE_ERROR",
            AppError::Read(_) => "READ_ERROR",
            AppError::Template(_) => "TEMPLATE_ERROR",
            AppError::Aborted(_) => "ABORTED",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Marker attached to the response of a failed request.
///
/// Carries the rendered error message so the fail-fast middleware can stop
/// the server with it.
#[derive(Debug, Clone)]
pub struct FatalError(pub String);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(code = self.code(), "Request failed: {}", self);

        let message = self.to_string();
        let mut response =
            (StatusCode::INTERNAL_SERVER_ERROR, "An internal error occurred").into_response();
        response.extensions_mut().insert(FatalError(message));
        response
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn connection(msg: impl Into<String>) -> Self {
        AppError::Connection(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
