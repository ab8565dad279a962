//! Error types for Bookshelf server

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::response::StatusResponse;

/// Failure categories reported by the books API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidPayload,
    InvalidId,
    MissingFields,
    NotFound,
    StorageUnavailable,
    MethodNotAllowed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidPayload => "invalid-payload",
            ErrorCode::InvalidId => "invalid-id",
            ErrorCode::MissingFields => "missing-fields",
            ErrorCode::NotFound => "not-found",
            ErrorCode::StorageUnavailable => "storage-unavailable",
            ErrorCode::MethodNotAllowed => "method-not-allowed",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Missing fields: {0}")]
    MissingFields(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl AppError {
    /// Category and HTTP status this error is reported with
    pub fn code(&self) -> (StatusCode, ErrorCode) {
        match self {
            AppError::InvalidPayload(_) => (StatusCode::BAD_REQUEST, ErrorCode::InvalidPayload),
            AppError::InvalidId(_) => (StatusCode::BAD_REQUEST, ErrorCode::InvalidId),
            AppError::MissingFields(_) => (StatusCode::BAD_REQUEST, ErrorCode::MissingFields),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::NotFound),
            AppError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, ErrorCode::MethodNotAllowed)
            }
            AppError::StorageUnavailable(_) | AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::StorageUnavailable,
            ),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("Rejected query string: {}", rejection.body_text());
        AppError::InvalidId("Invalid ID format".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.code();

        let message = match self {
            AppError::InvalidPayload(msg)
            | AppError::InvalidId(msg)
            | AppError::MissingFields(msg)
            | AppError::NotFound(msg)
            | AppError::StorageUnavailable(msg) => msg,
            AppError::MethodNotAllowed => "Method not allowed".to_string(),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Database error".to_string()
            }
        };

        tracing::debug!(code = %code, status = status.as_u16(), "{}", message);

        (status, Json(StatusResponse::fail(message))).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
