//! Unified error handling.
//!
//! Provides a single error type that converts into an HTTP response carrying
//! the failure `CommonResponse` envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use thiserror::Error;

use crate::response::{CommonResponse, ErrorCode};

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Validation
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("{0}")]
    Validation(String),

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("Illegal status: {0}")]
    IllegalStatus(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::InvalidParameter(_) | AppError::Validation(_) => {
                ErrorCode::CommonInvalidParameter
            }
            AppError::NotFound => ErrorCode::CommonEntityNotFound,
            AppError::IllegalStatus(_) => ErrorCode::CommonIllegalStatus,
            _ => ErrorCode::CommonSystemError,
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidParameter(_)
            | AppError::Validation(_)
            | AppError::IllegalStatus(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidParameter(_) => self.to_string(),
            AppError::Validation(msg) | AppError::IllegalStatus(msg) => msg.clone(),

            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                self.error_code().message().to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                self.error_code().message().to_string()
            }

            AppError::NotFound => self.error_code().message().to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = CommonResponse::fail(self.user_message(), self.error_code().code());

        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidParameter(field) => AppError::InvalidParameter(field),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn invalid_parameter(field: impl Into<String>) -> Self {
        AppError::InvalidParameter(field.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn illegal_status(msg: impl Into<String>) -> Self {
        AppError::IllegalStatus(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
