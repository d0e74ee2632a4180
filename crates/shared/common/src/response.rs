//! Uniform response envelope.
//!
//! Every HTTP body produced by the API, success or failure, is wrapped in a
//! `CommonResponse`:
//!
//! ```json
//! { "result": "SUCCESS", "data": { ... }, "message": null, "errorCode": null }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Outcome flag carried by every envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResultKind {
    Success,
    Fail,
}

/// Client-facing error codes with their default messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    CommonSystemError,
    CommonInvalidParameter,
    CommonEntityNotFound,
    CommonIllegalStatus,
}

impl ErrorCode {
    /// Wire name of the code
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::CommonSystemError => "COMMON_SYSTEM_ERROR",
            ErrorCode::CommonInvalidParameter => "COMMON_INVALID_PARAMETER",
            ErrorCode::CommonEntityNotFound => "COMMON_ENTITY_NOT_FOUND",
            ErrorCode::CommonIllegalStatus => "COMMON_ILLEGAL_STATUS",
        }
    }

    /// Default message shown to clients
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::CommonSystemError => {
                "A temporary error occurred. Please try again later."
            }
            ErrorCode::CommonInvalidParameter => "The requested value is not valid.",
            ErrorCode::CommonEntityNotFound => "The entity does not exist.",
            ErrorCode::CommonIllegalStatus => "The status value is not valid.",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonResponse<T> {
    pub result: ResultKind,
    pub data: Option<T>,
    pub message: Option<String>,
    pub error_code: Option<String>,
}

impl<T> CommonResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            result: ResultKind::Success,
            data: Some(data),
            message: None,
            error_code: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.result == ResultKind::Success
    }
}

impl CommonResponse<()> {
    /// Failure envelope with an explicit message and code
    pub fn fail(message: impl Into<String>, error_code: impl Into<String>) -> Self {
        Self {
            result: ResultKind::Fail,
            data: None,
            message: Some(message.into()),
            error_code: Some(error_code.into()),
        }
    }

    /// Failure envelope using the code's default message
    pub fn fail_with(error_code: ErrorCode) -> Self {
        Self::fail(error_code.message(), error_code.code())
    }
}

impl<T: Serialize> IntoResponse for CommonResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
