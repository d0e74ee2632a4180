//! OpenAPI documentation.

use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::dto::{RegisterResponse, RegisterUserRequest};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::user_handler::register_user),
    components(schemas(
        RegisterUserRequest,
        RegisterResponse,
        RegisterEnvelope,
        FailureEnvelope
    )),
    tags((name = "Users", description = "User registration endpoints"))
)]
pub struct ApiDoc;

/// Success envelope around a registration result.
///
/// Documentation only; handlers return `common::CommonResponse`.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterEnvelope {
    #[schema(example = "SUCCESS")]
    pub result: String,
    pub data: RegisterResponse,
    pub message: Option<String>,
    pub error_code: Option<String>,
}

/// Failure envelope returned for every error.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FailureEnvelope {
    #[schema(example = "FAIL")]
    pub result: String,
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
    #[schema(example = "username is required")]
    pub message: String,
    #[schema(example = "COMMON_INVALID_PARAMETER")]
    pub error_code: String,
}
