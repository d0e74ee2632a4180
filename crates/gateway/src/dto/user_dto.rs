//! User API bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Registration request with validation
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterUserRequest {
    /// Display name, any string is accepted
    #[validate(required(message = "username is required"))]
    #[schema(example = "alice")]
    pub username: Option<String>,
}

/// Registration result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    #[schema(example = "user_q3ZkP0xW9aLmT4cVbN7e")]
    pub user_token: String,
}
