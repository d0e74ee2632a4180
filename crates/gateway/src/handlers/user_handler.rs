//! User handlers.

use axum::{extract::State, routing::post, Router};

use common::{AppError, AppResult, CommonResponse};

use crate::dto::{mapper, RegisterResponse, RegisterUserRequest};
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/api/v1/users", post(register_user))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = RegisterUserRequest,
    responses(
        (status = 200, description = "User registered", body = crate::openapi::RegisterEnvelope),
        (status = 400, description = "Missing username or malformed body", body = crate::openapi::FailureEnvelope),
        (status = 500, description = "Storage failure", body = crate::openapi::FailureEnvelope)
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterUserRequest>,
) -> AppResult<CommonResponse<RegisterResponse>> {
    tracing::debug!(?request, "Registering user");

    let command = mapper::of_request(Some(request))
        .ok_or_else(|| AppError::validation("request body is required"))?;

    let user_token = state.user_facade.register_user(command).await?;

    let response = mapper::of_token(Some(user_token))
        .ok_or_else(|| AppError::internal("registration returned no user token"))?;

    Ok(CommonResponse::success(response))
}
