//! Route configuration.

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::{AppError, AppResult, CorsConfig};

use crate::handlers::{health_routes, user_routes};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .merge(health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public API
        .merge(user_routes())
        .fallback(not_found)
        .with_state(state)
}

/// CORS policy allowing a single browser origin with credentials.
pub fn cors_layer(config: &CorsConfig) -> AppResult<CorsLayer> {
    let origin = HeaderValue::from_str(&config.allowed_origin).map_err(|_| {
        AppError::internal(format!("invalid CORS origin: {}", config.allowed_origin))
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}

async fn not_found() -> AppError {
    AppError::NotFound
}
