//! HTTP tests driving the router with `oneshot` against in-memory SQLite.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::EntityTrait;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{AppError, CorsConfig, DatabaseConfig};
use gateway_lib::routes::{cors_layer, create_router};
use gateway_lib::state::AppState;
use user_service_lib::repository::entities::user;
use user_service_lib::service::MockUserService;
use user_service_lib::{build_facade, Database, UserFacade};

async fn setup() -> (Router, Database) {
    let db = Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    let state = AppState::new(Arc::new(build_facade(&db)), db.clone());
    (create_router(state), db)
}

fn register_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/v1/users")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn is_user_token(value: &Value) -> bool {
    value
        .as_str()
        .and_then(|token| token.strip_prefix("user_"))
        .map(|suffix| !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or(false)
}

#[tokio::test]
async fn test_register_user_returns_success_envelope() {
    let (app, db) = setup().await;

    let (status, body) = send(&app, register_request(r#"{"username":"alice"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "SUCCESS");
    assert_eq!(body["message"], Value::Null);
    assert_eq!(body["errorCode"], Value::Null);
    assert!(is_user_token(&body["data"]["userToken"]));

    let rows = user::Entity::find().all(db.connection()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].username, "alice");
    assert_eq!(json!(rows[0].user_token), body["data"]["userToken"]);
}

#[tokio::test]
async fn test_register_same_username_twice() {
    let (app, _db) = setup().await;

    let (first_status, first) = send(&app, register_request(r#"{"username":"bob"}"#)).await;
    let (second_status, second) = send(&app, register_request(r#"{"username":"bob"}"#)).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_ne!(first["data"]["userToken"], second["data"]["userToken"]);
}

#[tokio::test]
async fn test_register_accepts_empty_username() {
    let (app, _db) = setup().await;

    let (status, body) = send(&app, register_request(r#"{"username":""}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(is_user_token(&body["data"]["userToken"]));
}

#[tokio::test]
async fn test_missing_username_is_rejected() {
    let (app, db) = setup().await;

    for payload in [r#"{}"#, r#"{"username":null}"#] {
        let (status, body) = send(&app, register_request(payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["result"], "FAIL");
        assert_eq!(body["data"], Value::Null);
        assert_eq!(body["errorCode"], "COMMON_INVALID_PARAMETER");
        assert_eq!(body["message"], "username is required");
    }

    let rows = user::Entity::find().all(db.connection()).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let (app, _db) = setup().await;

    let (status, body) = send(&app, register_request(r#"{"username":"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorCode"], "COMMON_INVALID_PARAMETER");
}

#[tokio::test]
async fn test_storage_failure_hides_details() {
    let db = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();
    let mut service = MockUserService::new();
    service
        .expect_register_user()
        .returning(|_| Err(AppError::internal("connection reset by peer")));
    let facade = UserFacade::new(Arc::new(service));
    let app = create_router(AppState::new(Arc::new(facade), db));

    let (status, body) = send(&app, register_request(r#"{"username":"carol"}"#)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["result"], "FAIL");
    assert_eq!(body["errorCode"], "COMMON_SYSTEM_ERROR");
    assert!(!body["message"]
        .as_str()
        .unwrap_or_default()
        .contains("connection reset"));
}

#[tokio::test]
async fn test_handler_maps_body_to_command_and_token_to_response() {
    let db = Database::connect(&DatabaseConfig::in_memory()).await.unwrap();
    let mut service = MockUserService::new();
    service
        .expect_register_user()
        .withf(|command| command.username.as_deref() == Some("dana"))
        .times(1)
        .returning(|_| Ok("user_fixedTokenForDana0".to_string()));
    let facade = UserFacade::new(Arc::new(service));
    let app = create_router(AppState::new(Arc::new(facade), db));

    let (status, body) = send(&app, register_request(r#"{"username":"dana"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "result": "SUCCESS",
            "data": { "userToken": "user_fixedTokenForDana0" },
            "message": null,
            "errorCode": null
        })
    );
}

#[tokio::test]
async fn test_unknown_route_returns_not_found_envelope() {
    let (app, _db) = setup().await;
    let request = Request::builder()
        .uri("/api/v1/nope")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errorCode"], "COMMON_ENTITY_NOT_FOUND");
}

#[tokio::test]
async fn test_health_reports_database() {
    let (app, _db) = setup().await;
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_lists_registration() {
    let (app, _db) = setup().await;
    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/users"]["post"].is_object());
}

#[tokio::test]
async fn test_cors_preflight_allows_configured_origin() {
    let (app, _db) = setup().await;
    let app = app.layer(cors_layer(&CorsConfig::default()).unwrap());
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/users")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let headers = response.headers();

    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}
