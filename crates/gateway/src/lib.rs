//! API Gateway Library
//!
//! This crate provides the HTTP REST API. It embeds the user service
//! library and calls its facade in-process.

pub mod config;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use user_service_lib::config::UserServiceConfig;
use user_service_lib::{build_facade, Database};

use crate::config::GatewayConfig;
use crate::routes::{cors_layer, create_router};
use crate::state::AppState;

/// Connect the database and serve the HTTP API until the process exits.
pub async fn run(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let services = UserServiceConfig::from_env();

    // Initialize database (applies pending migrations)
    let db = Database::connect(&services.database).await?;

    // Create app state
    let state = AppState::new(Arc::new(build_facade(&db)), db);

    // Build router
    let app = create_router(state)
        .layer(cors_layer(&config.cors)?)
        .layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
