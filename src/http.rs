//! HTTP transport module for the roadmap service
//!
//! Axum router with a single generation endpoint plus a health probe.
//! CORS is pinned to one configured origin with credentials allowed;
//! methods and headers are mirrored because wildcards cannot be combined
//! with credentialed requests.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::HeaderValue,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::config::Config;
use crate::generation::Generator;
use crate::roadmap::{Roadmap, RoadmapGenerator};

/// Shared state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub roadmap: RoadmapGenerator,
}

/// Incoming request body: one free-text field, not validated further.
#[derive(Debug, Deserialize)]
pub struct AspirationRequest {
    pub aspiration: String,
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    "ok"
}

/// POST /generate-roadmap
pub async fn generate_roadmap_handler(
    State(state): State<AppState>,
    Json(request): Json<AspirationRequest>,
) -> crate::error::Result<Json<Roadmap>> {
    let reply = state.roadmap.generate(&request.aspiration).await?;
    Ok(Json(reply))
}

pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let origin: HeaderValue = state
        .config
        .runtime
        .cors_origin
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Ok(Router::new()
        .route("/health", get(health_handler))
        .route("/generate-roadmap", post(generate_roadmap_handler))
        .layer(cors)
        .with_state(state))
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    generator: Option<Arc<dyn Generator>>,
) -> anyhow::Result<()> {
    let state = AppState {
        roadmap: RoadmapGenerator::new(generator, config.runtime.prompt_style),
        config: config.clone(),
    };

    let app = build_router(state)?;

    let listener = tokio::net::TcpListener::bind(config.runtime.http_bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind HTTP listener: {}", e))?;

    tracing::info!(
        "Starting HTTP server on {} (prompt style: {})",
        config.runtime.http_bind,
        config.runtime.prompt_style
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;

    Ok(())
}
