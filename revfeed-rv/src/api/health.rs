//! Liveness endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::json;

use crate::AppState;

/// GET /
///
/// Static liveness payload, kept wire-compatible with the original API.
pub async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Review Feedback System API",
        "status": "running",
    }))
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /health
///
/// Health check endpoint for monitoring.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "revfeed-rv".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build liveness routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
