//! revfeed-rv library - Review Feedback module
//!
//! Collects customer star-rating reviews, enriches each through the Gemini
//! text-generation API, persists the enriched records to a flat JSON file,
//! and serves filtered listings plus aggregate analytics over HTTP.

use axum::Router;
use tower_http::cors::CorsLayer;

pub mod api;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use crate::error::{ApiError, ApiResult};

use crate::services::Enrichment;
use crate::store::ReviewStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Flat-file review store
    pub store: ReviewStore,
    /// AI enrichment service
    pub enrichment: Enrichment,
}

impl AppState {
    /// Create new application state
    pub fn new(store: ReviewStore, enrichment: Enrichment) -> Self {
        Self { store, enrichment }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/api/submit-review", post(api::submit_review))
        .route("/api/reviews", get(api::list_reviews))
        .route("/api/analytics", get(api::get_analytics))
        .merge(api::health_routes())
        // Development-mode permissiveness: the dashboard may be served from
        // any origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}
