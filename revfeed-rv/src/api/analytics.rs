//! Aggregate analytics endpoint

use axum::{extract::State, Json};

use crate::models::AnalyticsResponse;
use crate::AppState;

/// GET /api/analytics
///
/// Aggregates over the full collection: average rating, per-star
/// distribution, and the two rolling 7-day trend windows.
pub async fn get_analytics(State(state): State<AppState>) -> Json<AnalyticsResponse> {
    Json(state.store.analytics(revfeed_common::time::now()))
}
