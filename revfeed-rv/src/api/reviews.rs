//! Review submission and listing endpoints

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{Review, ReviewSubmission, ReviewsListResponse, SubmitResponse};
use crate::store::ReviewQuery;
use crate::AppState;

/// Query parameters for GET /api/reviews
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Page size (0 = unlimited)
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Records to skip
    #[serde(default)]
    pub offset: usize,

    /// Exact-match rating filter
    pub rating: Option<u8>,

    /// Case-insensitive substring filter on review text
    pub search: Option<String>,
}

fn default_limit() -> usize {
    50
}

/// POST /api/submit-review
///
/// Validates the submission, runs the three enrichment operations
/// sequentially, then appends the finished record. Enrichment failures
/// degrade to fallback text inside the enrichment service and never fail
/// the request.
///
/// Body deserialization failures are folded into the same `{"detail"}`
/// error shape as handler-level validation.
pub async fn submit_review(
    State(state): State<AppState>,
    submission: Result<Json<ReviewSubmission>, JsonRejection>,
) -> ApiResult<Json<SubmitResponse>> {
    let Json(submission) = submission.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    if !(1..=5).contains(&submission.rating) {
        return Err(ApiError::BadRequest(format!(
            "Rating must be between 1 and 5, got {}",
            submission.rating
        )));
    }
    if submission.review.is_empty() {
        return Err(ApiError::BadRequest(
            "Review text must not be empty".to_string(),
        ));
    }

    let ai_response = state
        .enrichment
        .generate_response(submission.rating, &submission.review)
        .await;
    let ai_summary = state
        .enrichment
        .generate_summary(submission.rating, &submission.review)
        .await;
    let recommended_actions = state
        .enrichment
        .generate_actions(submission.rating, &submission.review)
        .await;

    let review = Review {
        id: Uuid::new_v4().to_string(),
        timestamp: revfeed_common::time::format_utc(revfeed_common::time::now()),
        rating: submission.rating,
        review: submission.review,
        ai_response: ai_response.clone(),
        ai_summary,
        recommended_actions,
    };
    let id = review.id.clone();
    let rating = review.rating;

    state
        .store
        .append(review)
        .map_err(|e| ApiError::Internal(format!("Error processing review: {}", e)))?;

    info!("Stored review {} ({} stars)", id, rating);

    Ok(Json(SubmitResponse {
        success: true,
        ai_response,
        id,
    }))
}

/// GET /api/reviews
///
/// Filtered, paginated listing, newest first, plus the filtered total.
/// Unparsable query parameters report through the `{"detail"}` error shape.
pub async fn list_reviews(
    State(state): State<AppState>,
    params: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Json<ReviewsListResponse>> {
    let Query(params) = params.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let query = ReviewQuery {
        limit: Some(params.limit),
        offset: params.offset,
        rating: params.rating,
        search: params.search,
    };

    let (reviews, total) = state.store.query(&query);

    Ok(Json(ReviewsListResponse { reviews, total }))
}
