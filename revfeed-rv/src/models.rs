//! Persisted and wire data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One persisted customer review plus its AI-generated enrichment.
///
/// Records are append-only: once written they are never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Unique record id (UUID v4 text)
    pub id: String,
    /// Creation time, ISO-8601 UTC text
    pub timestamp: String,
    /// Star rating, 1..=5
    pub rating: u8,
    /// Customer review text
    pub review: String,
    /// AI-generated reply addressed to the reviewer
    pub ai_response: String,
    /// AI-generated internal summary
    pub ai_summary: String,
    /// AI-generated recommendations, at most three
    pub recommended_actions: Vec<String>,
}

/// POST /api/submit-review request body
#[derive(Debug, Deserialize)]
pub struct ReviewSubmission {
    /// Star rating from 1 to 5
    pub rating: u8,
    /// Review text
    pub review: String,
}

/// POST /api/submit-review response body
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub ai_response: String,
    pub id: String,
}

/// GET /api/reviews response body
#[derive(Debug, Serialize)]
pub struct ReviewsListResponse {
    pub reviews: Vec<Review>,
    pub total: usize,
}

/// Count and mean rating for one rolling 7-day window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingTrend {
    pub count: usize,
    pub avg_rating: f64,
}

/// The two rolling trend windows compared on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentTrends {
    pub last_7_days: RatingTrend,
    pub previous_7_days: RatingTrend,
}

/// GET /api/analytics response body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsResponse {
    /// Mean rating over all records, rounded to 2 decimals
    pub avg_rating: f64,
    /// Total record count
    pub total: usize,
    /// Count per rating value, zero-filled over 1..=5
    pub distribution: BTreeMap<u8, usize>,
    pub recent_trends: RecentTrends,
}
