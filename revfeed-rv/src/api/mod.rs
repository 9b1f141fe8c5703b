//! HTTP API handlers for revfeed-rv

pub mod analytics;
pub mod health;
pub mod reviews;

pub use analytics::get_analytics;
pub use health::health_routes;
pub use reviews::{list_reviews, submit_review};
