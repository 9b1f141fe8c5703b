//! Flat-file review store
//!
//! The whole collection lives in one JSON file. Every append is a full
//! read-modify-write of that file, so a concurrent writer's result can be
//! silently lost (last writer wins). Single-process deployment assumption.

use crate::models::{AnalyticsResponse, RatingTrend, RecentTrends, Review};
use chrono::{DateTime, Duration, Utc};
use revfeed_common::time::parse_utc_or_min;
use revfeed_common::Result;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{error, warn};

/// Flat-file review store; exclusively owns the persisted collection
#[derive(Debug, Clone)]
pub struct ReviewStore {
    data_file: PathBuf,
}

/// Filters and pagination for `ReviewStore::query`
#[derive(Debug, Clone, Default)]
pub struct ReviewQuery {
    /// Page size; `None` or `Some(0)` means unlimited
    pub limit: Option<usize>,
    /// Records to skip after filtering and sorting
    pub offset: usize,
    /// Exact-match rating filter
    pub rating: Option<u8>,
    /// Case-insensitive substring filter on review text
    pub search: Option<String>,
}

impl ReviewStore {
    /// Create a store backed by the given data file
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Path of the backing data file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Load the full collection in insertion order.
    ///
    /// A missing, empty, or malformed file reads as an empty collection;
    /// this never raises.
    pub fn load(&self) -> Vec<Review> {
        let raw = match std::fs::read_to_string(&self.data_file) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                error!("Failed to read {}: {}", self.data_file.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(reviews) => reviews,
            Err(e) => {
                warn!(
                    "Malformed data file {} ({}), treating as empty",
                    self.data_file.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Append one review: full read, push, full rewrite.
    pub fn append(&self, review: Review) -> Result<()> {
        let mut reviews = self.load();
        reviews.push(review);
        self.save(&reviews)
    }

    fn save(&self, reviews: &[Review]) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(reviews)?;
        std::fs::write(&self.data_file, json)?;
        Ok(())
    }

    /// Filtered, sorted, paginated view plus the filtered total count.
    ///
    /// Filters apply before sorting; the total reflects the filtered set
    /// before pagination. An offset past the end yields an empty page.
    pub fn query(&self, q: &ReviewQuery) -> (Vec<Review>, usize) {
        let mut reviews = self.load();

        if let Some(rating) = q.rating {
            reviews.retain(|r| r.rating == rating);
        }

        if let Some(search) = q.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            reviews.retain(|r| r.review.to_lowercase().contains(&needle));
        }

        // Newest first
        reviews.sort_by_key(|r| std::cmp::Reverse(parse_utc_or_min(&r.timestamp)));

        let total = reviews.len();

        let page_size = match q.limit {
            Some(n) if n > 0 => n,
            _ => usize::MAX,
        };

        let page: Vec<Review> = reviews.into_iter().skip(q.offset).take(page_size).collect();

        (page, total)
    }

    /// Aggregate statistics over the full unfiltered collection.
    ///
    /// The two trend windows are [now-7d, now] and [now-14d, now-7d).
    /// Records with unparsable timestamps carry the sentinel instant and
    /// fall outside both windows while still counting toward the totals.
    pub fn analytics(&self, now: DateTime<Utc>) -> AnalyticsResponse {
        let reviews = self.load();

        let mut distribution: BTreeMap<u8, usize> = (1..=5).map(|r| (r, 0)).collect();

        if reviews.is_empty() {
            return AnalyticsResponse {
                avg_rating: 0.0,
                total: 0,
                distribution,
                recent_trends: RecentTrends {
                    last_7_days: RatingTrend {
                        count: 0,
                        avg_rating: 0.0,
                    },
                    previous_7_days: RatingTrend {
                        count: 0,
                        avg_rating: 0.0,
                    },
                },
            };
        }

        let total = reviews.len();
        let avg = reviews.iter().map(|r| f64::from(r.rating)).sum::<f64>() / total as f64;

        for review in &reviews {
            *distribution.entry(review.rating).or_insert(0) += 1;
        }

        let week_ago = now - Duration::days(7);
        let two_weeks_ago = now - Duration::days(14);

        let last_7_days = window_trend(&reviews, |ts| ts >= week_ago);
        let previous_7_days = window_trend(&reviews, |ts| ts >= two_weeks_ago && ts < week_ago);

        AnalyticsResponse {
            avg_rating: round2(avg),
            total,
            distribution,
            recent_trends: RecentTrends {
                last_7_days,
                previous_7_days,
            },
        }
    }
}

/// Count and mean rating over the records whose timestamp satisfies the
/// window predicate; an empty window reports a 0 mean.
fn window_trend(reviews: &[Review], in_window: impl Fn(DateTime<Utc>) -> bool) -> RatingTrend {
    let ratings: Vec<f64> = reviews
        .iter()
        .filter(|r| in_window(parse_utc_or_min(&r.timestamp)))
        .map(|r| f64::from(r.rating))
        .collect();

    if ratings.is_empty() {
        RatingTrend {
            count: 0,
            avg_rating: 0.0,
        }
    } else {
        let avg = ratings.iter().sum::<f64>() / ratings.len() as f64;
        RatingTrend {
            count: ratings.len(),
            avg_rating: round2(avg),
        }
    }
}

/// Round to 2 decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
