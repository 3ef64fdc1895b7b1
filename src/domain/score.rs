use crate::domain::Platform;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The latest surviving observation for one (hotel, platform) pair, or an
/// aggregate row standing in for a whole group on one platform. Derived,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformScore {
    pub platform: Platform,
    pub rating: f64,
    pub review_count: u64,
}

/// The cross-platform view of one hotel, recomputed from the observation
/// log on every query.
///
/// `weighted_score` is `None` when no platform contributes weight. That is
/// the "no review data yet" steady state, not an error, and it must never
/// collapse into `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeScore {
    pub hotel_id: String,
    pub per_platform: Vec<PlatformScore>,
    pub weighted_score: Option<f64>,
    pub total_reviews: u64,
    pub last_updated: Option<DateTime<Utc>>,
}

impl CompositeScore {
    pub fn empty(hotel_id: impl Into<String>) -> Self {
        Self {
            hotel_id: hotel_id.into(),
            per_platform: Vec::new(),
            weighted_score: None,
            total_reviews: 0,
            last_updated: None,
        }
    }

    pub fn platform(&self, platform: Platform) -> Option<&PlatformScore> {
        self.per_platform.iter().find(|p| p.platform == platform)
    }
}

/// The combined view over a group of hotels: one headline score, one
/// aggregate row per platform, plus the member composites it was built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupAggregate {
    pub overall_score: Option<f64>,
    pub total_reviews: u64,
    pub per_platform: Vec<PlatformScore>,
    pub members: Vec<CompositeScore>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// One point of a historical series: all observations sharing one UTC
/// calendar date, collapsed into a single weighted score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub score: Option<f64>,
    pub review_count: u64,
}
