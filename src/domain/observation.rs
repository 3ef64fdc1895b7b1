use crate::domain::Platform;
use crate::error::{Result, ScoreError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped rating record for one (hotel, platform) pair.
///
/// Observations are append-only facts: a new fetch always produces new
/// records, existing ones are never updated or deleted. Every derived view
/// (composites, aggregates, trends) is recomputed from the full log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub hotel_id: String,
    pub platform: Platform,
    pub raw_rating: f64,
    pub normalized_rating: f64,
    pub review_count: u64,
    pub observed_at: DateTime<Utc>,
}

/// An observation as handed over by the fetch boundary, before the store
/// assigns its timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationDraft {
    pub hotel_id: String,
    pub platform: Platform,
    pub raw_rating: f64,
    pub normalized_rating: f64,
    pub review_count: u64,
}

impl ObservationDraft {
    /// Boundary validation. "No data" is expressed by not producing a draft
    /// at all, so a draft that exists must be well-formed.
    pub fn validate(&self) -> Result<()> {
        if !self.raw_rating.is_finite() || self.raw_rating < 0.0 {
            return Err(ScoreError::InvalidObservation(format!(
                "raw rating {} for {} on {}",
                self.raw_rating, self.hotel_id, self.platform
            )));
        }
        if !self.normalized_rating.is_finite()
            || !(0.0..=10.0).contains(&self.normalized_rating)
        {
            return Err(ScoreError::InvalidObservation(format!(
                "normalized rating {} for {} on {}",
                self.normalized_rating, self.hotel_id, self.platform
            )));
        }
        Ok(())
    }

    pub fn into_observation(self, observed_at: DateTime<Utc>) -> Observation {
        Observation {
            hotel_id: self.hotel_id,
            platform: self.platform,
            raw_rating: self.raw_rating,
            normalized_rating: self.normalized_rating,
            review_count: self.review_count,
            observed_at,
        }
    }
}
