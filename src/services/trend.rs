use crate::domain::{Observation, TrendPoint};
use crate::error::{Result, ScoreError};
use crate::services::scoring::weighted_score;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rustc_hash::FxHashMap;

/// The supported history windows. `AllTime` and the day windows run through
/// the identical bucketing path over different input slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    Last7Days,
    Last30Days,
    Last90Days,
    AllTime,
}

impl DateRange {
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "7d" => Ok(DateRange::Last7Days),
            "30d" => Ok(DateRange::Last30Days),
            "90d" => Ok(DateRange::Last90Days),
            "all" => Ok(DateRange::AllTime),
            other => Err(ScoreError::Other(format!(
                "unsupported range '{other}', expected 7d, 30d, 90d or all"
            ))),
        }
    }

    fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let days = match self {
            DateRange::Last7Days => 7,
            DateRange::Last30Days => 30,
            DateRange::Last90Days => 90,
            DateRange::AllTime => return None,
        };
        Some(now - Duration::days(days))
    }

    pub fn contains(&self, at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.cutoff(now) {
            Some(cutoff) => at >= cutoff,
            None => true,
        }
    }
}

/// Turns an unordered observation set into a chronologically ordered,
/// date-bucketed series.
///
/// Scope is decided by the caller: pass one hotel's observations for a
/// single-hotel series, or the union of a group's members for the group
/// series. Buckets are UTC calendar dates — the fixed reference timezone
/// for the whole engine, so fetches straddling a local midnight land
/// deterministically.
///
/// The range filter runs BEFORE bucketing; recomputed fresh from the log on
/// every call, never maintained incrementally.
pub fn build_trend(
    observations: &[Observation],
    range: DateRange,
    now: DateTime<Utc>,
) -> Vec<TrendPoint> {
    let mut buckets: FxHashMap<NaiveDate, Vec<(f64, u64)>> = FxHashMap::default();

    for obs in observations
        .iter()
        .filter(|o| range.contains(o.observed_at, now))
    {
        buckets
            .entry(obs.observed_at.date_naive())
            .or_default()
            .push((obs.normalized_rating, obs.review_count));
    }

    let mut points: Vec<TrendPoint> = buckets
        .into_iter()
        .map(|(date, pairs)| TrendPoint {
            date,
            score: weighted_score(&pairs),
            review_count: pairs.iter().map(|(_, w)| w).sum(),
        })
        .collect();

    points.sort_by_key(|p| p.date);
    points
}
