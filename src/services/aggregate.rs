use crate::domain::{GroupAggregate, Observation, Platform, PlatformScore};
use crate::services::composite::build_hotel_score;
use crate::services::scoring::weighted_score;
use rayon::prelude::*;

/// Builds the group-level view over a set of hotels.
///
/// Two aggregation axes: one `PlatformScore` per platform weighted across
/// every member's surviving platform score, and one overall headline score
/// weighted across member composites (weight = each hotel's total reviews).
/// Hotels with no surviving data are left out of the denominator entirely.
pub fn build_group_aggregate(hotel_ids: &[&str], observations: &[Observation]) -> GroupAggregate {
    // Member builds share nothing, so they parallelize cleanly.
    let members: Vec<_> = hotel_ids
        .par_iter()
        .map(|id| build_hotel_score(id, observations))
        .collect();

    let mut per_platform = Vec::new();
    for platform in Platform::ALL {
        let pairs: Vec<(f64, u64)> = members
            .iter()
            .filter_map(|m| m.platform(platform))
            .map(|p| (p.rating, p.review_count))
            .collect();

        if let Some(rating) = weighted_score(&pairs) {
            per_platform.push(PlatformScore {
                platform,
                rating,
                review_count: pairs.iter().map(|(_, w)| w).sum(),
            });
        }
    }

    let overall_pairs: Vec<(f64, u64)> = members
        .iter()
        .filter_map(|m| m.weighted_score.map(|score| (score, m.total_reviews)))
        .collect();

    GroupAggregate {
        overall_score: weighted_score(&overall_pairs),
        total_reviews: overall_pairs.iter().map(|(_, w)| w).sum(),
        per_platform,
        last_updated: members.iter().filter_map(|m| m.last_updated).max(),
        members,
    }
}
