use crate::domain::{CompositeScore, Observation, Platform, PlatformScore};
use crate::services::latest::latest_per_key;
use crate::services::scoring::weighted_score;

/// Builds the cross-platform composite view for one hotel.
///
/// Pure over the observation log: the same input always yields the same
/// composite, so builds for different hotels can run in any order or in
/// parallel.
pub fn build_hotel_score(hotel_id: &str, observations: &[Observation]) -> CompositeScore {
    let latest = latest_per_key(
        observations.iter().filter(|o| o.hotel_id == hotel_id),
        |o| o.platform,
    );

    let mut per_platform = Vec::new();
    let mut last_updated = None;

    for platform in Platform::ALL {
        let Some(obs) = latest.get(&platform) else {
            continue;
        };
        // A listing with zero reviews carries no statistical weight and must
        // read as "no data", not as a found data point.
        if obs.review_count == 0 {
            continue;
        }

        per_platform.push(PlatformScore {
            platform,
            rating: obs.normalized_rating,
            review_count: obs.review_count,
        });
        last_updated = Some(match last_updated {
            Some(at) if at > obs.observed_at => at,
            _ => obs.observed_at,
        });
    }

    let pairs: Vec<(f64, u64)> = per_platform
        .iter()
        .map(|p| (p.rating, p.review_count))
        .collect();

    CompositeScore {
        hotel_id: hotel_id.to_string(),
        weighted_score: weighted_score(&pairs),
        total_reviews: per_platform.iter().map(|p| p.review_count).sum(),
        per_platform,
        last_updated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn obs(
        hotel: &str,
        platform: Platform,
        rating: f64,
        reviews: u64,
        day: u32,
    ) -> Observation {
        Observation {
            hotel_id: hotel.to_string(),
            platform,
            raw_rating: rating / 2.0,
            normalized_rating: rating,
            review_count: reviews,
            observed_at: Utc.with_ymd_and_hms(2026, 8, day, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn combines_latest_per_platform() {
        let observations = vec![
            obs("rosa", Platform::Google, 9.0, 900, 2),
            obs("rosa", Platform::Booking, 8.0, 200, 2),
            obs("rosa", Platform::Expedia, 8.5, 150, 2),
            // stale google fetch, must be ignored
            obs("rosa", Platform::Google, 2.0, 10, 1),
        ];

        let composite = build_hotel_score("rosa", &observations);
        assert_eq!(composite.per_platform.len(), 3);
        assert_eq!(composite.total_reviews, 1250);
        assert_eq!(
            crate::services::scoring::round1(composite.weighted_score.unwrap()),
            8.8
        );
    }

    #[test]
    fn other_hotels_observations_are_out_of_scope() {
        let observations = vec![
            obs("rosa", Platform::Google, 9.0, 100, 1),
            obs("krone", Platform::Google, 2.0, 5000, 1),
        ];

        let composite = build_hotel_score("rosa", &observations);
        assert_eq!(composite.weighted_score, Some(9.0));
        assert_eq!(composite.total_reviews, 100);
    }

    #[test]
    fn zero_review_platforms_never_surface() {
        let observations = vec![
            obs("rosa", Platform::Google, 8.0, 120, 1),
            obs("rosa", Platform::Tripadvisor, 9.9, 0, 1),
        ];

        let composite = build_hotel_score("rosa", &observations);
        assert!(composite.platform(Platform::Tripadvisor).is_none());
        assert_eq!(composite.weighted_score, Some(8.0));
    }

    #[test]
    fn last_updated_tracks_surviving_observations_only() {
        let observations = vec![
            obs("rosa", Platform::Google, 8.0, 120, 3),
            // newer but zero reviews, discarded before the timestamp is taken
            obs("rosa", Platform::Booking, 7.0, 0, 9),
        ];

        let composite = build_hotel_score("rosa", &observations);
        assert_eq!(
            composite.last_updated,
            Some(Utc.with_ymd_and_hms(2026, 8, 3, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn no_data_is_a_valid_steady_state() {
        let composite = build_hotel_score("rosa", &[]);
        assert_eq!(composite.weighted_score, None);
        assert_eq!(composite.total_reviews, 0);
        assert_eq!(composite.last_updated, None);
        assert!(composite.per_platform.is_empty());
    }

    #[test]
    fn idempotent_over_the_same_log() {
        let observations = vec![
            obs("rosa", Platform::Google, 9.0, 900, 2),
            obs("rosa", Platform::Booking, 8.0, 200, 1),
        ];

        let first = build_hotel_score("rosa", &observations);
        let second = build_hotel_score("rosa", &observations);
        assert_eq!(first, second);
    }
}
