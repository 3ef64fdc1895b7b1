use crate::domain::Observation;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Selects the most recent observation per key in a single O(n) pass.
///
/// Tie rule: on equal `observed_at` the observation seen first (insertion
/// order) wins — a strictly-greater comparison, not sort stability, decides.
pub fn latest_per_key<'a, I, K, F>(observations: I, mut key_fn: F) -> FxHashMap<K, &'a Observation>
where
    I: IntoIterator<Item = &'a Observation>,
    K: Eq + Hash,
    F: FnMut(&Observation) -> K,
{
    let mut latest: FxHashMap<K, &Observation> = FxHashMap::default();

    for obs in observations {
        let key = key_fn(obs);
        match latest.get(&key) {
            Some(current) if obs.observed_at <= current.observed_at => {}
            _ => {
                latest.insert(key, obs);
            }
        }
    }

    latest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Platform;
    use chrono::{TimeZone, Utc};

    fn obs(hotel: &str, platform: Platform, hour: u32) -> Observation {
        Observation {
            hotel_id: hotel.to_string(),
            platform,
            raw_rating: 4.0,
            normalized_rating: 8.0,
            review_count: 10,
            observed_at: Utc.with_ymd_and_hms(2026, 8, 1, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn keeps_the_most_recent_regardless_of_input_order() {
        let observations = vec![
            obs("a", Platform::Google, 1),
            obs("a", Platform::Google, 3),
            obs("a", Platform::Google, 2),
        ];

        let latest = latest_per_key(&observations, |o| (o.hotel_id.clone(), o.platform));
        let winner = latest[&("a".to_string(), Platform::Google)];
        assert_eq!(winner.observed_at, observations[1].observed_at);
    }

    #[test]
    fn keys_are_independent() {
        let observations = vec![
            obs("a", Platform::Google, 5),
            obs("a", Platform::Booking, 1),
            obs("b", Platform::Google, 9),
        ];

        let latest = latest_per_key(&observations, |o| (o.hotel_id.clone(), o.platform));
        assert_eq!(latest.len(), 3);
    }

    #[test]
    fn equal_timestamps_keep_the_first_seen() {
        let mut first = obs("a", Platform::Expedia, 4);
        first.review_count = 111;
        let mut second = obs("a", Platform::Expedia, 4);
        second.review_count = 222;

        let observations = vec![first, second];
        let latest = latest_per_key(&observations, |o| o.platform);
        assert_eq!(latest[&Platform::Expedia].review_count, 111);
    }
}
