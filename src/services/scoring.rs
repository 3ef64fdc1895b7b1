/// Review-count-weighted average of ratings.
///
/// This is the single source of truth for "weighted average" in the engine.
/// It is reused at three granularities: per hotel across platforms, per
/// group across hotel composites (weight = hotel total reviews), and per
/// date bucket for trend points.
///
/// Returns `None` when there is nothing to average (empty input or zero
/// total weight) — never `0.0`, which would be indistinguishable from a
/// genuinely low score.
pub fn weighted_score(pairs: &[(f64, u64)]) -> Option<f64> {
    let total_weight: u64 = pairs.iter().map(|(_, weight)| weight).sum();
    if total_weight == 0 {
        return None;
    }

    let weighted_sum: f64 = pairs
        .iter()
        .map(|(rating, weight)| rating * *weight as f64)
        .sum();

    Some(weighted_sum / total_weight as f64)
}

/// Display rounding, one decimal place. Applied at presentation time only.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_score() {
        assert_eq!(weighted_score(&[]), None);
    }

    #[test]
    fn zero_total_weight_has_no_score() {
        assert_eq!(weighted_score(&[(9.4, 0)]), None);
        assert_eq!(weighted_score(&[(9.4, 0), (2.0, 0)]), None);
    }

    #[test]
    fn single_pair_returns_its_rating() {
        assert_eq!(weighted_score(&[(8.6, 412)]), Some(8.6));
    }

    #[test]
    fn more_reviews_mean_more_influence() {
        let score = weighted_score(&[(9.0, 900), (8.0, 200), (8.5, 150)]).unwrap();
        assert_eq!(round1(score), 8.8);
    }

    #[test]
    fn group_level_worked_example() {
        // Two hotels weighted by their total review counts.
        let score = weighted_score(&[(8.5, 1000), (7.5, 500)]).unwrap();
        assert!((score - 8.1666).abs() < 1e-3);
        assert_eq!(round1(score), 8.2);
    }

    #[test]
    fn zero_weight_pairs_are_inert_next_to_real_ones() {
        assert_eq!(weighted_score(&[(2.0, 0), (8.0, 100)]), Some(8.0));
    }
}
