use crate::domain::NativeScale;

/// Converts a platform-native rating to the canonical 0-10 scale.
///
/// Full precision is kept here: a 5.0 on a five-star scale is exactly 10.0.
/// Rounding to one decimal happens at display time only, never on the stored
/// value used for arithmetic.
pub fn normalize(raw_rating: f64, scale: NativeScale) -> f64 {
    match scale {
        NativeScale::FiveStar => raw_rating * 2.0,
        // Some ten-point sources report percentages (0-100).
        NativeScale::TenPoint if raw_rating > 10.0 => raw_rating / 10.0,
        NativeScale::TenPoint => raw_rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_star_scale_doubles() {
        assert_eq!(normalize(4.3, NativeScale::FiveStar), 8.6);
        assert_eq!(normalize(1.0, NativeScale::FiveStar), 2.0);
    }

    #[test]
    fn perfect_five_star_is_exactly_ten() {
        assert_eq!(normalize(5.0, NativeScale::FiveStar), 10.0);
    }

    #[test]
    fn ten_point_scale_passes_through() {
        assert_eq!(normalize(8.7, NativeScale::TenPoint), 8.7);
        assert_eq!(normalize(10.0, NativeScale::TenPoint), 10.0);
    }

    #[test]
    fn percentage_representation_is_divided_down() {
        assert_eq!(normalize(87.0, NativeScale::TenPoint), 8.7);
        assert_eq!(normalize(100.0, NativeScale::TenPoint), 10.0);
    }

    #[test]
    fn monotonic_in_rating() {
        for scale in [NativeScale::FiveStar, NativeScale::TenPoint] {
            let mut prev = normalize(0.0, scale);
            for step in 1..=50 {
                let next = normalize(step as f64 * 0.1, scale);
                assert!(next >= prev, "normalize must be monotonic");
                prev = next;
            }
        }
    }
}
