// Symmetric drift: shift share from negative to positive (or back) to
// simulate opinion moving between refreshes.

use super::normalize::{rebalance, SentimentDistribution};

/// Apply a single drift step and return a fresh distribution.
///
/// `positive += delta` and `negative -= delta`, each clamped to 0-100;
/// neutral is recomputed as the remainder and the result goes through the
/// same rebalance safeguard as `normalize`. The incoming `neutral` is
/// ignored.
pub fn apply_drift(current: &SentimentDistribution, delta: i32) -> SentimentDistribution {
    let positive = (i32::from(current.positive).saturating_add(delta)).clamp(0, 100);
    let negative = (i32::from(current.negative).saturating_sub(delta)).clamp(0, 100);
    let neutral = 100 - positive - negative;

    let (p, n, u) = rebalance(positive, negative, neutral);
    SentimentDistribution::from_parts(p as u8, n as u8, u as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::normalize::Sentiment;

    fn dist(positive: u8, negative: u8, neutral: u8) -> SentimentDistribution {
        SentimentDistribution::from_parts(positive, negative, neutral)
    }

    #[test]
    fn test_small_drift_moves_share() {
        let next = apply_drift(&dist(40, 30, 30), 5);
        assert_eq!((next.positive, next.negative, next.neutral), (45, 25, 30));
        assert_eq!(next.overall, Sentiment::Positive);
    }

    #[test]
    fn test_negative_floor_clamps() {
        let next = apply_drift(&dist(60, 10, 30), 35);
        assert_eq!((next.positive, next.negative, next.neutral), (95, 0, 5));
    }

    #[test]
    fn test_overfull_input_is_scaled() {
        let next = apply_drift(&dist(85, 20, 0), 0);
        assert_eq!((next.positive, next.negative, next.neutral), (81, 19, 0));
        assert_eq!(next.sum(), 100);
    }

    #[test]
    fn test_extreme_delta_saturates() {
        let next = apply_drift(&dist(50, 50, 0), i32::MAX);
        assert_eq!((next.positive, next.negative, next.neutral), (100, 0, 0));
        let next = apply_drift(&dist(50, 50, 0), i32::MIN);
        assert_eq!((next.positive, next.negative, next.neutral), (0, 100, 0));
    }
}
