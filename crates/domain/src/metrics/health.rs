use crate::config::HealthThresholds;
use crate::entities::position::Position;

const BASE_SCORE: i32 = 50;
const IN_RANGE_BONUS: i32 = 30;
const HIGH_APY_BONUS: i32 = 10;
const MODERATE_APY_BONUS: i32 = 5;
const DISTRIBUTION_BONUS: i32 = 10;

/// Heuristic health score in `[0, 100]`.
///
/// Starts at 50, adds 30 when in range, 10 (or 5) for a high (or moderate)
/// APY and 10 when liquidity spreads over more than the configured number of
/// bins. A coarse indicator, not a probability.
pub fn calculate_position_health(position: &Position, thresholds: &HealthThresholds) -> u8 {
    let mut score = BASE_SCORE;

    if position.is_in_range {
        score += IN_RANGE_BONUS;
    }

    if position.estimated_apy > thresholds.high_apy_pct {
        score += HIGH_APY_BONUS;
    } else if position.estimated_apy > thresholds.moderate_apy_pct {
        score += MODERATE_APY_BONUS;
    }

    if position.active_bins.len() > thresholds.min_bins_for_distribution {
        score += DISTRIBUTION_BONUS;
    }

    score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::test_support::{position, with_bins};
    use rust_decimal_macros::dec;

    #[test]
    fn test_base_score() {
        let p = position("p", false, dec!(0));
        assert_eq!(calculate_position_health(&p, &HealthThresholds::default()), 50);
    }

    #[test]
    fn test_full_score() {
        let p = with_bins(position("p", true, dec!(25)), 6);
        assert_eq!(calculate_position_health(&p, &HealthThresholds::default()), 100);
    }

    #[test]
    fn test_apy_tiers_are_exclusive() {
        let thresholds = HealthThresholds::default();
        assert_eq!(calculate_position_health(&position("p", true, dec!(20)), &thresholds), 85);
        assert_eq!(calculate_position_health(&position("p", true, dec!(20.01)), &thresholds), 90);
        assert_eq!(calculate_position_health(&position("p", true, dec!(10)), &thresholds), 80);
    }

    #[test]
    fn test_distribution_bonus_needs_more_than_five_bins() {
        let thresholds = HealthThresholds::default();
        let five = with_bins(position("p", false, dec!(0)), 5);
        let six = with_bins(position("p", false, dec!(0)), 6);
        assert_eq!(calculate_position_health(&five, &thresholds), 50);
        assert_eq!(calculate_position_health(&six, &thresholds), 60);
    }
}
