use crate::config::EngineConfig;
use crate::entities::position::Position;
use crate::enums::PositionStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod concentration;
pub mod fees;
pub mod health;
pub mod impermanent_loss;
pub mod portfolio;
pub mod price_impact;
pub mod range;
pub mod status;

pub use concentration::calculate_liquidity_concentration;
pub use fees::{calculate_apy, estimate_daily_fees};
pub use health::calculate_position_health;
pub use impermanent_loss::calculate_impermanent_loss;
pub use portfolio::calculate_portfolio_summary;
pub use price_impact::calculate_price_impact;
pub use range::{RangeEvaluation, evaluate_range};
pub use status::classify_position;

/// Derived indicators for a single position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionMetrics {
    pub status: PositionStatus,
    pub health_score: u8,
    /// Herfindahl index of the position's bins.
    pub liquidity_concentration: Decimal,
    pub daily_fees: Decimal,
}

impl PositionMetrics {
    /// Computes the indicators for `position` as of `now_timestamp`.
    #[must_use]
    pub fn compute(position: &Position, config: &EngineConfig, now_timestamp: i64) -> Self {
        Self {
            status: classify_position(
                position.is_in_range,
                position.estimated_apy,
                config.low_yield_threshold_pct,
            ),
            health_score: calculate_position_health(position, &config.health),
            liquidity_concentration: calculate_liquidity_concentration(&position.active_bins),
            daily_fees: estimate_daily_fees(
                position.fees_earned,
                position.created_at.timestamp(),
                now_timestamp,
            ),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::entities::{BinData, Position, TokenInfo, UnclaimedFees};
    use crate::value_objects::price::Price;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    pub(crate) fn position(address: &str, is_in_range: bool, estimated_apy: Decimal) -> Position {
        let price = Price::new(Decimal::from(100));
        Position {
            address: address.to_string(),
            pool_address: "pool".to_string(),
            token_x: TokenInfo::new("So11111111111111111111111111111111111111112", "SOL", 9),
            token_y: TokenInfo::new("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v", "USDC", 6),
            liquidity_x: Decimal::ONE,
            liquidity_y: Decimal::ONE_HUNDRED,
            total_value: Decimal::from(200),
            fees_earned: Decimal::ZERO,
            unclaimed_fees: UnclaimedFees::default(),
            active_bins: Vec::new(),
            min_price: price,
            max_price: price,
            current_price: price,
            is_in_range,
            created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            estimated_apy,
        }
    }

    pub(crate) fn with_bins(mut position: Position, count: i32) -> Position {
        position.active_bins = (0..count)
            .map(|bin_id| BinData::new(bin_id, 25, Decimal::ONE, Decimal::ONE).unwrap())
            .collect();
        position
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{position, with_bins};
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_compute_position_metrics() {
        let mut p = with_bins(position("p", true, dec!(3)), 2);
        p.fees_earned = dec!(20);
        let now = p.created_at.timestamp() + 10 * 86_400;

        let metrics = PositionMetrics::compute(&p, &EngineConfig::default(), now);
        assert_eq!(metrics.status, PositionStatus::Warning);
        assert_eq!(metrics.health_score, 80);
        assert_eq!(metrics.daily_fees, dec!(2));
        assert!(metrics.liquidity_concentration > dec!(49));
        assert!(metrics.liquidity_concentration < dec!(51));
    }
}
