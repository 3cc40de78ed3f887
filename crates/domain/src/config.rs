//! Engine configuration.
//!
//! Tunable thresholds are carried in an explicit value that callers thread
//! into the functions that need them. `Default` reproduces the stock policy.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Thresholds used by the position health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthThresholds {
    /// APY (percent) above which a position receives the full yield bonus.
    pub high_apy_pct: Decimal,
    /// APY (percent) above which a position receives the partial yield bonus.
    pub moderate_apy_pct: Decimal,
    /// Bin count a position must exceed to receive the distribution bonus.
    pub min_bins_for_distribution: usize,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            high_apy_pct: Decimal::from(20),
            moderate_apy_pct: Decimal::from(10),
            min_bins_for_distribution: 5,
        }
    }
}

/// Configuration for the analytics engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// APY (percent) below which an in-range position is flagged as a warning.
    pub low_yield_threshold_pct: Decimal,
    /// Health score thresholds.
    pub health: HealthThresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            low_yield_threshold_pct: Decimal::from(5),
            health: HealthThresholds::default(),
        }
    }
}

impl EngineConfig {
    /// Sets the low-yield threshold.
    #[must_use]
    pub fn with_low_yield_threshold(mut self, threshold_pct: Decimal) -> Self {
        self.low_yield_threshold_pct = threshold_pct;
        self
    }

    /// Sets the health thresholds.
    #[must_use]
    pub fn with_health_thresholds(mut self, health: HealthThresholds) -> Self {
        self.health = health;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_matches_stock_policy() {
        let config = EngineConfig::default();
        assert_eq!(config.low_yield_threshold_pct, dec!(5));
        assert_eq!(config.health.high_apy_pct, dec!(20));
        assert_eq!(config.health.moderate_apy_pct, dec!(10));
        assert_eq!(config.health.min_bins_for_distribution, 5);
    }

    #[test]
    fn test_builder_overrides() {
        let config = EngineConfig::default().with_low_yield_threshold(dec!(7.5));
        assert_eq!(config.low_yield_threshold_pct, dec!(7.5));
        assert_eq!(config.health, HealthThresholds::default());
    }
}
