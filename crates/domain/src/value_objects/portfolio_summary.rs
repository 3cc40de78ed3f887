use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals across a set of positions. Always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Sum of position values in USD.
    pub total_value: Decimal,
    /// Sum of fees earned in USD.
    pub total_fees_earned: Decimal,
    /// Number of positions currently in range.
    pub active_positions: usize,
    /// Unweighted mean of position APYs.
    pub average_apy: Decimal,
}
