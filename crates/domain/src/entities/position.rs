use crate::entities::{bin::BinData, token::TokenInfo};
use crate::value_objects::price::Price;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fees accrued by a position but not yet claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnclaimedFees {
    /// Token X fees (UI units).
    pub token_x: Decimal,
    /// Token Y fees (UI units).
    pub token_y: Decimal,
    /// Both fees valued in the quote token.
    pub total_usd: Decimal,
}

/// A liquidity position in a DLMM pool.
///
/// Rebuilt wholesale on every refresh; `address` is its only identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub address: String,
    pub pool_address: String,
    pub token_x: TokenInfo,
    pub token_y: TokenInfo,
    pub liquidity_x: Decimal,
    pub liquidity_y: Decimal,
    /// Position value in USD.
    pub total_value: Decimal,
    /// Cumulative fees to date in USD.
    pub fees_earned: Decimal,
    pub unclaimed_fees: UnclaimedFees,
    /// Bins holding the position's liquidity, ascending by bin id.
    pub active_bins: Vec<BinData>,
    pub min_price: Price,
    pub max_price: Price,
    pub current_price: Price,
    pub is_in_range: bool,
    pub created_at: DateTime<Utc>,
    /// Annualized fee yield in percent.
    pub estimated_apy: Decimal,
}

