use crate::entities::token::TokenInfo;
use crate::value_objects::price::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summary of a DLMM pool (an "LB pair").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolInfo {
    pub address: String,
    pub token_x: TokenInfo,
    pub token_y: TokenInfo,
    /// Pool reserves valued in the quote token.
    pub total_liquidity: Decimal,
    pub volume_24h: Decimal,
    /// Price of the active bin.
    pub current_price: Price,
    /// Fee tier as a percentage.
    pub fee_tier: Decimal,
    /// Number of bins holding liquidity.
    pub active_bins: u32,
    /// Bin step in basis points.
    pub bin_step: u16,
    /// Index of the active bin.
    pub active_id: i32,
}
