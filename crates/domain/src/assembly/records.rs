//! Decoded on-chain records consumed by the engine.
//!
//! Amounts are native integer units exactly as stored on chain; the fetch
//! layer decodes accounts into these shapes and nothing more.

use crate::entities::token::TokenInfo;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reserves a position holds in one bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBinReserve {
    pub bin_id: i32,
    pub amount_x: u64,
    pub amount_y: u64,
}

/// A decoded pool (LB pair) account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPoolRecord {
    pub address: String,
    pub token_x: TokenInfo,
    pub token_y: TokenInfo,
    /// Bin step in basis points.
    pub bin_step: u16,
    /// Index of the active bin.
    pub active_id: i32,
    pub reserve_x: u64,
    pub reserve_y: u64,
    /// Trailing 24h volume in USD, when the fetch layer knows it.
    #[serde(default)]
    pub volume_24h: Decimal,
    /// Number of bins holding liquidity.
    #[serde(default)]
    pub active_bin_count: u32,
}

/// A decoded position account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPositionRecord {
    pub address: String,
    pub pool_address: String,
    pub total_x_amount: u64,
    pub total_y_amount: u64,
    /// Cumulative token X fee counter.
    pub fee_x: u64,
    /// Cumulative token Y fee counter.
    pub fee_y: u64,
    #[serde(default)]
    pub bins: Vec<RawBinReserve>,
    /// Unix timestamp (seconds) the position was opened.
    pub created_at: i64,
}
