//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use dlmm_lp_domain::prelude::*;
//! ```

// Assembly
pub use crate::assembly::{
    RawBinReserve, RawPoolRecord, RawPositionRecord, assemble_bins, assemble_pool,
    assemble_position,
};

// Configuration
pub use crate::config::{EngineConfig, HealthThresholds};

// Entities
pub use crate::entities::{BinData, PoolInfo, Position, TokenInfo, UnclaimedFees};

// Enums
pub use crate::enums::PositionStatus;

// Errors
pub use crate::error::{DomainError, Result};

// Math
pub use crate::math::bin_price::{bin_id_to_price, bin_step_to_fee_tier, price_to_bin_id};

// Metrics
pub use crate::metrics::{
    PositionMetrics, RangeEvaluation, calculate_apy, calculate_impermanent_loss,
    calculate_liquidity_concentration, calculate_portfolio_summary, calculate_position_health,
    calculate_price_impact, classify_position, estimate_daily_fees, evaluate_range,
};

// Value objects
pub use crate::value_objects::{
    amount::Amount, portfolio_summary::PortfolioSummary, price::Price, price_range::PriceRange,
};
