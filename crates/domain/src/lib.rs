//! Numeric engine for Solana DLMM liquidity positions.
//!
//! This crate turns decoded bin and position data into the metrics a
//! liquidity provider looks at:
//! - Bin index to price conversion
//! - Price range and in-range detection
//! - Fee yield annualization
//! - Portfolio aggregation
//! - Health, impermanent loss and liquidity concentration scoring
//! - Position status classification
//!
//! Every function is pure. Anything time dependent takes `now` explicitly.

/// Prelude module for convenient imports.
pub mod prelude;

/// Assembly of engine entities from decoded on-chain records.
pub mod assembly;
/// Engine configuration.
pub mod config;
/// Positions, pools, bins and tokens.
pub mod entities;
/// Enumerations shared across the engine.
pub mod enums;
/// Error types.
pub mod error;
/// Bin price math.
pub mod math;
/// Position and portfolio metrics.
pub mod metrics;
/// Small value types.
pub mod value_objects;
