//! Data source boundary for the DLMM engine.
//!
//! The engine never talks to the chain. A [`PositionDataSource`] hands it
//! records that were already decoded from on-chain accounts, and the
//! [`PortfolioLoader`] turns those into positions and pools.

/// Loading engine entities from a data source.
pub mod loader;
/// JSON snapshot data source.
pub mod snapshot;

pub use loader::PortfolioLoader;
pub use snapshot::{OwnedPositionRecord, Snapshot, SnapshotSource};

use anyhow::Result;
use async_trait::async_trait;
use dlmm_lp_domain::assembly::{RawPoolRecord, RawPositionRecord};

/// Supplier of decoded pool and position records.
///
/// Implementations own their connection details; callers construct one and
/// pass it explicitly to whatever needs chain data.
#[async_trait]
pub trait PositionDataSource: Send + Sync {
    /// Returns every position owned by `owner`.
    async fn fetch_positions(&self, owner: &str) -> Result<Vec<RawPositionRecord>>;

    /// Returns a single position, if it exists.
    async fn fetch_position(&self, address: &str) -> Result<Option<RawPositionRecord>>;

    /// Returns the pool at `address`.
    async fn fetch_pool(&self, address: &str) -> Result<RawPoolRecord>;
}
