//! A data source backed by a JSON snapshot of decoded accounts.

use crate::PositionDataSource;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use dlmm_lp_domain::assembly::{RawPoolRecord, RawPositionRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// A position record tagged with its owner's wallet address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedPositionRecord {
    pub owner: String,
    #[serde(flatten)]
    pub record: RawPositionRecord,
}

/// Decoded pools and positions captured at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub pools: Vec<RawPoolRecord>,
    #[serde(default)]
    pub positions: Vec<OwnedPositionRecord>,
}

/// Serves records from an in-memory [`Snapshot`].
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    snapshot: Snapshot,
}

impl SnapshotSource {
    /// Creates a source from an already parsed snapshot.
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Parses a snapshot from JSON.
    ///
    /// # Errors
    /// Returns an error if the document is malformed or a required field is
    /// missing.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json).context("Invalid snapshot document")?;
        debug!(
            pools = snapshot.pools.len(),
            positions = snapshot.positions.len(),
            "Parsed snapshot"
        );
        Ok(Self::new(snapshot))
    }

    /// Reads and parses a snapshot file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        let source = Self::from_json(&json)
            .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;
        info!(path = %path.display(), "Loaded snapshot");
        Ok(source)
    }

    /// Returns the underlying snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

#[async_trait]
impl PositionDataSource for SnapshotSource {
    async fn fetch_positions(&self, owner: &str) -> Result<Vec<RawPositionRecord>> {
        Ok(self
            .snapshot
            .positions
            .iter()
            .filter(|p| p.owner == owner)
            .map(|p| p.record.clone())
            .collect())
    }

    async fn fetch_position(&self, address: &str) -> Result<Option<RawPositionRecord>> {
        Ok(self
            .snapshot
            .positions
            .iter()
            .find(|p| p.record.address == address)
            .map(|p| p.record.clone()))
    }

    async fn fetch_pool(&self, address: &str) -> Result<RawPoolRecord> {
        self.snapshot
            .pools
            .iter()
            .find(|p| p.address == address)
            .cloned()
            .ok_or_else(|| anyhow!("Pool not found: {address}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "pools": [{
            "address": "pool-1",
            "token_x": { "symbol": "SOL", "mint": "So11111111111111111111111111111111111111112", "decimals": 9 },
            "token_y": { "symbol": "USDC", "mint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v", "decimals": 6 },
            "bin_step": 25,
            "active_id": 0,
            "reserve_x": 10000000000,
            "reserve_y": 2500000
        }],
        "positions": [{
            "owner": "wallet-a",
            "address": "position-1",
            "pool_address": "pool-1",
            "total_x_amount": 2000000000,
            "total_y_amount": 3000000,
            "fee_x": 100000000,
            "fee_y": 400000,
            "bins": [{ "bin_id": 0, "amount_x": 2000000000, "amount_y": 3000000 }],
            "created_at": 1757408000
        }]
    }"#;

    #[tokio::test]
    async fn test_snapshot_queries() {
        let source = SnapshotSource::from_json(SNAPSHOT).unwrap();

        let owned = source.fetch_positions("wallet-a").await.unwrap();
        assert_eq!(owned.len(), 1);
        assert_eq!(owned[0].bins.len(), 1);
        assert!(source.fetch_positions("wallet-b").await.unwrap().is_empty());

        assert!(source.fetch_position("position-1").await.unwrap().is_some());
        assert!(source.fetch_position("missing").await.unwrap().is_none());

        let pool = source.fetch_pool("pool-1").await.unwrap();
        assert_eq!(pool.bin_step, 25);
        assert_eq!(pool.active_bin_count, 0);
        assert!(source.fetch_pool("pool-2").await.is_err());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let source = SnapshotSource::load(file.path()).await.unwrap();
        assert_eq!(source.snapshot().pools.len(), 1);
        assert_eq!(source.snapshot().positions.len(), 1);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SnapshotSource::load(dir.path().join("absent.json")).await.is_err());
    }

    #[test]
    fn test_missing_numeric_field_is_rejected() {
        let json = r#"{
            "positions": [{
                "owner": "wallet-a",
                "address": "position-1",
                "pool_address": "pool-1",
                "total_x_amount": 1,
                "fee_x": 0,
                "fee_y": 0,
                "created_at": 0
            }]
        }"#;
        assert!(SnapshotSource::from_json(json).is_err());
    }
}
