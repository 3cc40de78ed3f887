//! Turns decoded records from a data source into engine entities.

use crate::PositionDataSource;
use anyhow::{Context, Result};
use dlmm_lp_domain::assembly::{RawPositionRecord, assemble_pool, assemble_position};
use dlmm_lp_domain::entities::{PoolInfo, Position};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Loads positions and pools through an explicitly supplied data source.
pub struct PortfolioLoader {
    /// Data source.
    source: Arc<dyn PositionDataSource>,
}

impl PortfolioLoader {
    /// Creates a new loader over `source`.
    #[must_use]
    pub fn new(source: Arc<dyn PositionDataSource>) -> Self {
        Self { source }
    }

    /// Loads and assembles a pool.
    ///
    /// # Errors
    /// Returns an error if the pool cannot be fetched or is malformed.
    pub async fn load_pool(&self, address: &str) -> Result<PoolInfo> {
        let raw = self.source.fetch_pool(address).await?;
        let pool = assemble_pool(&raw).with_context(|| format!("Invalid pool {address}"))?;
        debug!(
            pool = %address,
            active_id = pool.active_id,
            bin_step = pool.bin_step,
            "Assembled pool"
        );
        Ok(pool)
    }

    /// Loads every position owned by `owner`, valued as of `now_timestamp`.
    ///
    /// A position that fails to load is logged and skipped; the rest of the
    /// portfolio is still returned.
    ///
    /// # Errors
    /// Returns an error only if the owner's positions cannot be listed.
    pub async fn load_positions(&self, owner: &str, now_timestamp: i64) -> Result<Vec<Position>> {
        let records = self
            .source
            .fetch_positions(owner)
            .await
            .with_context(|| format!("Failed to fetch positions for {owner}"))?;

        let mut pools: HashMap<String, PoolInfo> = HashMap::new();
        let mut positions = Vec::with_capacity(records.len());

        for record in &records {
            match self.assemble_with_cache(record, &mut pools, now_timestamp).await {
                Ok(position) => positions.push(position),
                Err(e) => warn!(
                    position = %record.address,
                    error = %e,
                    "Skipping position"
                ),
            }
        }

        info!(
            owner = %owner,
            loaded = positions.len(),
            skipped = records.len() - positions.len(),
            "Loaded positions"
        );
        Ok(positions)
    }

    /// Loads a single position, valued as of `now_timestamp`.
    ///
    /// # Errors
    /// Returns an error if the position or its pool cannot be fetched or is
    /// malformed.
    pub async fn load_position(
        &self,
        address: &str,
        now_timestamp: i64,
    ) -> Result<Option<Position>> {
        let Some(record) = self.source.fetch_position(address).await? else {
            return Ok(None);
        };
        let pool = self.load_pool(&record.pool_address).await?;
        let position = assemble_position(&record, &pool, now_timestamp)
            .with_context(|| format!("Invalid position {address}"))?;
        Ok(Some(position))
    }

    async fn assemble_with_cache(
        &self,
        record: &RawPositionRecord,
        pools: &mut HashMap<String, PoolInfo>,
        now_timestamp: i64,
    ) -> Result<Position> {
        if !pools.contains_key(&record.pool_address) {
            let pool = self.load_pool(&record.pool_address).await?;
            pools.insert(record.pool_address.clone(), pool);
        }
        let pool = &pools[&record.pool_address];
        Ok(assemble_position(record, pool, now_timestamp)?)
    }
}
