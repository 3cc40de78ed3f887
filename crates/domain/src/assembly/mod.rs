//! Builds engine entities from decoded on-chain records.
//!
//! Values are expressed in the pool's quote token (token Y) at the price of
//! the pool's active bin. There is no oracle: the quote token is treated as
//! the USD unit.

mod records;

pub use records::{RawBinReserve, RawPoolRecord, RawPositionRecord};

use crate::entities::{BinData, PoolInfo, Position, UnclaimedFees};
use crate::error::{DomainError, Result};
use crate::math::bin_price::{bin_id_to_price, bin_step_to_fee_tier};
use crate::metrics::{calculate_apy, evaluate_range};
use crate::value_objects::{amount::Amount, price::Price};
use chrono::DateTime;
use rust_decimal::Decimal;

fn ui_amount(raw: u64, decimals: u8) -> Result<Decimal> {
    Amount::from_native(raw, decimals).to_decimal()
}

fn quote_value(price: Price, amount_x: Decimal, amount_y: Decimal, what: &str) -> Result<Decimal> {
    price
        .quote_value(amount_x, amount_y)
        .ok_or_else(|| DomainError::invalid_input(format!("{what} overflows")))
}

/// Builds pool info from a decoded pool record.
///
/// # Errors
/// Returns [`DomainError::InvalidInput`] if reserves cannot be scaled by the
/// token decimals or their value overflows.
pub fn assemble_pool(raw: &RawPoolRecord) -> Result<PoolInfo> {
    let current_price = bin_id_to_price(raw.active_id, raw.bin_step);
    let reserve_x = ui_amount(raw.reserve_x, raw.token_x.decimals)?;
    let reserve_y = ui_amount(raw.reserve_y, raw.token_y.decimals)?;
    let total_liquidity = quote_value(current_price, reserve_x, reserve_y, "pool liquidity")?;

    Ok(PoolInfo {
        address: raw.address.clone(),
        token_x: raw.token_x.clone(),
        token_y: raw.token_y.clone(),
        total_liquidity,
        volume_24h: raw.volume_24h,
        current_price,
        fee_tier: bin_step_to_fee_tier(raw.bin_step),
        active_bins: raw.active_bin_count,
        bin_step: raw.bin_step,
        active_id: raw.active_id,
    })
}

/// Builds bin data from per-bin reserves, sorted ascending by bin id.
///
/// # Errors
/// Returns [`DomainError::InvalidInput`] on duplicate bin ids or amounts that
/// cannot be represented.
pub fn assemble_bins(
    reserves: &[RawBinReserve],
    bin_step: u16,
    decimals_x: u8,
    decimals_y: u8,
) -> Result<Vec<BinData>> {
    let mut bins = reserves
        .iter()
        .map(|reserve| {
            BinData::new(
                reserve.bin_id,
                bin_step,
                ui_amount(reserve.amount_x, decimals_x)?,
                ui_amount(reserve.amount_y, decimals_y)?,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    bins.sort_by_key(|bin| bin.bin_id);
    if let Some(pair) = bins.windows(2).find(|pair| pair[0].bin_id == pair[1].bin_id) {
        return Err(DomainError::invalid_input(format!(
            "duplicate bin id {}",
            pair[0].bin_id
        )));
    }
    Ok(bins)
}

/// Builds a position from its decoded record and the assembled pool.
///
/// `now_timestamp` (Unix seconds) anchors the APY estimate.
///
/// # Errors
/// Returns [`DomainError::InvalidInput`] if the record belongs to another
/// pool, has an unrepresentable timestamp or amount, or repeats a bin.
pub fn assemble_position(
    raw: &RawPositionRecord,
    pool: &PoolInfo,
    now_timestamp: i64,
) -> Result<Position> {
    if raw.pool_address != pool.address {
        return Err(DomainError::invalid_input(format!(
            "position {} belongs to pool {}, not {}",
            raw.address, raw.pool_address, pool.address
        )));
    }

    let decimals_x = pool.token_x.decimals;
    let decimals_y = pool.token_y.decimals;
    let current_price = pool.current_price;

    let active_bins = assemble_bins(&raw.bins, pool.bin_step, decimals_x, decimals_y)?;
    let bin_prices: Vec<Price> = active_bins.iter().map(|bin| bin.price).collect();
    let evaluation = evaluate_range(&bin_prices, current_price);

    let liquidity_x = ui_amount(raw.total_x_amount, decimals_x)?;
    let liquidity_y = ui_amount(raw.total_y_amount, decimals_y)?;
    let total_value = quote_value(current_price, liquidity_x, liquidity_y, "position value")?;

    let fee_x = ui_amount(raw.fee_x, decimals_x)?;
    let fee_y = ui_amount(raw.fee_y, decimals_y)?;
    let fees_usd = quote_value(current_price, fee_x, fee_y, "position fees")?;

    let created_at = DateTime::from_timestamp(raw.created_at, 0).ok_or_else(|| {
        DomainError::invalid_input(format!("invalid creation time {}", raw.created_at))
    })?;

    Ok(Position {
        address: raw.address.clone(),
        pool_address: raw.pool_address.clone(),
        token_x: pool.token_x.clone(),
        token_y: pool.token_y.clone(),
        liquidity_x,
        liquidity_y,
        total_value,
        fees_earned: fees_usd,
        unclaimed_fees: UnclaimedFees {
            token_x: fee_x,
            token_y: fee_y,
            total_usd: fees_usd,
        },
        active_bins,
        min_price: evaluation.range.lower_price,
        max_price: evaluation.range.upper_price,
        current_price,
        is_in_range: evaluation.in_range,
        created_at,
        estimated_apy: calculate_apy(fees_usd, total_value, raw.created_at, now_timestamp),
    })
}
