use crate::error::{DomainError, Result};
use crate::value_objects::price::Price;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Basis points in one whole unit.
pub const BASIS_POINT_MAX: u16 = 10_000;

/// Smallest positive `Decimal`; the floor for underflowing bin prices.
const MIN_POSITIVE_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 28);

/// Returns the price of a bin.
/// P = (1 + bin_step / 10_000) ^ bin_id
///
/// Defined for every bin id: negative ids price below 1 and a bin step of
/// zero prices every bin at 1. Prices outside the `Decimal` range saturate
/// to `Decimal::MAX` or to the smallest positive `Decimal`.
pub fn bin_id_to_price(bin_id: i32, bin_step: u16) -> Price {
    if bin_id == 0 || bin_step == 0 {
        return Price::new(Decimal::ONE);
    }

    let base = 1.0 + f64::from(bin_step) / f64::from(BASIS_POINT_MAX);
    let price_f64 = base.powi(bin_id);

    let value = match Decimal::from_f64(price_f64) {
        Some(price) if price > Decimal::ZERO => price,
        _ if price_f64 > 1.0 => Decimal::MAX,
        _ => MIN_POSITIVE_PRICE,
    };
    Price::new(value)
}

/// Returns the bin whose price is nearest to `price`.
/// bin_id = log_(1 + bin_step / 10_000)(P)
pub fn price_to_bin_id(price: Price, bin_step: u16) -> Result<i32> {
    if bin_step == 0 {
        return Err(DomainError::invalid_input("bin step must be positive"));
    }
    if price.value <= Decimal::ZERO {
        return Err(DomainError::invalid_input("price must be positive"));
    }

    let price_f64 = price
        .value
        .to_f64()
        .ok_or_else(|| DomainError::invalid_input("price is not representable"))?;
    let base = 1.0 + f64::from(bin_step) / f64::from(BASIS_POINT_MAX);
    let bin_id = (price_f64.ln() / base.ln()).round();

    if bin_id < f64::from(i32::MIN) || bin_id > f64::from(i32::MAX) {
        return Err(DomainError::invalid_input(format!(
            "price {} is outside the bin range",
            price.value
        )));
    }
    Ok(bin_id as i32)
}

/// Returns the pool fee tier, as a percentage, for a bin step.
pub fn bin_step_to_fee_tier(bin_step: u16) -> Decimal {
    Decimal::from(bin_step) / Decimal::ONE_HUNDRED
}
