use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Calculates impermanent loss for a constant product position.
/// formula: (2 * sqrt(price_ratio) / (1 + price_ratio) - 1) * 100
///
/// # Arguments
///
/// * `initial_price` - The price at which the position was opened (token Y per token X)
/// * `current_price` - The current price (token Y per token X)
///
/// # Returns
///
/// * `Decimal` - The loss as a percentage, never positive (e.g. -5.72 for a
///   doubling). Zero when `initial_price` is zero or the ratio is undefined.
pub fn calculate_impermanent_loss(initial_price: Decimal, current_price: Decimal) -> Decimal {
    if initial_price.is_zero() {
        return Decimal::ZERO;
    }

    let Some(ratio) = current_price
        .checked_div(initial_price)
        .and_then(|r| r.to_f64())
    else {
        return Decimal::ZERO;
    };

    // sqrt goes through f64, IL is an estimate anyway.
    let il = (2.0 * ratio.sqrt() / (1.0 + ratio) - 1.0).min(0.0);

    Decimal::from_f64(il * 100.0).unwrap_or(Decimal::ZERO)
}
