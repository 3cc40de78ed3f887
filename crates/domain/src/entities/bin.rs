use crate::error::{DomainError, Result};
use crate::math::bin_price::bin_id_to_price;
use crate::value_objects::price::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Liquidity held in a single bin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinData {
    /// Bin index.
    pub bin_id: i32,
    /// Price of the bin, derived from its index and the pool bin step.
    pub price: Price,
    /// Token X held in the bin (UI units).
    pub liquidity_x: Decimal,
    /// Token Y held in the bin (UI units).
    pub liquidity_y: Decimal,
    /// Bin value in the quote token: `liquidity_x * price + liquidity_y`.
    pub total_liquidity: Decimal,
}

impl BinData {
    /// Creates a bin, deriving its price and quote value.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidInput`] if the bin value overflows.
    pub fn new(
        bin_id: i32,
        bin_step: u16,
        liquidity_x: Decimal,
        liquidity_y: Decimal,
    ) -> Result<Self> {
        let price = bin_id_to_price(bin_id, bin_step);
        let total_liquidity = price.quote_value(liquidity_x, liquidity_y).ok_or_else(|| {
            DomainError::invalid_input(format!("liquidity of bin {bin_id} overflows"))
        })?;

        Ok(Self {
            bin_id,
            price,
            liquidity_x,
            liquidity_y,
            total_liquidity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_values_bin_in_quote() {
        // Bin 0 always prices at 1.
        let bin = BinData::new(0, 25, dec!(3), dec!(4.5)).unwrap();
        assert_eq!(bin.price.value, Decimal::ONE);
        assert_eq!(bin.total_liquidity, dec!(7.5));
    }

    #[test]
    fn test_new_rejects_overflow() {
        // 1.01^7000 is beyond the Decimal range, so the price saturates.
        let result = BinData::new(7000, 100, dec!(10), Decimal::ZERO);
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    }
}
