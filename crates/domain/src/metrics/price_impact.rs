use rust_decimal::Decimal;

/// Percentage move from `current_price` to `target_price`. Zero when the
/// current price is zero.
pub fn calculate_price_impact(current_price: Decimal, target_price: Decimal) -> Decimal {
    if current_price.is_zero() {
        return Decimal::ZERO;
    }
    (target_price - current_price)
        .checked_div(current_price)
        .and_then(|change| change.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_calculate_price_impact() {
        assert_eq!(calculate_price_impact(dec!(100), dec!(110)), dec!(10));
        assert_eq!(calculate_price_impact(dec!(200), dec!(150)), dec!(-25));
        assert_eq!(calculate_price_impact(Decimal::ZERO, dec!(150)), Decimal::ZERO);
    }
}
