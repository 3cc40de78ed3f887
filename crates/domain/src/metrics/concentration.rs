use crate::entities::bin::BinData;
use rust_decimal::Decimal;

/// Herfindahl-Hirschman index of liquidity across bins, in `(0, 100]`.
///
/// HHI = sum((bin_liquidity / total_liquidity)^2) * 100. Higher means more
/// concentrated: 100 when one bin holds everything, 100 / N for N equal bins.
/// Returns 0 for no bins or no liquidity.
pub fn calculate_liquidity_concentration(bins: &[BinData]) -> Decimal {
    if bins.is_empty() {
        return Decimal::ZERO;
    }

    // Totals past the Decimal range carry no usable share information.
    let Some(total) = bins
        .iter()
        .try_fold(Decimal::ZERO, |acc, bin| acc.checked_add(bin.total_liquidity))
    else {
        return Decimal::ZERO;
    };
    if total.is_zero() {
        return Decimal::ZERO;
    }

    let herfindahl: Decimal = bins
        .iter()
        .map(|bin| {
            let share = bin.total_liquidity / total;
            share * share
        })
        .sum();

    // Rounded shares can sum a hair above one.
    (herfindahl * Decimal::ONE_HUNDRED).min(Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::price::Price;
    use rust_decimal_macros::dec;

    fn bin(bin_id: i32, total_liquidity: Decimal) -> BinData {
        BinData {
            bin_id,
            price: Price::new(Decimal::ONE),
            liquidity_x: Decimal::ZERO,
            liquidity_y: total_liquidity,
            total_liquidity,
        }
    }

    #[test]
    fn test_two_equal_bins() {
        let bins = [bin(1, dec!(500)), bin(2, dec!(500))];
        assert_eq!(calculate_liquidity_concentration(&bins), dec!(50));
    }

    #[test]
    fn test_single_bin_holds_everything() {
        let bins = [bin(1, Decimal::ZERO), bin(2, dec!(1200)), bin(3, Decimal::ZERO)];
        assert_eq!(calculate_liquidity_concentration(&bins), dec!(100));
    }

    #[test]
    fn test_equal_bins_approach_one_over_n() {
        let bins: Vec<BinData> = (0..4).map(|i| bin(i, dec!(250))).collect();
        assert_eq!(calculate_liquidity_concentration(&bins), dec!(25));

        let bins: Vec<BinData> = (0..3).map(|i| bin(i, dec!(10))).collect();
        let hhi = calculate_liquidity_concentration(&bins);
        assert!((hhi - dec!(33.3333)).abs() < dec!(0.0001));
    }

    #[test]
    fn test_empty_or_dry_bins() {
        assert_eq!(calculate_liquidity_concentration(&[]), Decimal::ZERO);
        let bins = [bin(1, Decimal::ZERO), bin(2, Decimal::ZERO)];
        assert_eq!(calculate_liquidity_concentration(&bins), Decimal::ZERO);
    }
}
