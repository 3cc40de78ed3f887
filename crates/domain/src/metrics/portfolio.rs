use crate::entities::position::Position;
use crate::value_objects::portfolio_summary::PortfolioSummary;
use rust_decimal::Decimal;

/// Reduces a set of positions to portfolio totals.
///
/// `average_apy` is a plain mean across positions, not weighted by value.
/// An empty set yields an all-zero summary. Sums that exceed the `Decimal`
/// range saturate at `Decimal::MAX` (or `Decimal::MIN`).
pub fn calculate_portfolio_summary(positions: &[Position]) -> PortfolioSummary {
    if positions.is_empty() {
        return PortfolioSummary::default();
    }

    let total_value = saturating_sum(positions.iter().map(|p| p.total_value));
    let total_fees_earned = saturating_sum(positions.iter().map(|p| p.fees_earned));
    let active_positions = positions.iter().filter(|p| p.is_in_range).count();
    let total_apy = saturating_sum(positions.iter().map(|p| p.estimated_apy));

    PortfolioSummary {
        total_value,
        total_fees_earned,
        active_positions,
        average_apy: total_apy / Decimal::from(positions.len()),
    }
}

fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, |acc, value| {
        acc.checked_add(value).unwrap_or(if value.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::test_support::position;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_portfolio() {
        let summary = calculate_portfolio_summary(&[]);
        assert_eq!(summary.total_value, Decimal::ZERO);
        assert_eq!(summary.total_fees_earned, Decimal::ZERO);
        assert_eq!(summary.active_positions, 0);
        assert_eq!(summary.average_apy, Decimal::ZERO);
    }

    #[test]
    fn test_totals_are_exact() {
        let mut a = position("pos-a", true, dec!(12));
        a.total_value = dec!(12450.50);
        a.fees_earned = dec!(120.25);
        let mut b = position("pos-b", false, dec!(0));
        b.total_value = dec!(8920.00);
        b.fees_earned = dec!(45.10);
        let mut c = position("pos-c", true, dec!(30));
        c.total_value = dec!(6230.80);
        c.fees_earned = dec!(0.65);

        let summary = calculate_portfolio_summary(&[a, b, c]);
        assert_eq!(summary.total_value, dec!(27601.30));
        assert_eq!(summary.total_fees_earned, dec!(166.00));
        assert_eq!(summary.active_positions, 2);
        assert_eq!(summary.average_apy, dec!(14));
    }

    #[test]
    fn test_average_apy_is_unweighted() {
        let mut whale = position("whale", true, dec!(10));
        whale.total_value = dec!(1000000);
        let mut minnow = position("minnow", true, dec!(50));
        minnow.total_value = dec!(10);

        let summary = calculate_portfolio_summary(&[whale, minnow]);
        assert_eq!(summary.average_apy, dec!(30));
    }

    #[test]
    fn test_overflowing_totals_saturate() {
        let half = Decimal::MAX / dec!(2) + Decimal::ONE;
        let mut a = position("pos-a", true, dec!(1000));
        a.total_value = half;
        a.fees_earned = half;
        let mut b = position("pos-b", true, dec!(1000));
        b.total_value = half;
        b.fees_earned = half;

        let summary = calculate_portfolio_summary(&[a, b]);
        assert_eq!(summary.total_value, Decimal::MAX);
        assert_eq!(summary.total_fees_earned, Decimal::MAX);
        assert_eq!(summary.active_positions, 2);
        assert_eq!(summary.average_apy, dec!(1000));
    }
}
