use crate::enums::PositionStatus;
use rust_decimal::Decimal;

/// Classifies a position for display. First match wins:
/// out of range is `Inactive`, in range below `low_yield_threshold_pct` is
/// `Warning`, anything else is `Active`.
pub fn classify_position(
    is_in_range: bool,
    estimated_apy: Decimal,
    low_yield_threshold_pct: Decimal,
) -> PositionStatus {
    if !is_in_range {
        PositionStatus::Inactive
    } else if estimated_apy < low_yield_threshold_pct {
        PositionStatus::Warning
    } else {
        PositionStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_out_of_range_is_inactive_regardless_of_apy() {
        for apy in [dec!(0), dec!(3), dec!(30), dec!(1000)] {
            let status = classify_position(false, apy, dec!(5));
            assert_eq!(status, PositionStatus::Inactive);
            assert_eq!(status.message(), "out of range, not earning fees");
        }
    }

    #[test]
    fn test_low_yield_is_warning() {
        let status = classify_position(true, dec!(3), dec!(5));
        assert_eq!(status, PositionStatus::Warning);
        assert_eq!(status.as_str(), "warning");
        assert_eq!(status.message(), "low yield, consider rebalancing");
    }

    #[test]
    fn test_threshold_itself_is_active() {
        assert_eq!(classify_position(true, dec!(5), dec!(5)), PositionStatus::Active);
    }

    #[test]
    fn test_healthy_yield_is_active() {
        let status = classify_position(true, dec!(30), dec!(5));
        assert_eq!(status, PositionStatus::Active);
        assert_eq!(status.to_string(), "active");
        assert_eq!(status.message(), "earning fees");
    }
}
