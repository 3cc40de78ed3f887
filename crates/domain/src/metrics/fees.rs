use rust_decimal::Decimal;

/// Seconds in one day.
pub const SECONDS_PER_DAY: i64 = 86_400;
/// Days used to annualize a daily return.
pub const DAYS_PER_YEAR: i64 = 365;
/// Upper bound for an estimated APY, in percent.
pub const MAX_APY_PCT: Decimal = Decimal::ONE_THOUSAND;

/// Fractional days between two Unix timestamps (seconds).
pub fn days_elapsed(start_timestamp: i64, now_timestamp: i64) -> Decimal {
    Decimal::from(now_timestamp.saturating_sub(start_timestamp)) / Decimal::from(SECONDS_PER_DAY)
}

/// Annualizes fees earned since `start_timestamp` into an APY percentage.
///
/// apy = fees / value / days * 365 * 100, clamped to `[0, 1000]`.
///
/// A zero value or zero elapsed time yields 0. Negative results floor at 0
/// and runaway extrapolation from very short windows caps at 1000, including
/// results too large to represent.
pub fn calculate_apy(
    fees_earned: Decimal,
    total_value: Decimal,
    start_timestamp: i64,
    now_timestamp: i64,
) -> Decimal {
    if total_value.is_zero() {
        return Decimal::ZERO;
    }
    let days = days_elapsed(start_timestamp, now_timestamp);
    if days.is_zero() {
        return Decimal::ZERO;
    }

    let annualized = fees_earned
        .checked_div(total_value)
        .and_then(|ratio| ratio.checked_div(days))
        .and_then(|daily| daily.checked_mul(Decimal::from(DAYS_PER_YEAR)))
        .and_then(|yearly| yearly.checked_mul(Decimal::ONE_HUNDRED));

    match annualized {
        Some(apy) => apy.clamp(Decimal::ZERO, MAX_APY_PCT),
        None => {
            let negative = fees_earned.is_sign_negative()
                ^ total_value.is_sign_negative()
                ^ days.is_sign_negative();
            if negative { Decimal::ZERO } else { MAX_APY_PCT }
        }
    }
}

/// Average fees per day since `start_timestamp`. Returns 0 until time has
/// elapsed.
pub fn estimate_daily_fees(
    fees_earned: Decimal,
    start_timestamp: i64,
    now_timestamp: i64,
) -> Decimal {
    let days = days_elapsed(start_timestamp, now_timestamp);
    if days <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    fees_earned.checked_div(days).unwrap_or(Decimal::ZERO)
}
