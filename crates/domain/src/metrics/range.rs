use crate::value_objects::{price::Price, price_range::PriceRange};
use serde::{Deserialize, Serialize};

/// Range of a position and whether the current price falls inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeEvaluation {
    pub range: PriceRange,
    pub in_range: bool,
}

/// Derives the min/max price and in-range flag from a position's bin prices.
///
/// Without bin prices the range collapses to the current price, so the
/// position reports as in range. This is a known simplification: an unknown
/// range is not evidence of an out-of-range position.
pub fn evaluate_range(bin_prices: &[Price], current_price: Price) -> RangeEvaluation {
    let range = PriceRange::from_bin_prices(bin_prices, current_price);
    RangeEvaluation {
        range,
        in_range: range.contains(current_price),
    }
}
