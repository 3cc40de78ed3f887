use crate::value_objects::price::Price;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub lower_price: Price,
    pub upper_price: Price,
}

impl PriceRange {
    pub fn new(lower: Price, upper: Price) -> Self {
        Self {
            lower_price: lower,
            upper_price: upper,
        }
    }

    /// Builds the range spanned by a set of bin prices.
    ///
    /// An empty set collapses to `[current, current]`: a position whose bins
    /// are unknown is treated as in range.
    pub fn from_bin_prices(prices: &[Price], current: Price) -> Self {
        let lower = prices.iter().copied().min().unwrap_or(current);
        let upper = prices.iter().copied().max().unwrap_or(current);
        Self::new(lower, upper)
    }

    /// Inclusive on both ends.
    pub fn contains(&self, price: Price) -> bool {
        price.value >= self.lower_price.value && price.value <= self.upper_price.value
    }
}
