use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price of token X denominated in token Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    pub value: Decimal,
}

impl Price {
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Values a pair of amounts in units of the quote token (Y).
    ///
    /// Returns `None` if the result does not fit in a `Decimal`.
    pub fn quote_value(&self, amount_x: Decimal, amount_y: Decimal) -> Option<Decimal> {
        amount_x.checked_mul(self.value)?.checked_add(amount_y)
    }
}

impl From<Decimal> for Price {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}
