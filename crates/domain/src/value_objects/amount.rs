use crate::error::{DomainError, Result};
use primitive_types::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest mantissa a `Decimal` can hold, in bits.
const DECIMAL_MANTISSA_BITS: usize = 96;

/// A token amount in native (smallest) units together with its decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Amount {
    pub raw: U256,
    pub decimals: u8,
}

impl Amount {
    pub fn new(raw: U256, decimals: u8) -> Self {
        Self { raw, decimals }
    }

    pub fn from_native(raw: u64, decimals: u8) -> Self {
        Self::new(U256::from(raw), decimals)
    }

    /// Converts to a UI amount (`raw / 10^decimals`).
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidInput`] if the raw value or the scale
    /// cannot be represented as a `Decimal`.
    pub fn to_decimal(&self) -> Result<Decimal> {
        if self.raw.bits() > DECIMAL_MANTISSA_BITS {
            return Err(DomainError::invalid_input(format!(
                "amount {} exceeds the representable range",
                self.raw
            )));
        }
        let raw = i128::try_from(self.raw.low_u128()).map_err(|_| {
            DomainError::invalid_input(format!("amount {} exceeds 127 bits", self.raw))
        })?;
        Decimal::try_from_i128_with_scale(raw, u32::from(self.decimals)).map_err(|e| {
            DomainError::invalid_input(format!(
                "amount {} with {} decimals: {e}",
                self.raw, self.decimals
            ))
        })
    }
}
