/// Bin index to price conversion.
pub mod bin_price;
