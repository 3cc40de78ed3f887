pub mod amount;
pub mod portfolio_summary;
pub mod price;
pub mod price_range;

pub use amount::Amount;
pub use portfolio_summary::PortfolioSummary;
pub use price::Price;
pub use price_range::PriceRange;
