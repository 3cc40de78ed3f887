pub mod bin;
pub mod pool;
pub mod position;
pub mod token;

// Re-export for easier access
pub use bin::BinData;
pub use pool::PoolInfo;
pub use position::{Position, UnclaimedFees};
pub use token::TokenInfo;
