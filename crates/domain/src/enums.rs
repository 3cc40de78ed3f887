use serde::{Deserialize, Serialize};
use std::fmt;

/// Display status of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionStatus {
    /// In range and earning a reasonable yield.
    Active,
    /// In range but yielding below the configured threshold.
    Warning,
    /// Out of range.
    Inactive,
}

impl PositionStatus {
    /// Returns the lowercase status name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Warning => "warning",
            Self::Inactive => "inactive",
        }
    }

    /// Returns the message shown next to the status.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Active => "earning fees",
            Self::Warning => "low yield, consider rebalancing",
            Self::Inactive => "out of range, not earning fees",
        }
    }
}

impl fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
