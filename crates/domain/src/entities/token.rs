use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// SPL token metadata. Identified by its mint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenInfo {
    pub symbol: String,
    pub mint: String,
    pub decimals: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

impl TokenInfo {
    pub fn new(mint: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            symbol: symbol.into(),
            mint: mint.into(),
            decimals,
            logo_uri: None,
        }
    }

    #[must_use]
    pub fn with_logo(mut self, logo_uri: impl Into<String>) -> Self {
        self.logo_uri = Some(logo_uri.into());
        self
    }
}

impl PartialEq for TokenInfo {
    fn eq(&self, other: &Self) -> bool {
        self.mint == other.mint
    }
}

impl Eq for TokenInfo {}

impl Hash for TokenInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mint.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_the_mint() {
        let a = TokenInfo::new("So11111111111111111111111111111111111111112", "SOL", 9);
        let b = TokenInfo::new("So11111111111111111111111111111111111111112", "wSOL", 9)
            .with_logo("https://example.invalid/sol.png");
        assert_eq!(a, b);
    }
}
