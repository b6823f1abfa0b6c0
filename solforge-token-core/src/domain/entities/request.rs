//! Token creation request entity
//!
//! Everything the Configure form collects, carried unchanged through the
//! wizard to submission.

use serde::{Deserialize, Serialize};

use crate::shared::constants::DEFAULT_DECIMALS;
use crate::shared::error::TokenError;
use crate::shared::types::TokenResult;

/// Parameters for a new fungible token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenCreationRequest {
    pub name: String,
    pub symbol: String,
    /// Whole-token supply before decimal scaling; None until the form field is filled
    pub total_supply: Option<u64>,
    pub decimals: u8,
    pub description: Option<String>,
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub telegram: Option<String>,
    /// Retain the mint authority after creation
    pub enable_mint: bool,
    /// Set a freeze authority on the mint
    pub enable_freeze: bool,
}

impl TokenCreationRequest {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, total_supply: u64) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            total_supply: Some(total_supply),
            ..Self::default()
        }
    }

    /// On-chain amount: whole-token supply scaled by 10^decimals
    pub fn scaled_supply(&self) -> TokenResult<u64> {
        let supply = self
            .total_supply
            .ok_or_else(|| TokenError::missing_field("total supply"))?;
        let scale = 10u64
            .checked_pow(self.decimals as u32)
            .ok_or_else(|| TokenError::invalid_supply("decimals too large for native units"))?;
        supply
            .checked_mul(scale)
            .ok_or_else(|| TokenError::invalid_supply("total supply overflows native units"))
    }
}

impl Default for TokenCreationRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            symbol: String::new(),
            total_supply: None,
            decimals: DEFAULT_DECIMALS,
            description: None,
            website: None,
            twitter: None,
            telegram: None,
            enable_mint: false,
            enable_freeze: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = TokenCreationRequest::default();

        assert!(request.name.is_empty());
        assert!(request.total_supply.is_none());
        assert_eq!(request.decimals, DEFAULT_DECIMALS);
        assert!(!request.enable_mint);
        assert!(!request.enable_freeze);
    }

    #[test]
    fn test_scaled_supply() {
        let request = TokenCreationRequest::new("Test", "TST", 1_000_000);

        assert_eq!(
            request.scaled_supply().expect("supply should scale"),
            1_000_000_000_000_000
        );
    }

    #[test]
    fn test_scaled_supply_missing() {
        let request = TokenCreationRequest::default();

        assert!(matches!(
            request.scaled_supply(),
            Err(TokenError::MissingField(_))
        ));
    }

    #[test]
    fn test_scaled_supply_overflow() {
        let request = TokenCreationRequest::new("Test", "TST", u64::MAX / 2);

        assert!(matches!(
            request.scaled_supply(),
            Err(TokenError::InvalidSupply(_))
        ));
    }

    #[test]
    fn test_zero_decimals_supply_is_unscaled() {
        let mut request = TokenCreationRequest::new("Test", "TST", 42);
        request.decimals = 0;

        assert_eq!(request.scaled_supply().expect("supply should scale"), 42);
    }
}
