//! Constants for the token core
//!
//! This module contains all constants used throughout the token core.

use crate::shared::types::Lamports;

// Fee structure (in lamports)
pub const BASE_TOKEN_CREATION_FEE: Lamports = 100_000_000; // 0.1 SOL base fee
pub const MINT_AUTHORITY_FEE: Lamports = 50_000_000; // 0.05 SOL additional if mint authority is retained
pub const FREEZE_AUTHORITY_FEE: Lamports = 50_000_000; // 0.05 SOL additional if freeze authority is enabled

// Protocol fee wallet; override with SOLFORGE_FEE_WALLET
pub const DEFAULT_FEE_WALLET: &str = "6zkf4DviZZkpWVEh53MrcQV6vGXGpESnNXgAvU6KpBUH";

// Allowance for mint/holding account rent and transaction fees on top of the
// protocol fee when checking the payer balance
pub const MINT_RENT_ALLOWANCE: Lamports = 5_000_000;

// Token parameter limits
pub const TOKEN_NAME_MAX_LENGTH: usize = 32;
pub const TOKEN_SYMBOL_MAX_LENGTH: usize = 10;
pub const DEFAULT_DECIMALS: u8 = 9;

// Network timeouts
pub const SUBMISSION_TIMEOUT_MS: u64 = 30_000; // 30 seconds for the outbound ledger call
pub const RPC_TIMEOUT_MS: u64 = 30_000;

// Supported networks
pub const SUPPORTED_NETWORKS: &[&str] = &["devnet", "mainnet"];

// Build information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_constants() {
        assert_eq!(BASE_TOKEN_CREATION_FEE, 100_000_000);
        assert_eq!(MINT_AUTHORITY_FEE, 50_000_000);
        assert_eq!(FREEZE_AUTHORITY_FEE, 50_000_000);
    }

    #[test]
    fn test_parameter_limits() {
        assert_eq!(TOKEN_NAME_MAX_LENGTH, 32);
        assert_eq!(TOKEN_SYMBOL_MAX_LENGTH, 10);
        assert_eq!(DEFAULT_DECIMALS, 9);
    }

    #[test]
    fn test_supported_networks() {
        assert!(SUPPORTED_NETWORKS.contains(&"devnet"));
        assert!(SUPPORTED_NETWORKS.contains(&"mainnet"));
        assert_eq!(SUPPORTED_NETWORKS.len(), 2);
    }

    #[test]
    fn test_default_fee_wallet_parses() {
        use std::str::FromStr;
        let parsed = solana_sdk::pubkey::Pubkey::from_str(DEFAULT_FEE_WALLET);
        assert!(parsed.is_ok());
    }
}
