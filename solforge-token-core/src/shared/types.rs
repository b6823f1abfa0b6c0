use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

// Basic types for token creation
pub type Lamports = u64;
pub type MintAddress = Pubkey;
pub type TxSignature = solana_sdk::signature::Signature;

// Network types - the two ledger environments the dashboard targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Network {
    Devnet,
    Mainnet,
}

impl Network {
    pub fn name(&self) -> &'static str {
        match self {
            Network::Devnet => "Devnet",
            Network::Mainnet => "Mainnet",
        }
    }

    pub fn rpc_url(&self) -> &'static str {
        match self {
            Network::Devnet => "https://api.devnet.solana.com",
            Network::Mainnet => "https://api.mainnet-beta.solana.com",
        }
    }

    pub fn native_currency(&self) -> &'static str {
        "SOL"
    }

    pub fn explorer_url(&self) -> &'static str {
        match self {
            Network::Devnet => "https://explorer.solana.com?cluster=devnet",
            Network::Mainnet => "https://explorer.solana.com",
        }
    }
}

// Wizard step - the four screens of the creation flow
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WizardStep {
    Configure,
    Review,
    Submit,
    Complete,
}

// Notification severity for user-facing banners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

// Result type for better error handling
pub type TokenResult<T> = Result<T, crate::shared::error::TokenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_names() {
        assert_eq!(Network::Devnet.name(), "Devnet");
        assert_eq!(Network::Mainnet.name(), "Mainnet");
    }

    #[test]
    fn test_network_rpc_urls() {
        assert_eq!(Network::Devnet.rpc_url(), "https://api.devnet.solana.com");
        assert_eq!(Network::Mainnet.rpc_url(), "https://api.mainnet-beta.solana.com");
    }

    #[test]
    fn test_network_native_currency() {
        assert_eq!(Network::Devnet.native_currency(), "SOL");
        assert_eq!(Network::Mainnet.native_currency(), "SOL");
    }

    #[test]
    fn test_wizard_step_equality() {
        assert_eq!(WizardStep::Configure, WizardStep::Configure);
        assert_ne!(WizardStep::Review, WizardStep::Submit);
    }
}
