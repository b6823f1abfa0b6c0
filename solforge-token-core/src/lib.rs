//! SolForge Token Core
//!
//! Client-side core for the SolForge token creation dashboard.
//! Handles fee quoting, step validation, the creation wizard state machine,
//! and mint submission in Rust.
//!
//! ## Architecture
//!
//! This library follows a simplified architecture focused on the creation
//! workflow:
//!
//! - **Core**: fee derivation, validation, the wizard, submission
//! - **Domain**: entities and collaborator interfaces
//! - **Infrastructure**: RPC, identity, ledger, and notification backends
//! - **Shared**: common types, constants, and error handling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use solforge_token_core::{init_token_core, TokenCreationRequest};
//!
//! # async fn run() -> Result<(), solforge_token_core::TokenError> {
//! let core = init_token_core().await?;
//!
//! core.wizard
//!     .update_request(TokenCreationRequest::new("My Token", "MTK", 1_000_000))
//!     .await?;
//! core.wizard.next().await?; // Configure -> Review
//! core.wizard.next().await?; // Review -> Submit
//! let mint = core.wizard.submit().await?;
//! # let _ = mint;
//! # Ok(())
//! # }
//! ```

use std::str::FromStr;
use std::sync::Arc;

use dotenv::dotenv;
use solana_sdk::pubkey::Pubkey;

// Re-export main modules for easy access
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export main types and traits
pub use crate::core::{compute_fee, MintSubmitter, TokenCreationWizard};
pub use crate::domain::entities::{FeeQuote, TokenCreationRequest};
pub use crate::domain::providers::{
    BalanceOracle, CreateAssetSpec, IdentityProvider, LedgerClient, NotificationSink,
};
pub use crate::infrastructure::{
    JsonRpcSender, KeypairIdentity, LogNotifier, NullIdentity, RpcBalanceOracle, SplLedgerClient,
};
pub use crate::shared::error::TokenError;
pub use crate::shared::types::{Lamports, MintAddress, Network, NoticeLevel, TokenResult, WizardStep};

use crate::shared::constants::DEFAULT_FEE_WALLET;

// Initialize logging
pub fn init() {
    let _ = env_logger::try_init();
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize the token core with configuration from .env or safe defaults
pub async fn init_token_core() -> TokenResult<TokenCore> {
    dotenv().ok(); // Load .env if present

    // Read default network selection
    let default_network = std::env::var("SOLFORGE_DEFAULT_NETWORK")
        .unwrap_or_else(|_| "devnet".to_string());
    let network = match default_network.as_str() {
        "mainnet" => Network::Mainnet,
        "devnet" => Network::Devnet,
        other => {
            log::warn!("Unknown network '{}', falling back to devnet", other);
            Network::Devnet
        }
    };

    // Read the protocol fee wallet, falling back to the built-in address
    let fee_wallet = std::env::var("SOLFORGE_FEE_WALLET")
        .unwrap_or_else(|_| DEFAULT_FEE_WALLET.to_string());
    let fee_wallet = Pubkey::from_str(&fee_wallet)
        .map_err(|e| TokenError::config(format!("Invalid fee wallet address: {}", e)))?;

    let sender = JsonRpcSender::new();

    // A base58 secret key attaches a local signer; otherwise the workflow
    // starts disconnected and surfaces the connect prompt on submit
    let identity: Arc<dyn IdentityProvider> = match std::env::var("SOLFORGE_SIGNER_KEYPAIR") {
        Ok(encoded) => Arc::new(KeypairIdentity::from_base58(&encoded, sender.clone())?),
        Err(_) => Arc::new(NullIdentity),
    };

    let oracle = Arc::new(RpcBalanceOracle::new(sender.clone()));
    let ledger = Arc::new(SplLedgerClient::new(
        Arc::clone(&identity),
        sender,
        fee_wallet,
    ));
    let notifier: Arc<dyn NotificationSink> = Arc::new(LogNotifier);

    let submitter = MintSubmitter::new(identity, oracle, ledger, Arc::clone(&notifier));
    let wizard = TokenCreationWizard::new(network, submitter, notifier);

    log::info!("Token core initialized on {}", network.name());
    Ok(TokenCore { wizard })
}

/// Main token core struct that provides access to the creation workflow
pub struct TokenCore {
    pub wizard: TokenCreationWizard,
}

impl TokenCore {
    /// Current fee quote for the form's authority toggles
    pub async fn fee_quote(&self) -> FeeQuote {
        self.wizard.fee_quote().await
    }

    pub async fn step(&self) -> WizardStep {
        self.wizard.step().await
    }

    pub async fn network(&self) -> Network {
        self.wizard.network().await
    }
}
