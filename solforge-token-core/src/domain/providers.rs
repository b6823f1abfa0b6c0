//! Collaborator interfaces consumed by the workflow
//!
//! The core never reaches into ambient wallet or RPC state; every external
//! dependency is injected through one of these traits.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::Transaction;

use crate::shared::types::{Lamports, Network, NoticeLevel, TokenResult, TxSignature};

/// Everything the ledger needs to create one fungible asset
#[derive(Debug, Clone)]
pub struct CreateAssetSpec {
    pub payer: Pubkey,
    pub decimals: u8,
    /// On-chain amount already scaled by 10^decimals
    pub initial_supply: u64,
    /// Keep the payer as mint authority; when false the authority is revoked
    /// after the initial supply is minted
    pub mint_authority_retained: bool,
    /// Set the payer as freeze authority on the mint
    pub freeze_authority_enabled: bool,
    /// Protocol fee transferred to the fee wallet ahead of the mint instructions
    pub fee_lamports: Lamports,
}

/// Identity and signing provider, e.g. a connected wallet
#[cfg_attr(test, automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The authenticated account, if any
    async fn current_account(&self) -> Option<Pubkey>;

    /// Sign the remaining required signatures and broadcast
    async fn sign_and_send(&self, tx: Transaction, network: Network) -> TokenResult<TxSignature>;
}

/// Account balance lookup on a selected network
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BalanceOracle: Send + Sync {
    async fn get_balance(&self, account: &Pubkey, network: Network) -> TokenResult<Lamports>;
}

/// The single asset-creation operation on the external ledger
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Issue exactly one asset-creation call and return the new mint address
    async fn create_fungible_asset(
        &self,
        spec: &CreateAssetSpec,
        network: Network,
    ) -> TokenResult<Pubkey>;
}

/// Fire-and-forget banner surface; the core never awaits or inspects a result
#[cfg_attr(test, automock)]
pub trait NotificationSink: Send + Sync {
    fn notify(&self, level: NoticeLevel, message: &str);
}
