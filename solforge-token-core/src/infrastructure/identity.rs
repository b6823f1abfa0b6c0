//! Identity providers
//!
//! A local keypair signer for headless use and tests, plus a disconnected
//! placeholder used until a wallet is attached.

use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;
use zeroize::Zeroize;

use crate::domain::providers::IdentityProvider;
use crate::infrastructure::rpc::JsonRpcSender;
use crate::shared::error::TokenError;
use crate::shared::types::{Network, TokenResult, TxSignature};

/// Identity backed by a locally held keypair
pub struct KeypairIdentity {
    keypair: Keypair,
    sender: JsonRpcSender,
}

impl KeypairIdentity {
    pub fn new(keypair: Keypair, sender: JsonRpcSender) -> Self {
        Self { keypair, sender }
    }

    /// Build from a base58-encoded 64-byte secret key
    pub fn from_base58(encoded: &str, sender: JsonRpcSender) -> TokenResult<Self> {
        let mut bytes = bs58::decode(encoded).into_vec()?;
        let keypair = Keypair::try_from(bytes.as_slice())
            .map_err(|e| TokenError::config(format!("Invalid signer keypair: {}", e)));
        bytes.zeroize();
        Ok(Self::new(keypair?, sender))
    }

    pub fn generate(sender: JsonRpcSender) -> Self {
        Self::new(Keypair::new(), sender)
    }

    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }
}

#[async_trait]
impl IdentityProvider for KeypairIdentity {
    async fn current_account(&self) -> Option<Pubkey> {
        Some(self.keypair.pubkey())
    }

    async fn sign_and_send(&self, mut tx: Transaction, network: Network) -> TokenResult<TxSignature> {
        let blockhash = tx.message.recent_blockhash;
        tx.try_partial_sign(&[&self.keypair], blockhash)?;
        self.sender.send_transaction(&tx, network).await
    }
}

/// Identity provider with no connected account
///
/// Stands in until the user attaches a wallet; every submission through it
/// surfaces the connect prompt instead of a signature.
pub struct NullIdentity;

#[async_trait]
impl IdentityProvider for NullIdentity {
    async fn current_account(&self) -> Option<Pubkey> {
        None
    }

    async fn sign_and_send(&self, _tx: Transaction, _network: Network) -> TokenResult<TxSignature> {
        Err(TokenError::NoIdentity)
    }
}
