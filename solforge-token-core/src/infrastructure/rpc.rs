//! JSON-RPC plumbing for the Solana node endpoints
//!
//! Balance lookups and transaction broadcast go through plain JSON-RPC
//! bodies; no RPC client library is pulled in for the three methods the
//! workflow needs.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde_json::json;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::Transaction;

use crate::domain::providers::BalanceOracle;
use crate::shared::constants::RPC_TIMEOUT_MS;
use crate::shared::error::TokenError;
use crate::shared::types::{Lamports, Network, TokenResult, TxSignature};

/// Resolve the RPC endpoint for a network, honoring env overrides
///
/// Keys: SOLFORGE_RPC_DEVNET, SOLFORGE_RPC_MAINNET
pub fn resolve_rpc_url(network: Network) -> String {
    let key = match network {
        Network::Devnet => "SOLFORGE_RPC_DEVNET",
        Network::Mainnet => "SOLFORGE_RPC_MAINNET",
    };
    std::env::var(key).unwrap_or_else(|_| network.rpc_url().to_string())
}

/// Minimal JSON-RPC sender shared by the infrastructure collaborators
#[derive(Clone)]
pub struct JsonRpcSender {
    http: Client,
}

impl JsonRpcSender {
    pub fn new() -> Self {
        let http = Client::builder()
            .timeout(Duration::from_millis(RPC_TIMEOUT_MS))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { http }
    }

    async fn call(
        &self,
        network: Network,
        method: &str,
        params: serde_json::Value,
    ) -> TokenResult<serde_json::Value> {
        let body = json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 1
        });
        let resp = self
            .http
            .post(resolve_rpc_url(network))
            .json(&body)
            .send()
            .await
            .map_err(|e| TokenError::network(format!("Failed to reach {}: {}", method, e)))?;
        let resp_json: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| TokenError::network(format!("Invalid {} response: {}", method, e)))?;

        if let Some(error) = resp_json.get("error") {
            return Err(TokenError::network(format!("RPC error from {}: {}", method, error)));
        }
        resp_json
            .get("result")
            .cloned()
            .ok_or_else(|| TokenError::network(format!("Missing {} result", method)))
    }

    /// Fetch a recent blockhash for transaction assembly
    pub async fn get_latest_blockhash(&self, network: Network) -> TokenResult<Hash> {
        let result = self
            .call(network, "getLatestBlockhash", json!([{"commitment": "confirmed"}]))
            .await?;
        let blockhash = result
            .get("value")
            .and_then(|v| v.get("blockhash"))
            .and_then(|v| v.as_str())
            .ok_or_else(|| TokenError::network("Missing blockhash in response".to_string()))?;
        Hash::from_str(blockhash)
            .map_err(|e| TokenError::network(format!("Invalid blockhash: {}", e)))
    }

    /// Broadcast a fully signed transaction and return its signature
    pub async fn send_transaction(
        &self,
        tx: &Transaction,
        network: Network,
    ) -> TokenResult<TxSignature> {
        let wire = bincode::serialize(tx)
            .map_err(|e| TokenError::internal(format!("Transaction encoding error: {}", e)))?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(wire);
        let result = self
            .call(
                network,
                "sendTransaction",
                json!([encoded, {"encoding": "base64", "preflightCommitment": "confirmed"}]),
            )
            .await?;
        let signature = result
            .as_str()
            .ok_or_else(|| TokenError::network("Missing transaction signature".to_string()))?;
        TxSignature::from_str(signature)
            .map_err(|e| TokenError::network(format!("Invalid transaction signature: {}", e)))
    }
}

impl Default for JsonRpcSender {
    fn default() -> Self {
        Self::new()
    }
}

/// Balance oracle backed by the getBalance RPC method
pub struct RpcBalanceOracle {
    sender: JsonRpcSender,
}

impl RpcBalanceOracle {
    pub fn new(sender: JsonRpcSender) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl BalanceOracle for RpcBalanceOracle {
    async fn get_balance(&self, account: &Pubkey, network: Network) -> TokenResult<Lamports> {
        let result = self
            .sender
            .call(
                network,
                "getBalance",
                json!([account.to_string(), {"commitment": "confirmed"}]),
            )
            .await?;
        result
            .get("value")
            .and_then(|v| v.as_u64())
            .ok_or_else(|| TokenError::network("Missing balance value".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_rpc_url_defaults() {
        std::env::remove_var("SOLFORGE_RPC_DEVNET");

        assert_eq!(
            resolve_rpc_url(Network::Devnet),
            "https://api.devnet.solana.com"
        );
    }

    #[test]
    fn test_resolve_rpc_url_env_override() {
        std::env::set_var("SOLFORGE_RPC_MAINNET", "http://localhost:8899");

        assert_eq!(resolve_rpc_url(Network::Mainnet), "http://localhost:8899");

        std::env::remove_var("SOLFORGE_RPC_MAINNET");
    }
}
