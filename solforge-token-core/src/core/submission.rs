//! Mint submission adapter
//!
//! Orchestrates one submission attempt: identity lookup, balance
//! precondition, then a single asset-creation call with a timeout. The
//! ledger is never called when a precondition fails.

use std::sync::Arc;
use std::time::Duration;

use solana_sdk::pubkey::Pubkey;

use crate::core::fees::compute_fee;
use crate::domain::entities::TokenCreationRequest;
use crate::domain::providers::{
    BalanceOracle, CreateAssetSpec, IdentityProvider, LedgerClient, NotificationSink,
};
use crate::shared::constants::{MINT_RENT_ALLOWANCE, SUBMISSION_TIMEOUT_MS};
use crate::shared::error::TokenError;
use crate::shared::types::{Network, NoticeLevel, TokenResult};

/// Submits creation requests against the injected collaborators
pub struct MintSubmitter {
    identity: Arc<dyn IdentityProvider>,
    oracle: Arc<dyn BalanceOracle>,
    ledger: Arc<dyn LedgerClient>,
    notifier: Arc<dyn NotificationSink>,
}

impl MintSubmitter {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        oracle: Arc<dyn BalanceOracle>,
        ledger: Arc<dyn LedgerClient>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            identity,
            oracle,
            ledger,
            notifier,
        }
    }

    /// Run one submission attempt and return the new mint address
    pub async fn submit(
        &self,
        request: &TokenCreationRequest,
        network: Network,
    ) -> TokenResult<Pubkey> {
        let payer = match self.identity.current_account().await {
            Some(account) => account,
            None => {
                self.notifier
                    .notify(NoticeLevel::Error, "Connect a wallet to create a token");
                return Err(TokenError::NoIdentity);
            }
        };

        let quote = compute_fee(request.enable_mint, request.enable_freeze);
        let required = quote
            .total_fee
            .checked_add(MINT_RENT_ALLOWANCE)
            .ok_or_else(|| TokenError::internal("fee requirement overflow"))?;

        let available = self.oracle.get_balance(&payer, network).await?;
        if available < required {
            self.notifier.notify(
                NoticeLevel::Error,
                &format!(
                    "Insufficient {} balance: creation needs {} lamports, wallet holds {}",
                    network.native_currency(),
                    required,
                    available
                ),
            );
            return Err(TokenError::InsufficientFunds {
                required,
                available,
            });
        }

        let spec = CreateAssetSpec {
            payer,
            decimals: request.decimals,
            initial_supply: request.scaled_supply()?,
            mint_authority_retained: request.enable_mint,
            freeze_authority_enabled: request.enable_freeze,
            fee_lamports: quote.total_fee,
        };

        log::info!(
            "Submitting token creation for {} ({}) on {}",
            request.name,
            request.symbol,
            network.name()
        );

        let deadline = Duration::from_millis(SUBMISSION_TIMEOUT_MS);
        let mint = match tokio::time::timeout(
            deadline,
            self.ledger.create_fungible_asset(&spec, network),
        )
        .await
        {
            Err(_) => {
                let cause = format!("ledger call timed out after {} ms", SUBMISSION_TIMEOUT_MS);
                self.notifier.notify(NoticeLevel::Error, &cause);
                return Err(TokenError::submission_failed(cause));
            }
            Ok(Err(err)) => {
                let mapped = match err {
                    TokenError::SubmissionFailed(_) => err,
                    other => TokenError::submission_failed(other.to_string()),
                };
                self.notifier
                    .notify(NoticeLevel::Error, &format!("Token creation failed: {}", mapped));
                return Err(mapped);
            }
            Ok(Ok(mint)) => mint,
        };

        self.notifier.notify(
            NoticeLevel::Success,
            &format!("Token {} created: {}", request.symbol, mint),
        );
        Ok(mint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::providers::{
        MockBalanceOracle, MockIdentityProvider, MockLedgerClient, MockNotificationSink,
    };

    fn request() -> TokenCreationRequest {
        let mut request = TokenCreationRequest::new("Test", "TST", 1_000_000);
        request.enable_mint = true;
        request
    }

    fn quiet_notifier() -> MockNotificationSink {
        let mut notifier = MockNotificationSink::new();
        notifier.expect_notify().return_const(());
        notifier
    }

    #[tokio::test]
    async fn test_no_identity_skips_oracle_and_ledger() {
        let mut identity = MockIdentityProvider::new();
        identity.expect_current_account().return_const(None);
        identity.expect_sign_and_send().never();
        let mut oracle = MockBalanceOracle::new();
        oracle.expect_get_balance().never();
        let mut ledger = MockLedgerClient::new();
        ledger.expect_create_fungible_asset().never();

        let submitter = MintSubmitter::new(
            Arc::new(identity),
            Arc::new(oracle),
            Arc::new(ledger),
            Arc::new(quiet_notifier()),
        );
        let result = submitter.submit(&request(), Network::Devnet).await;

        assert!(matches!(result, Err(TokenError::NoIdentity)));
    }

    #[tokio::test]
    async fn test_insufficient_funds_skips_ledger() {
        let payer = Pubkey::new_unique();
        let mut identity = MockIdentityProvider::new();
        identity.expect_current_account().return_const(Some(payer));
        let mut oracle = MockBalanceOracle::new();
        oracle
            .expect_get_balance()
            .returning(|_, _| Ok(20_000_000));
        let mut ledger = MockLedgerClient::new();
        ledger.expect_create_fungible_asset().never();

        let submitter = MintSubmitter::new(
            Arc::new(identity),
            Arc::new(oracle),
            Arc::new(ledger),
            Arc::new(quiet_notifier()),
        );
        let result = submitter.submit(&request(), Network::Devnet).await;

        // 0.15 SOL fee + rent allowance, against a 0.02 SOL balance
        match result {
            Err(TokenError::InsufficientFunds {
                required,
                available,
            }) => {
                assert_eq!(required, 155_000_000);
                assert_eq!(available, 20_000_000);
            }
            other => panic!("expected InsufficientFunds, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_successful_submission_returns_mint() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let mut identity = MockIdentityProvider::new();
        identity.expect_current_account().return_const(Some(payer));
        let mut oracle = MockBalanceOracle::new();
        oracle
            .expect_get_balance()
            .returning(|_, _| Ok(1_000_000_000));
        let mut ledger = MockLedgerClient::new();
        ledger
            .expect_create_fungible_asset()
            .withf(move |spec, network| {
                spec.payer == payer
                    && spec.fee_lamports == 150_000_000
                    && spec.mint_authority_retained
                    && !spec.freeze_authority_enabled
                    && spec.initial_supply == 1_000_000_000_000_000
                    && *network == Network::Devnet
            })
            .times(1)
            .returning(move |_, _| Ok(mint));

        let submitter = MintSubmitter::new(
            Arc::new(identity),
            Arc::new(oracle),
            Arc::new(ledger),
            Arc::new(quiet_notifier()),
        );
        let result = submitter.submit(&request(), Network::Devnet).await;

        assert_eq!(result.expect("submission should succeed"), mint);
    }

    #[tokio::test]
    async fn test_ledger_failure_maps_to_submission_failed() {
        let payer = Pubkey::new_unique();
        let mut identity = MockIdentityProvider::new();
        identity.expect_current_account().return_const(Some(payer));
        let mut oracle = MockBalanceOracle::new();
        oracle
            .expect_get_balance()
            .returning(|_, _| Ok(1_000_000_000));
        let mut ledger = MockLedgerClient::new();
        ledger
            .expect_create_fungible_asset()
            .returning(|_, _| Err(TokenError::network("node unreachable")));

        let submitter = MintSubmitter::new(
            Arc::new(identity),
            Arc::new(oracle),
            Arc::new(ledger),
            Arc::new(quiet_notifier()),
        );
        let result = submitter.submit(&request(), Network::Devnet).await;

        assert!(matches!(result, Err(TokenError::SubmissionFailed(_))));
    }
}
