//! Token creation wizard state machine
//!
//! Configure -> Review -> Submit -> Complete, with back transitions while no
//! submission is running. One wizard instance per session; the in-flight
//! guard is the sole mutual exclusion around submission.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use solana_sdk::pubkey::Pubkey;
use tokio::sync::RwLock;

use crate::core::fees::compute_fee;
use crate::core::submission::MintSubmitter;
use crate::core::validation::validate;
use crate::domain::entities::{FeeQuote, TokenCreationRequest};
use crate::domain::providers::NotificationSink;
use crate::shared::error::TokenError;
use crate::shared::types::{Network, NoticeLevel, TokenResult, WizardStep};

struct WizardState {
    step: WizardStep,
    request: TokenCreationRequest,
    network: Network,
    mint_address: Option<Pubkey>,
}

/// Drives one token creation session
pub struct TokenCreationWizard {
    state: Arc<RwLock<WizardState>>,
    in_flight: Arc<AtomicBool>,
    submitter: MintSubmitter,
    notifier: Arc<dyn NotificationSink>,
}

/// Clears the in-flight flag on every exit path, including panics
struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

impl TokenCreationWizard {
    pub fn new(
        network: Network,
        submitter: MintSubmitter,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            state: Arc::new(RwLock::new(WizardState {
                step: WizardStep::Configure,
                request: TokenCreationRequest::default(),
                network,
                mint_address: None,
            })),
            in_flight: Arc::new(AtomicBool::new(false)),
            submitter,
            notifier,
        }
    }

    pub async fn step(&self) -> WizardStep {
        self.state.read().await.step
    }

    pub async fn network(&self) -> Network {
        self.state.read().await.network
    }

    pub async fn request(&self) -> TokenCreationRequest {
        self.state.read().await.request.clone()
    }

    pub async fn mint_address(&self) -> Option<Pubkey> {
        self.state.read().await.mint_address
    }

    pub fn submission_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Current fee quote, derived from the live authority toggles
    pub async fn fee_quote(&self) -> FeeQuote {
        let state = self.state.read().await;
        compute_fee(state.request.enable_mint, state.request.enable_freeze)
    }

    /// Replace the form contents; only meaningful on the Configure step
    pub async fn update_request(&self, request: TokenCreationRequest) -> TokenResult<()> {
        let mut state = self.state.write().await;
        if state.step != WizardStep::Configure {
            return Err(TokenError::validation(
                "token parameters can only be edited on the configure step",
            ));
        }
        state.request = request;
        Ok(())
    }

    pub async fn set_mint_authority(&self, enabled: bool) -> TokenResult<()> {
        self.set_toggle(|request| request.enable_mint = enabled).await
    }

    pub async fn set_freeze_authority(&self, enabled: bool) -> TokenResult<()> {
        self.set_toggle(|request| request.enable_freeze = enabled)
            .await
    }

    async fn set_toggle(
        &self,
        apply: impl FnOnce(&mut TokenCreationRequest),
    ) -> TokenResult<()> {
        let mut state = self.state.write().await;
        if state.step != WizardStep::Configure {
            return Err(TokenError::validation(
                "authority toggles can only be changed on the configure step",
            ));
        }
        apply(&mut state.request);
        Ok(())
    }

    /// Switch the target network; inert once complete or while submitting
    pub async fn set_network(&self, network: Network) {
        if self.submission_in_flight() {
            log::debug!("ignoring network change while a submission is in flight");
            return;
        }
        let mut state = self.state.write().await;
        if state.step == WizardStep::Complete {
            log::debug!("ignoring network change after completion");
            return;
        }
        state.network = network;
    }

    /// Advance one step after validating the current one
    pub async fn next(&self) -> TokenResult<WizardStep> {
        let mut state = self.state.write().await;
        let advanced = match state.step {
            WizardStep::Configure => {
                if let Err(err) = validate(WizardStep::Configure, &state.request) {
                    self.notifier.notify(NoticeLevel::Error, &err.to_string());
                    return Err(err);
                }
                WizardStep::Review
            }
            WizardStep::Review => WizardStep::Submit,
            WizardStep::Submit => {
                return Err(TokenError::validation(
                    "submission must finish before advancing",
                ))
            }
            WizardStep::Complete => {
                return Err(TokenError::validation("the wizard is already complete"))
            }
        };
        state.step = advanced;
        log::debug!("wizard advanced to {:?}", advanced);
        Ok(advanced)
    }

    /// Step backward; rejected once complete and while a submission runs
    pub async fn back(&self) -> TokenResult<WizardStep> {
        let mut state = self.state.write().await;
        let moved = match state.step {
            WizardStep::Configure => {
                return Err(TokenError::validation("already on the first step"))
            }
            WizardStep::Review => WizardStep::Configure,
            WizardStep::Submit => {
                if self.submission_in_flight() {
                    return Err(TokenError::validation(
                        "cannot go back while a submission is in flight",
                    ));
                }
                WizardStep::Review
            }
            WizardStep::Complete => {
                return Err(TokenError::validation("the wizard is already complete"))
            }
        };
        state.step = moved;
        Ok(moved)
    }

    /// Run the submission; a second call while one is running is a no-op
    pub async fn submit(&self) -> TokenResult<Option<Pubkey>> {
        {
            let state = self.state.read().await;
            if state.step != WizardStep::Submit {
                return Err(TokenError::validation(
                    "confirm the review step before submitting",
                ));
            }
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            log::debug!("ignoring submit: a submission is already in flight");
            return Ok(None);
        }
        let _guard = InFlightGuard {
            flag: Arc::clone(&self.in_flight),
        };

        let (request, network) = {
            let state = self.state.read().await;
            (state.request.clone(), state.network)
        };

        let mint = self.submitter.submit(&request, network).await?;

        let mut state = self.state.write().await;
        state.mint_address = Some(mint);
        state.step = WizardStep::Complete;
        log::info!("token creation complete, mint {}", mint);
        Ok(Some(mint))
    }
}
