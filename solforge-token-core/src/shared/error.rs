//! Error handling for the token core
//!
//! This module defines the error types used throughout the token core.

use thiserror::Error;

/// Token core error type
#[derive(Error, Debug, Clone)]
pub enum TokenError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid supply: {0}")]
    InvalidSupply(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No wallet connected")]
    NoIdentity,

    #[error("Insufficient funds: {required} lamports required, {available} available")]
    InsufficientFunds { required: u64, available: u64 },

    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TokenError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Create an invalid supply error
    pub fn invalid_supply(message: impl Into<String>) -> Self {
        Self::InvalidSupply(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a submission error
    pub fn submission_failed(message: impl Into<String>) -> Self {
        Self::SubmissionFailed(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the user can recover by editing the form and retrying
    pub fn is_recoverable(&self) -> bool {
        // Every kind in the taxonomy is recoverable; nothing is fatal to the session
        true
    }
}

// Standard library and runtime error conversions
impl From<std::io::Error> for TokenError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        Self::network(format!("JSON error: {}", err))
    }
}

impl From<tokio::task::JoinError> for TokenError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("Task join error: {}", err))
    }
}

// Transport error conversions
impl From<reqwest::Error> for TokenError {
    fn from(err: reqwest::Error) -> Self {
        Self::network(format!("HTTP error: {}", err))
    }
}

// Ledger type conversions
impl From<solana_sdk::pubkey::ParsePubkeyError> for TokenError {
    fn from(err: solana_sdk::pubkey::ParsePubkeyError) -> Self {
        Self::config(format!("Invalid address: {}", err))
    }
}

impl From<solana_sdk::signer::SignerError> for TokenError {
    fn from(err: solana_sdk::signer::SignerError) -> Self {
        Self::submission_failed(format!("Signing error: {}", err))
    }
}

impl From<bs58::decode::Error> for TokenError {
    fn from(err: bs58::decode::Error) -> Self {
        Self::config(format!("Base58 decoding error: {}", err))
    }
}
