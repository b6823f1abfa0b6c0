//! Shared types, constants, and error handling
//!
//! Common building blocks used by every layer of the token core.

pub mod constants;
pub mod error;
pub mod types;

// Re-export shared components
pub use error::TokenError;
pub use types::{Lamports, MintAddress, Network, NoticeLevel, TokenResult, WizardStep};
