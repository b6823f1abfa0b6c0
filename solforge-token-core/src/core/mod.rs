//! Core workflow functionality
//!
//! This module contains the token creation workflow: fee derivation, step
//! validation, the wizard state machine, and mint submission.

pub mod fees;
pub mod submission;
pub mod validation;
pub mod wizard;

pub use fees::compute_fee;
pub use submission::MintSubmitter;
pub use wizard::TokenCreationWizard;
