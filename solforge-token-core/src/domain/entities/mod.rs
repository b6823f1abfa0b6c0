//! Domain entities for the token creation workflow

pub mod quote;
pub mod request;

pub use quote::FeeQuote;
pub use request::TokenCreationRequest;
