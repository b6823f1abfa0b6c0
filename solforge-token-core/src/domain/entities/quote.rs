//! Fee quote value object

use serde::{Deserialize, Serialize};
use solana_sdk::native_token::LAMPORTS_PER_SOL;

use crate::shared::types::Lamports;

/// Breakdown of the token creation fee, denominated in lamports
///
/// A quote is always derived from the current authority toggles; it is never
/// stored on the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeQuote {
    pub base_fee: Lamports,
    pub mint_authority_surcharge: Lamports,
    pub freeze_authority_surcharge: Lamports,
    pub total_fee: Lamports,
}

impl FeeQuote {
    /// Total fee expressed in SOL for display
    pub fn total_sol(&self) -> f64 {
        self.total_fee as f64 / LAMPORTS_PER_SOL as f64
    }
}

impl std::fmt::Display for FeeQuote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} SOL", self.total_sol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_sol_display() {
        let quote = FeeQuote {
            base_fee: 100_000_000,
            mint_authority_surcharge: 50_000_000,
            freeze_authority_surcharge: 0,
            total_fee: 150_000_000,
        };

        assert!((quote.total_sol() - 0.15).abs() < f64::EPSILON);
        assert_eq!(format!("{}", quote), "0.15 SOL");
    }
}
