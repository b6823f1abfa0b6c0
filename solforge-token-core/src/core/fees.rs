//! Creation fee derivation
//!
//! The quote is a pure function of the two authority toggles. Callers derive
//! it on demand instead of caching it, so a displayed total can never lag
//! behind the flags that produced it.

use crate::domain::entities::FeeQuote;
use crate::shared::constants::{BASE_TOKEN_CREATION_FEE, FREEZE_AUTHORITY_FEE, MINT_AUTHORITY_FEE};

/// Compute the creation fee for the given authority toggles
pub fn compute_fee(enable_mint: bool, enable_freeze: bool) -> FeeQuote {
    let mint_authority_surcharge = if enable_mint { MINT_AUTHORITY_FEE } else { 0 };
    let freeze_authority_surcharge = if enable_freeze { FREEZE_AUTHORITY_FEE } else { 0 };

    FeeQuote {
        base_fee: BASE_TOKEN_CREATION_FEE,
        mint_authority_surcharge,
        freeze_authority_surcharge,
        total_fee: BASE_TOKEN_CREATION_FEE + mint_authority_surcharge + freeze_authority_surcharge,
    }
}
