//! Per-step validation of the creation request
//!
//! Only the Configure step carries field rules; Review is a read-only
//! display and submission preconditions (identity, balance) are checked at
//! call time by the submitter.

use crate::domain::entities::TokenCreationRequest;
use crate::shared::constants::{TOKEN_NAME_MAX_LENGTH, TOKEN_SYMBOL_MAX_LENGTH};
use crate::shared::error::TokenError;
use crate::shared::types::{TokenResult, WizardStep};

/// Validate a request for advancing past the given step
pub fn validate(step: WizardStep, request: &TokenCreationRequest) -> TokenResult<()> {
    match step {
        WizardStep::Configure => validate_configure(request),
        WizardStep::Review | WizardStep::Submit | WizardStep::Complete => Ok(()),
    }
}

fn validate_configure(request: &TokenCreationRequest) -> TokenResult<()> {
    if request.name.trim().is_empty() {
        return Err(TokenError::missing_field("name"));
    }
    if request.symbol.trim().is_empty() {
        return Err(TokenError::missing_field("symbol"));
    }
    let supply = match request.total_supply {
        None => return Err(TokenError::missing_field("total supply")),
        Some(supply) => supply,
    };
    if supply == 0 {
        return Err(TokenError::invalid_supply(
            "total supply must be greater than zero",
        ));
    }
    if request.name.len() > TOKEN_NAME_MAX_LENGTH {
        return Err(TokenError::validation(format!(
            "name exceeds {} characters",
            TOKEN_NAME_MAX_LENGTH
        )));
    }
    if request.symbol.len() > TOKEN_SYMBOL_MAX_LENGTH {
        return Err(TokenError::validation(format!(
            "symbol exceeds {} characters",
            TOKEN_SYMBOL_MAX_LENGTH
        )));
    }
    // Reject a supply that cannot be expressed in native units up front
    // instead of at submission time
    request.scaled_supply()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> TokenCreationRequest {
        TokenCreationRequest::new("Test", "TST", 1_000_000)
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate(WizardStep::Configure, &valid_request()).is_ok());
    }

    #[test]
    fn test_missing_name() {
        let mut request = valid_request();
        request.name = "   ".to_string();

        assert!(matches!(
            validate(WizardStep::Configure, &request),
            Err(TokenError::MissingField(field)) if field == "name"
        ));
    }

    #[test]
    fn test_missing_symbol() {
        let mut request = valid_request();
        request.symbol.clear();

        assert!(matches!(
            validate(WizardStep::Configure, &request),
            Err(TokenError::MissingField(field)) if field == "symbol"
        ));
    }

    #[test]
    fn test_missing_supply() {
        let mut request = valid_request();
        request.total_supply = None;

        assert!(matches!(
            validate(WizardStep::Configure, &request),
            Err(TokenError::MissingField(_))
        ));
    }

    #[test]
    fn test_zero_supply() {
        let mut request = valid_request();
        request.total_supply = Some(0);

        assert!(matches!(
            validate(WizardStep::Configure, &request),
            Err(TokenError::InvalidSupply(_))
        ));
    }

    #[test]
    fn test_overlong_symbol() {
        let mut request = valid_request();
        request.symbol = "TOOLONGSYMBOL".to_string();

        assert!(matches!(
            validate(WizardStep::Configure, &request),
            Err(TokenError::Validation(_))
        ));
    }

    #[test]
    fn test_supply_overflow_rejected_at_configure() {
        let mut request = valid_request();
        request.total_supply = Some(u64::MAX);

        assert!(matches!(
            validate(WizardStep::Configure, &request),
            Err(TokenError::InvalidSupply(_))
        ));
    }

    #[test]
    fn test_review_has_no_extra_rules() {
        // Review re-displays fields; even an empty request passes
        assert!(validate(WizardStep::Review, &TokenCreationRequest::default()).is_ok());
    }
}
