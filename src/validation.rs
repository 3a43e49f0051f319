// Validation utilities module
// Custom validator functions for account fields

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

static MOBILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 \-]{3,18}$").expect("valid mobile regex"));

/// Validates a mobile number: digits with an optional leading '+',
/// spaces and dashes allowed as separators
pub fn validate_mobile(mobile: &str) -> Result<(), ValidationError> {
    if MOBILE_PATTERN.is_match(mobile) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_mobile"))
    }
}

/// Rejects values made only of whitespace
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("must_not_be_blank"))
    } else {
        Ok(())
    }
}
