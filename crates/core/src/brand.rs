//! Brand intake constants and validation.
//!
//! Creation payloads are validated here before the repository layer is
//! invoked, so a rejected payload never reaches the database.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of an account name.
pub const MAX_ACCOUNT_NAME_LENGTH: usize = 200;

/// Maximum length of an account email address (RFC 5321 path limit).
pub const MAX_EMAIL_LENGTH: usize = 320;

/// Maximum length of a brand description.
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Maximum length of a sales phase label.
pub const MAX_SALES_PHASE_LENGTH: usize = 100;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate an account name: must be non-empty after trimming and within
/// the maximum length limit.
pub fn validate_account_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Account name must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_ACCOUNT_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Account name exceeds maximum length of {MAX_ACCOUNT_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate an account email: must contain exactly one `@` with non-empty
/// local and domain parts, no whitespace, and fit the length limit.
pub fn validate_account_email(email: &str) -> Result<(), CoreError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Account email must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_EMAIL_LENGTH {
        return Err(CoreError::Validation(format!(
            "Account email exceeds maximum length of {MAX_EMAIL_LENGTH} characters"
        )));
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation(
            "Account email must not contain whitespace".to_string(),
        ));
    }
    let mut parts = trimmed.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(CoreError::Validation(format!(
            "'{trimmed}' is not a valid email address"
        ))),
    }
}

/// Validate an optional brand description against the length limit.
pub fn validate_brand_description(description: &str) -> Result<(), CoreError> {
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Brand description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a sales phase label against the length limit.
pub fn validate_sales_phase(sales_phase: &str) -> Result<(), CoreError> {
    if sales_phase.len() > MAX_SALES_PHASE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Sales phase exceeds maximum length of {MAX_SALES_PHASE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a brand budget: must be non-negative.
pub fn validate_brand_budget(budget: i64) -> Result<(), CoreError> {
    if budget < 0 {
        return Err(CoreError::Validation(
            "Brand budget must not be negative".to_string(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
