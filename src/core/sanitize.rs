//! Inbound value validation.
//!
//! Names and content addresses are checked here, at the request boundary,
//! before they reach the registry. The registry assumes its inputs are
//! safe to hand to the daemon as argv entries and to match against
//! key-list labels.

use crate::error::{Result, ValidationError};

/// Validate a registry name.
///
/// Names must be non-empty, ASCII alphanumeric plus `-`, `_`, `.`, and
/// must not start with a dash (argv option-injection guard).
///
/// # Errors
///
/// Returns `ValidationError` if the name is rejected.
pub fn name(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    if value.starts_with('-') {
        return Err(ValidationError::InvalidName {
            name: value.to_string(),
            reason: "cannot start with a dash".to_string(),
        }
        .into());
    }

    for (i, ch) in value.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && !matches!(ch, '-' | '_' | '.') {
            return Err(ValidationError::InvalidName {
                name: value.to_string(),
                reason: format!(
                    "invalid character {:?} at position {}. Only A-Z, a-z, 0-9, '-', '_', and '.' are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate a content address.
///
/// Same character set as names, plus `/` for daemon-path forms, and the
/// same leading-dash guard.
///
/// # Errors
///
/// Returns `ValidationError` if the address is rejected.
pub fn content(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::EmptyContent.into());
    }

    if value.starts_with('-') {
        return Err(ValidationError::InvalidContent {
            content: value.to_string(),
            reason: "cannot start with a dash".to_string(),
        }
        .into());
    }

    for (i, ch) in value.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && !matches!(ch, '-' | '_' | '.' | '/') {
            return Err(ValidationError::InvalidContent {
                content: value.to_string(),
                reason: format!(
                    "invalid character {:?} at position {}. Only A-Z, a-z, 0-9, '-', '_', '.', and '/' are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}
