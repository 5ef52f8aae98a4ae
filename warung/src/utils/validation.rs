//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! console prompts. Limits are chosen based on:
//! - 65-char receipt line width with a 32-char item name column
//! - Reasonable UX limits for names and free-text fields

use shared::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Catalog entry names (item name column is 32 chars; wider names are
/// truncated on the receipt, not rejected)
pub const MAX_NAME_LEN: usize = 60;

/// Category / subtype / spice-level tags
pub const MAX_TAG_LEN: usize = 30;

/// Discount conditions and other descriptions
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// Customer and table labels on an order
pub const MAX_LABEL_LEN: usize = 40;

// ── Validation helpers (console prompts) ────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_input(format!("{field} must not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(AppError::invalid_input(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.chars().count() > max_len
    {
        return Err(AppError::invalid_input(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.chars().count()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_rejects_blank() {
        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_required_text_enforces_length() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Coto Makassar", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_optional_text_allows_none() {
        assert!(validate_optional_text(&None, "note", MAX_DESCRIPTION_LEN).is_ok());
        let long = Some("x".repeat(MAX_DESCRIPTION_LEN + 1));
        assert!(validate_optional_text(&long, "note", MAX_DESCRIPTION_LEN).is_err());
    }
}
