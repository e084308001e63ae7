//! Validation for free-text annotations attached to ledger entries.

use crate::error::CoreError;

/// Minimum annotation length after trimming.
pub const MIN_ANNOTATION_CHARS: usize = 3;

/// Validate annotation text, returning the trimmed form to store.
///
/// The text must be non-empty after trimming and at least
/// [`MIN_ANNOTATION_CHARS`] characters long.
pub fn validate_annotation_text(text: &str) -> Result<&str, CoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Annotation text must not be empty".to_string(),
        ));
    }
    if trimmed.chars().count() < MIN_ANNOTATION_CHARS {
        return Err(CoreError::Validation(format!(
            "Annotation text must be at least {MIN_ANNOTATION_CHARS} characters long"
        )));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims_valid_text() {
        assert_eq!(
            validate_annotation_text("  revisado pela auditoria  ").unwrap(),
            "revisado pela auditoria"
        );
    }

    #[test]
    fn rejects_empty_and_whitespace_only() {
        assert!(validate_annotation_text("").is_err());
        assert!(validate_annotation_text("   ").is_err());
    }

    #[test]
    fn rejects_too_short_after_trimming() {
        assert!(validate_annotation_text(" ok ").is_err());
    }

    #[test]
    fn length_is_counted_in_characters_not_bytes() {
        // Three accented characters are more than three bytes but must pass.
        assert!(validate_annotation_text("àçã").is_ok());
    }
}
