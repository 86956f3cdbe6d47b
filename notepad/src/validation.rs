//! Submission rule shared by the add and edit forms.
use crate::errors::ValidationError;

/// Trim surrounding whitespace and reject text that ends up empty.
///
/// Inner line breaks are kept, so multi-line notes survive as typed.
pub fn normalize_submission(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(trimmed.to_owned())
}
