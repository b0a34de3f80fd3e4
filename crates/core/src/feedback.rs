//! Feedback form constants and validation.

use crate::error::CoreError;

/// All valid feedback kinds.
pub const VALID_FEEDBACK_KINDS: &[&str] = &["bug", "feature", "improvement", "other"];

/// Status assigned to newly submitted feedback.
pub const FEEDBACK_STATUS_PENDING: &str = "pending";

/// Maximum length for a feedback title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for a feedback description.
pub const MAX_DESCRIPTION_LENGTH: usize = 5_000;

/// Validate a feedback kind string.
pub fn validate_kind(kind: &str) -> Result<(), CoreError> {
    if VALID_FEEDBACK_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid feedback kind '{kind}'. Must be one of: {}",
            VALID_FEEDBACK_KINDS.join(", ")
        )))
    }
}

/// Validate title and description: both required, non-empty, bounded.
pub fn validate_content(title: &str, description: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Feedback title must not be empty".to_string(),
        ));
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Feedback title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        )));
    }
    if description.trim().is_empty() {
        return Err(CoreError::Validation(
            "Feedback description must not be empty".to_string(),
        ));
    }
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Feedback description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters"
        )));
    }
    Ok(())
}
