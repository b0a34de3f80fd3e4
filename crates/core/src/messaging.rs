//! Message validation.

use crate::error::CoreError;

/// Maximum length for a message body.
pub const MAX_BODY_LENGTH: usize = 10_000;

/// Maximum length for a message subject.
pub const MAX_SUBJECT_LENGTH: usize = 200;

/// Validate a message body: required, non-empty after trimming, bounded.
pub fn validate_body(body: &str) -> Result<(), CoreError> {
    if body.trim().is_empty() {
        return Err(CoreError::Validation(
            "Message body must not be empty".to_string(),
        ));
    }
    if body.len() > MAX_BODY_LENGTH {
        return Err(CoreError::Validation(format!(
            "Message body exceeds maximum length of {MAX_BODY_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate an optional subject line.
pub fn validate_subject(subject: Option<&str>) -> Result<(), CoreError> {
    if let Some(subject) = subject {
        if subject.len() > MAX_SUBJECT_LENGTH {
            return Err(CoreError::Validation(format!(
                "Subject exceeds maximum length of {MAX_SUBJECT_LENGTH} characters"
            )));
        }
    }
    Ok(())
}
