//! Service category constants and helpers.
//!
//! Categories are a fixed enumeration stored on professional profiles and
//! used by the directory filter. `CATEGORY_ALL` is a filter sentinel only;
//! it is never a stored value.

use crate::error::CoreError;

/// Sentinel category that bypasses the category filter.
pub const CATEGORY_ALL: &str = "all";

/// Valid stored categories for a professional profile.
pub const VALID_CATEGORIES: &[&str] = &[
    "it",
    "marketing",
    "design",
    "writing",
    "video",
    "support",
    "finance",
    "consulting",
];

/// Check whether a category is a valid stored value.
pub fn is_valid_category(category: &str) -> bool {
    VALID_CATEGORIES.contains(&category)
}

/// Validate a category for storage on a profile.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if is_valid_category(category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid category '{category}'. Must be one of: {}",
            VALID_CATEGORIES.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_valid() {
        assert!(is_valid_category("it"));
        assert!(is_valid_category("design"));
        assert!(is_valid_category("consulting"));
    }

    #[test]
    fn sentinel_is_not_a_stored_category() {
        assert!(!is_valid_category(CATEGORY_ALL));
        assert!(validate_category(CATEGORY_ALL).is_err());
    }

    #[test]
    fn unknown_category_rejected() {
        assert!(!is_valid_category("plumbing"));
        assert!(!is_valid_category(""));
        assert!(!is_valid_category("IT"));
    }
}
