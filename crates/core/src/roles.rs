//! Well-known user type constants.
//!
//! These must match the CHECK constraint on `profiles.user_type` in
//! `20260301000001_create_profiles.sql`.

use crate::error::CoreError;

pub const USER_TYPE_CLIENT: &str = "client";
pub const USER_TYPE_PROFESSIONAL: &str = "professional";

/// All valid user types.
pub const VALID_USER_TYPES: &[&str] = &[USER_TYPE_CLIENT, USER_TYPE_PROFESSIONAL];

/// Validate that a user type string is one of the accepted values.
pub fn validate_user_type(user_type: &str) -> Result<(), CoreError> {
    if VALID_USER_TYPES.contains(&user_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid user type '{user_type}'. Must be one of: {}",
            VALID_USER_TYPES.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_user_types_accepted() {
        assert!(validate_user_type(USER_TYPE_CLIENT).is_ok());
        assert!(validate_user_type(USER_TYPE_PROFESSIONAL).is_ok());
    }

    #[test]
    fn invalid_user_type_rejected() {
        assert!(validate_user_type("admin").is_err());
        assert!(validate_user_type("").is_err());
        assert!(validate_user_type("Client").is_err());
    }
}
