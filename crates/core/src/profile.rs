//! Profile field validation.

use crate::error::CoreError;

/// Maximum length for a bio.
pub const MAX_BIO_LENGTH: usize = 5_000;

/// Maximum number of skill tags on a profile.
pub const MAX_SKILLS: usize = 50;

/// Minimum password length at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validate an hourly rate: non-negative and finite when present.
pub fn validate_hourly_rate(rate: Option<f64>) -> Result<(), CoreError> {
    if let Some(rate) = rate {
        if !rate.is_finite() || rate < 0.0 {
            return Err(CoreError::Validation(format!(
                "Hourly rate must be non-negative, got {rate}"
            )));
        }
    }
    Ok(())
}

/// Validate years of experience: non-negative when present.
pub fn validate_experience_years(years: Option<i32>) -> Result<(), CoreError> {
    if let Some(years) = years {
        if years < 0 {
            return Err(CoreError::Validation(format!(
                "Experience years must be non-negative, got {years}"
            )));
        }
    }
    Ok(())
}

/// Validate a bio: bounded when present.
pub fn validate_bio(bio: Option<&str>) -> Result<(), CoreError> {
    if let Some(bio) = bio {
        if bio.len() > MAX_BIO_LENGTH {
            return Err(CoreError::Validation(format!(
                "Bio exceeds maximum length of {MAX_BIO_LENGTH} characters"
            )));
        }
    }
    Ok(())
}

/// Validate a skills list: bounded count, no blank tags.
pub fn validate_skills(skills: &[String]) -> Result<(), CoreError> {
    if skills.len() > MAX_SKILLS {
        return Err(CoreError::Validation(format!(
            "At most {MAX_SKILLS} skills are allowed"
        )));
    }
    if skills.iter().any(|s| s.trim().is_empty()) {
        return Err(CoreError::Validation(
            "Skill tags must not be blank".to_string(),
        ));
    }
    Ok(())
}

/// Minimal email shape check: something before and after a single '@'.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let trimmed = email.trim();
    let mut parts = trimmed.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || domain.contains('@') || !domain.contains('.') {
        return Err(CoreError::Validation(format!(
            "'{trimmed}' is not a valid email address"
        )));
    }
    Ok(())
}
