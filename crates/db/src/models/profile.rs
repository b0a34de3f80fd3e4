//! Profile entity models and DTOs.

use gladiator_core::directory;
use gladiator_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `profiles` table.
///
/// The password hash never leaves the server; it is excluded from
/// serialization so a profile can be returned from a handler as-is.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub user_type: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub age: Option<i32>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub category: Option<String>,
    pub experience_years: Option<i32>,
    pub hourly_rate: Option<f64>,
    pub location: Option<String>,
    pub company_name: Option<String>,
    pub company_description: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub wallet_address: Option<String>,
    pub accepts_crypto: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Profile> for directory::Professional {
    fn from(p: Profile) -> Self {
        directory::Professional {
            id: p.id,
            full_name: p.full_name,
            avatar_url: p.avatar_url,
            category: p.category,
            skills: p.skills,
            bio: p.bio,
            experience_years: p.experience_years,
            hourly_rate: p.hourly_rate,
            location: p.location,
            accepts_crypto: p.accepts_crypto,
            created_at: p.created_at,
        }
    }
}

/// Insert payload for a new profile (registration).
#[derive(Debug)]
pub struct CreateProfile {
    pub email: String,
    pub password_hash: String,
    pub user_type: String,
    pub full_name: Option<String>,
}

/// Patch DTO for profile updates. Absent fields are left unchanged; the
/// handler blanks out fields the caller's role may not touch.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfile {
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub age: Option<i32>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub category: Option<String>,
    pub experience_years: Option<i32>,
    pub hourly_rate: Option<f64>,
    pub location: Option<String>,
    pub company_name: Option<String>,
    pub company_description: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub wallet_address: Option<String>,
    pub accepts_crypto: Option<bool>,
}
