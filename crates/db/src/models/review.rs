//! Review entity models and DTOs.

use gladiator_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub professional_id: DbId,
    pub client_id: DbId,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A review joined with the authoring client's public info, for listing on
/// a professional's profile.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewWithClient {
    pub id: DbId,
    pub professional_id: DbId,
    pub client_id: DbId,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub client_full_name: Option<String>,
    pub client_avatar_url: Option<String>,
    pub client_company_name: Option<String>,
}

/// DTO for submitting a review. The author is the authenticated client.
#[derive(Debug, Deserialize)]
pub struct CreateReview {
    pub professional_id: DbId,
    /// Star rating 1..=5. Defaults to 0 (rejected by validation) so an
    /// omitted rating fails the same way as an explicit zero.
    #[serde(default)]
    pub rating: i32,
    pub comment: Option<String>,
}

/// DTO for editing an existing review.
#[derive(Debug, Deserialize)]
pub struct UpdateReview {
    #[serde(default)]
    pub rating: i32,
    pub comment: Option<String>,
}
