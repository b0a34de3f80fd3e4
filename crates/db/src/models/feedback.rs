//! Feedback entity models and DTOs.

use gladiator_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `feedback` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub kind: String,
    pub title: String,
    pub description: String,
    pub email: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for submitting feedback. Works anonymously; user_id is attached
/// from the token when one is presented.
#[derive(Debug, Deserialize)]
pub struct CreateFeedback {
    pub kind: String,
    pub title: String,
    pub description: String,
    pub email: Option<String>,
}
