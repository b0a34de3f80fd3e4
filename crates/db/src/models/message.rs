//! Message entity models and DTOs.

use gladiator_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Message {
    pub id: DbId,
    pub sender_id: DbId,
    pub recipient_id: DbId,
    pub subject: Option<String>,
    pub body: String,
    pub read: bool,
    pub created_at: Timestamp,
}

/// A message joined with both participants' public info, for the inbox
/// listing (grouping by counterpart happens client-side).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MessageWithProfiles {
    pub id: DbId,
    pub sender_id: DbId,
    pub recipient_id: DbId,
    pub subject: Option<String>,
    pub body: String,
    pub read: bool,
    pub created_at: Timestamp,
    pub sender_full_name: Option<String>,
    pub sender_avatar_url: Option<String>,
    pub sender_user_type: String,
    pub recipient_full_name: Option<String>,
    pub recipient_avatar_url: Option<String>,
    pub recipient_user_type: String,
}

/// DTO for sending a message. The sender is the authenticated user.
#[derive(Debug, Deserialize)]
pub struct CreateMessage {
    pub recipient_id: DbId,
    pub subject: Option<String>,
    pub body: String,
}
