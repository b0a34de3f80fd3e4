//! Repository for the `messages` table.

use gladiator_core::types::DbId;
use sqlx::PgPool;

use crate::models::message::{Message, MessageWithProfiles};

/// Column list for `messages` queries.
const COLUMNS: &str = "id, sender_id, recipient_id, subject, body, read, created_at";

/// Provides CRUD operations for messages.
pub struct MessageRepo;

impl MessageRepo {
    /// Send a message.
    pub async fn create(
        pool: &PgPool,
        sender_id: DbId,
        recipient_id: DbId,
        subject: Option<&str>,
        body: &str,
    ) -> Result<Message, sqlx::Error> {
        let query = format!(
            "INSERT INTO messages (sender_id, recipient_id, subject, body) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&query)
            .bind(sender_id)
            .bind(recipient_id)
            .bind(subject)
            .bind(body)
            .fetch_one(pool)
            .await
    }

    /// All messages sent or received by a user, newest first, with both
    /// participants' public info.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<MessageWithProfiles>, sqlx::Error> {
        sqlx::query_as::<_, MessageWithProfiles>(
            "SELECT \
                m.id, m.sender_id, m.recipient_id, m.subject, m.body, m.read, \
                m.created_at, \
                s.full_name AS sender_full_name, \
                s.avatar_url AS sender_avatar_url, \
                s.user_type AS sender_user_type, \
                r.full_name AS recipient_full_name, \
                r.avatar_url AS recipient_avatar_url, \
                r.user_type AS recipient_user_type \
             FROM messages m \
             JOIN profiles s ON s.id = m.sender_id \
             JOIN profiles r ON r.id = m.recipient_id \
             WHERE m.sender_id = $1 OR m.recipient_id = $1 \
             ORDER BY m.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Mark a message as read.
    ///
    /// Only the recipient may mark a message; returns `true` if an unread
    /// message addressed to `recipient_id` was updated.
    pub async fn mark_read(
        pool: &PgPool,
        message_id: DbId,
        recipient_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE messages SET read = true \
             WHERE id = $1 AND recipient_id = $2 AND read = false",
        )
        .bind(message_id)
        .bind(recipient_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of unread messages addressed to a user.
    pub async fn unread_count(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM messages WHERE recipient_id = $1 AND read = false",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }
}
