//! Repository for the `feedback` table.

use gladiator_core::feedback::FEEDBACK_STATUS_PENDING;
use gladiator_core::types::DbId;
use sqlx::PgPool;

use crate::models::feedback::{CreateFeedback, Feedback};

/// Column list for `feedback` queries.
const COLUMNS: &str = "id, user_id, kind, title, description, email, status, created_at";

pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Store a feedback submission. `user_id` is `None` for anonymous
    /// submissions.
    pub async fn create(
        pool: &PgPool,
        user_id: Option<DbId>,
        input: &CreateFeedback,
    ) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (user_id, kind, title, description, email, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(user_id)
            .bind(&input.kind)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.email.as_deref())
            .bind(FEEDBACK_STATUS_PENDING)
            .fetch_one(pool)
            .await
    }
}
