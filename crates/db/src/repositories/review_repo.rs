//! Repository for the `reviews` table and its derived rating aggregate.
//!
//! Every write recomputes the `professional_ratings` row inside the same
//! transaction, so the aggregate never drifts from the reviews it
//! summarizes. Duplicate (professional, client) inserts surface as a
//! database unique violation on `uq_reviews_professional_client`.

use gladiator_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::review::{Review, ReviewWithClient, UpdateReview};

/// Column list for `reviews` queries.
const COLUMNS: &str =
    "id, professional_id, client_id, rating, comment, created_at, updated_at";

/// Provides CRUD operations for reviews and their aggregate.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review and refresh the professional's aggregate.
    ///
    /// A second review for the same (professional, client) pair fails with
    /// a unique-constraint violation before the aggregate is touched.
    pub async fn create(
        pool: &PgPool,
        professional_id: DbId,
        client_id: DbId,
        rating: i32,
        comment: Option<&str>,
    ) -> Result<Review, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO reviews (professional_id, client_id, rating, comment) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let review = sqlx::query_as::<_, Review>(&query)
            .bind(professional_id)
            .bind(client_id)
            .bind(rating)
            .bind(comment)
            .fetch_one(&mut *tx)
            .await?;

        Self::recompute_aggregate(&mut tx, professional_id).await?;
        tx.commit().await?;
        Ok(review)
    }

    /// Find a review by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a professional's reviews, newest first, with each author's
    /// public info.
    pub async fn list_for_professional(
        pool: &PgPool,
        professional_id: DbId,
    ) -> Result<Vec<ReviewWithClient>, sqlx::Error> {
        sqlx::query_as::<_, ReviewWithClient>(
            "SELECT \
                r.id, r.professional_id, r.client_id, r.rating, r.comment, \
                r.created_at, r.updated_at, \
                c.full_name AS client_full_name, \
                c.avatar_url AS client_avatar_url, \
                c.company_name AS client_company_name \
             FROM reviews r \
             JOIN profiles c ON c.id = r.client_id \
             WHERE r.professional_id = $1 \
             ORDER BY r.created_at DESC",
        )
        .bind(professional_id)
        .fetch_all(pool)
        .await
    }

    /// Update a review's rating/comment and refresh the aggregate.
    ///
    /// The author id is part of the WHERE clause; a non-author caller gets
    /// `None` back and nothing changes.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        client_id: DbId,
        input: &UpdateReview,
    ) -> Result<Option<Review>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE reviews \
             SET rating = $3, comment = $4, updated_at = NOW() \
             WHERE id = $1 AND client_id = $2 \
             RETURNING {COLUMNS}"
        );
        let review = sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .bind(client_id)
            .bind(input.rating)
            .bind(input.comment.as_deref())
            .fetch_optional(&mut *tx)
            .await?;

        let Some(review) = review else {
            tx.rollback().await?;
            return Ok(None);
        };

        Self::recompute_aggregate(&mut tx, review.professional_id).await?;
        tx.commit().await?;
        Ok(Some(review))
    }

    /// Delete a review and refresh the aggregate. Returns `true` if a row
    /// authored by `client_id` was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, client_id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let professional_id: Option<DbId> = sqlx::query_scalar(
            "DELETE FROM reviews WHERE id = $1 AND client_id = $2 RETURNING professional_id",
        )
        .bind(id)
        .bind(client_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(professional_id) = professional_id else {
            tx.rollback().await?;
            return Ok(false);
        };

        Self::recompute_aggregate(&mut tx, professional_id).await?;
        tx.commit().await?;
        Ok(true)
    }

    /// Recompute the `professional_ratings` row from the current reviews.
    /// Zero reviews deletes the row (absence = zero-review state).
    async fn recompute_aggregate(
        tx: &mut Transaction<'_, Postgres>,
        professional_id: DbId,
    ) -> Result<(), sqlx::Error> {
        let (average, count): (Option<f64>, i64) = sqlx::query_as(
            "SELECT AVG(rating)::float8, COUNT(*) FROM reviews WHERE professional_id = $1",
        )
        .bind(professional_id)
        .fetch_one(&mut **tx)
        .await?;

        match average {
            Some(average) if count > 0 => {
                sqlx::query(
                    "INSERT INTO professional_ratings \
                        (professional_id, average_rating, review_count) \
                     VALUES ($1, $2, $3) \
                     ON CONFLICT (professional_id) DO UPDATE SET \
                        average_rating = EXCLUDED.average_rating, \
                        review_count = EXCLUDED.review_count",
                )
                .bind(professional_id)
                .bind(average)
                .bind(count)
                .execute(&mut **tx)
                .await?;
            }
            _ => {
                sqlx::query("DELETE FROM professional_ratings WHERE professional_id = $1")
                    .bind(professional_id)
                    .execute(&mut **tx)
                    .await?;
            }
        }

        tracing::debug!(professional_id, review_count = count, "rating aggregate recomputed");
        Ok(())
    }
}
