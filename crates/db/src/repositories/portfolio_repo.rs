//! Repository for the `portfolio_items` table.

use std::collections::HashMap;

use gladiator_core::types::DbId;
use sqlx::PgPool;

use crate::models::portfolio::{CreatePortfolioItem, PortfolioItem};

/// Column list for `portfolio_items` queries.
const COLUMNS: &str =
    "id, user_id, title, description, image_url, project_url, tags, created_at";

/// Provides CRUD operations for portfolio items.
pub struct PortfolioRepo;

impl PortfolioRepo {
    /// Create a portfolio item for the owning professional.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreatePortfolioItem,
    ) -> Result<PortfolioItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO portfolio_items \
                (user_id, title, description, image_url, project_url, tags) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(input.description.as_deref())
            .bind(input.image_url.as_deref())
            .bind(input.project_url.as_deref())
            .bind(&input.tags)
            .fetch_one(pool)
            .await
    }

    /// List a professional's portfolio items, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<PortfolioItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM portfolio_items \
             WHERE user_id = $1 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a portfolio item owned by the given user.
    ///
    /// Returns `true` if the item existed and belonged to the user. The
    /// ownership check lives in the WHERE clause so it holds at the data
    /// boundary regardless of caller checks.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM portfolio_items WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Portfolio item counts for a set of professionals, one grouped query.
    /// Professionals with no items are absent from the map.
    pub async fn counts_for_users(
        pool: &PgPool,
        user_ids: &[DbId],
    ) -> Result<HashMap<DbId, i64>, sqlx::Error> {
        let rows: Vec<(DbId, i64)> = sqlx::query_as(
            "SELECT user_id, COUNT(*) FROM portfolio_items \
             WHERE user_id = ANY($1) \
             GROUP BY user_id",
        )
        .bind(user_ids)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().collect())
    }
}
