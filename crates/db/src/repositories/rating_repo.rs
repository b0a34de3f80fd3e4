//! Read access to the `professional_ratings` aggregate.

use gladiator_core::types::DbId;
use sqlx::PgPool;

use crate::models::rating::ProfessionalRating;

pub struct RatingRepo;

impl RatingRepo {
    /// Fetch a professional's rating aggregate.
    ///
    /// `None` is the zero-review state and must not be treated as a
    /// lookup failure.
    pub async fn get(
        pool: &PgPool,
        professional_id: DbId,
    ) -> Result<Option<ProfessionalRating>, sqlx::Error> {
        sqlx::query_as::<_, ProfessionalRating>(
            "SELECT professional_id, average_rating, review_count \
             FROM professional_ratings \
             WHERE professional_id = $1",
        )
        .bind(professional_id)
        .fetch_optional(pool)
        .await
    }
}
