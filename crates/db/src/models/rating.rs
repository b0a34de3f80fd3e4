//! Derived rating aggregate model.

use gladiator_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `professional_ratings` table.
///
/// Absence of a row is the zero-review state, not an error.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProfessionalRating {
    pub professional_id: DbId,
    pub average_rating: f64,
    pub review_count: i64,
}
