//! Review rating constants and the aggregate summary contract.

use serde::Serialize;

use crate::error::CoreError;

/// Lowest accepted star rating.
pub const MIN_RATING: i32 = 1;

/// Highest accepted star rating.
pub const MAX_RATING: i32 = 5;

/// Validate that a rating is within the accepted 1..=5 range.
///
/// A missing rating arrives as 0 from form submissions and is rejected the
/// same way as any other out-of-range value.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}

/// A professional's aggregated rating.
///
/// `average_rating` is `None` in the zero-review state -- that state is not
/// an error, and consumers must not render a star average when
/// `review_count` is 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingSummary {
    pub average_rating: Option<f64>,
    pub review_count: i64,
}

impl RatingSummary {
    /// The zero-review state.
    pub fn empty() -> Self {
        Self {
            average_rating: None,
            review_count: 0,
        }
    }

    /// Average formatted to one decimal place, only when reviews exist.
    pub fn formatted_average(&self) -> Option<String> {
        if self.review_count == 0 {
            return None;
        }
        self.average_rating.map(|avg| format!("{avg:.1}"))
    }
}
