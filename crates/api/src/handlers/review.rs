//! Handlers for the review lifecycle.
//!
//! Submission requires the client role; editing and deletion require
//! authorship. Authorship is pre-checked here to distinguish 404 from 403,
//! and enforced again inside the repository's WHERE clauses so the data
//! boundary holds regardless of handler checks.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gladiator_core::error::CoreError;
use gladiator_core::rating::validate_rating;
use gladiator_core::roles::USER_TYPE_PROFESSIONAL;
use gladiator_core::types::DbId;
use gladiator_db::models::review::{CreateReview, Review, UpdateReview};
use gladiator_db::repositories::{ProfileRepo, ReviewRepo};

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::middleware::rbac::RequireClient;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/reviews
///
/// Submit a review for a professional. A second review for the same
/// (professional, client) pair is rejected with 409; the stored review is
/// left untouched.
pub async fn create(
    RequireClient(user): RequireClient,
    State(state): State<AppState>,
    Json(input): Json<CreateReview>,
) -> AppResult<Json<DataResponse<Review>>> {
    validate_rating(input.rating)?;

    let professional = ProfileRepo::find_by_id(&state.pool, input.professional_id)
        .await?
        .filter(|p| p.user_type == USER_TYPE_PROFESSIONAL)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Professional",
            id: input.professional_id,
        }))?;

    let review = ReviewRepo::create(
        &state.pool,
        professional.id,
        user.user_id,
        input.rating,
        input.comment.as_deref(),
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e, "uq_reviews_professional_client") {
            AppError::Core(CoreError::Conflict(
                "You have already reviewed this professional".into(),
            ))
        } else {
            AppError::Database(e)
        }
    })?;

    tracing::info!(
        review_id = review.id,
        professional_id = professional.id,
        client_id = user.user_id,
        rating = review.rating,
        "review submitted"
    );
    Ok(Json(DataResponse { data: review }))
}

/// PUT /api/v1/reviews/{id}
///
/// Edit a review's rating/comment. Only the original author may edit.
pub async fn update(
    RequireClient(user): RequireClient,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReview>,
) -> AppResult<Json<DataResponse<Review>>> {
    validate_rating(input.rating)?;
    require_author(&state, id, user.user_id).await?;

    let review = ReviewRepo::update(&state.pool, id, user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id,
        }))?;

    Ok(Json(DataResponse { data: review }))
}

/// DELETE /api/v1/reviews/{id}
///
/// Delete a review. Only the original author may delete; the professional's
/// rating aggregate is recomputed in the same transaction.
pub async fn delete(
    RequireClient(user): RequireClient,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    require_author(&state, id, user.user_id).await?;

    let deleted = ReviewRepo::delete(&state.pool, id, user.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id,
        }));
    }

    tracing::info!(review_id = id, client_id = user.user_id, "review deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// 404 when the review does not exist, 403 when it belongs to someone else.
async fn require_author(state: &AppState, review_id: DbId, client_id: DbId) -> AppResult<()> {
    let review = ReviewRepo::find_by_id(&state.pool, review_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id: review_id,
        }))?;

    if review.client_id != client_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the review author can modify this review".into(),
        )));
    }
    Ok(())
}
