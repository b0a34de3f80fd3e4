//! Handler for feedback submission.

use axum::extract::State;
use axum::Json;
use gladiator_core::feedback::{validate_content, validate_kind};
use gladiator_db::models::feedback::{CreateFeedback, Feedback};
use gladiator_db::repositories::FeedbackRepo;

use crate::error::AppResult;
use crate::middleware::auth::OptionalAuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/feedback
///
/// Submit product feedback. Anonymous submissions are accepted; when a
/// valid token is presented the submission is attributed to the user.
pub async fn create(
    OptionalAuthUser(user): OptionalAuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateFeedback>,
) -> AppResult<Json<DataResponse<Feedback>>> {
    validate_kind(&input.kind)?;
    validate_content(&input.title, &input.description)?;

    let user_id = user.map(|u| u.user_id);
    let feedback = FeedbackRepo::create(&state.pool, user_id, &input).await?;

    tracing::info!(feedback_id = feedback.id, kind = %feedback.kind, "feedback submitted");
    Ok(Json(DataResponse { data: feedback }))
}
