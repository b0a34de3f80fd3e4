//! Handlers for the `/messages` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gladiator_core::error::CoreError;
use gladiator_core::messaging::{validate_body, validate_subject};
use gladiator_core::types::DbId;
use gladiator_db::models::message::{CreateMessage, Message};
use gladiator_db::repositories::{MessageRepo, ProfileRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/messages
///
/// Send a message to another user. The body is required; the subject is
/// optional. Sends are never retried by the server -- a transport failure
/// surfaces to the caller instead of risking a duplicate send.
pub async fn send(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateMessage>,
) -> AppResult<Json<DataResponse<Message>>> {
    validate_body(&input.body)?;
    validate_subject(input.subject.as_deref())?;

    ProfileRepo::find_by_id(&state.pool, input.recipient_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: input.recipient_id,
        }))?;

    let message = MessageRepo::create(
        &state.pool,
        auth.user_id,
        input.recipient_id,
        input.subject.as_deref().map(str::trim),
        input.body.trim(),
    )
    .await?;

    tracing::info!(
        message_id = message.id,
        sender_id = auth.user_id,
        recipient_id = input.recipient_id,
        "message sent"
    );
    Ok(Json(DataResponse { data: message }))
}

/// GET /api/v1/messages
///
/// All messages the authenticated user sent or received, newest first.
/// Conversations are grouped by counterpart on the client side.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let messages = MessageRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(serde_json::json!({ "data": messages })))
}

/// GET /api/v1/messages/unread-count
///
/// Number of unread messages addressed to the authenticated user.
pub async fn unread_count(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let count = MessageRepo::unread_count(&state.pool, auth.user_id).await?;
    Ok(Json(serde_json::json!({ "data": { "count": count } })))
}

/// POST /api/v1/messages/{id}/read
///
/// Mark a received message as read. Returns 204 on success, or 404 when
/// the message is not an unread message addressed to the caller.
pub async fn mark_read(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(message_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = MessageRepo::mark_read(&state.pool, message_id, auth.user_id).await?;

    if !found {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Message",
            id: message_id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}
