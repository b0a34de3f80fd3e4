//! Route definitions for the `/messages` resource.
//!
//! All endpoints require authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::message;
use crate::state::AppState;

/// Routes mounted at `/messages`.
///
/// ```text
/// GET  /              -> list
/// POST /              -> send
/// GET  /unread-count  -> unread_count
/// POST /{id}/read     -> mark_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(message::list).post(message::send))
        .route("/unread-count", get(message::unread_count))
        .route("/{id}/read", post(message::mark_read))
}
