//! Route definitions for the review lifecycle (clients only).

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::review;
use crate::state::AppState;

/// Routes mounted at `/reviews`.
///
/// ```text
/// POST   /      -> create
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(review::create))
        .route("/{id}", put(review::update).delete(review::delete))
}
