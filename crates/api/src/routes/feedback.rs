//! Route definition for feedback submission.

use axum::routing::post;
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// Routes mounted at `/feedback`.
///
/// ```text
/// POST / -> create (anonymous allowed)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(feedback::create))
}
