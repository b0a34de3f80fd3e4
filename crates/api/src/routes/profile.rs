//! Route definitions for the authenticated user's profile.

use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/profiles`.
///
/// ```text
/// GET /me -> get_me
/// PUT /me -> update_me
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/me", get(profile::get_me).put(profile::update_me))
}
