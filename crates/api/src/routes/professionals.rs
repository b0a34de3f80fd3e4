//! Route definitions for the public professional directory.

use axum::routing::get;
use axum::Router;

use crate::handlers::directory;
use crate::state::AppState;

/// Routes mounted at `/professionals`.
///
/// ```text
/// GET /               -> search (directory with filters and sort)
/// GET /{id}           -> get_professional (profile + portfolio + rating)
/// GET /{id}/rating    -> get_rating
/// GET /{id}/reviews   -> list_reviews
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(directory::search))
        .route("/{id}", get(directory::get_professional))
        .route("/{id}/rating", get(directory::get_rating))
        .route("/{id}/reviews", get(directory::list_reviews))
}
