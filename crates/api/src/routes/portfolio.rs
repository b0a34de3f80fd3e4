//! Route definitions for portfolio management (professionals only).

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::portfolio;
use crate::state::AppState;

/// Routes mounted at `/portfolio`.
///
/// ```text
/// GET    /      -> list_own
/// POST   /      -> create
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(portfolio::list_own).post(portfolio::create))
        .route("/{id}", delete(portfolio::delete))
}
