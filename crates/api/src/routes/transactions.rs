//! Route definitions for crypto payment intents.

use axum::routing::get;
use axum::Router;

use crate::handlers::transaction;
use crate::state::AppState;

/// Routes mounted at `/transactions`.
///
/// ```text
/// GET  / -> list (own intents)
/// POST / -> create (clients only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(transaction::list).post(transaction::create))
}
