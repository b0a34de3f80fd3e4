pub mod auth;
pub mod feedback;
pub mod health;
pub mod messages;
pub mod portfolio;
pub mod professionals;
pub mod profile;
pub mod reviews;
pub mod transactions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                      register (public)
/// /auth/login                         login (public)
/// /auth/refresh                       refresh (public)
/// /auth/logout                        logout (requires auth)
///
/// /professionals                      directory search (?category, query,
///                                     min_price, max_price, min_experience,
///                                     has_portfolio, sort_by)
/// /professionals/{id}                 profile + portfolio + rating
/// /professionals/{id}/rating          rating summary
/// /professionals/{id}/reviews         reviews with author info
///
/// /profiles/me                        get, update own profile
///
/// /portfolio                          list, create (professionals only)
/// /portfolio/{id}                     delete
///
/// /reviews                            submit (clients only)
/// /reviews/{id}                       update, delete (author only)
///
/// /messages                           list, send
/// /messages/unread-count              unread count
/// /messages/{id}/read                 mark read (recipient only)
///
/// /transactions                       list own, create intent (clients only)
///
/// /feedback                           submit (anonymous allowed)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login, refresh, logout).
        .nest("/auth", auth::router())
        // Public professional directory.
        .nest("/professionals", professionals::router())
        // Own-profile management.
        .nest("/profiles", profile::router())
        // Portfolio management.
        .nest("/portfolio", portfolio::router())
        // Review lifecycle.
        .nest("/reviews", reviews::router())
        // Messaging.
        .nest("/messages", messages::router())
        // Crypto payment intents.
        .nest("/transactions", transactions::router())
        // Product feedback.
        .nest("/feedback", feedback::router())
}
