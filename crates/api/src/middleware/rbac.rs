//! Role enforcement extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose user type
//! does not meet the requirement. Use these in route handlers to enforce
//! authorization at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use gladiator_core::error::CoreError;
use gladiator_core::roles::{USER_TYPE_CLIENT, USER_TYPE_PROFESSIONAL};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `client` user type. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn clients_only(RequireClient(user): RequireClient) -> AppResult<Json<()>> {
///     // user is guaranteed to be a client here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireClient(pub AuthUser);

impl FromRequestParts<AppState> for RequireClient {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != USER_TYPE_CLIENT {
            return Err(AppError::Core(CoreError::Forbidden(
                "Only clients can perform this action".into(),
            )));
        }
        Ok(RequireClient(user))
    }
}

/// Requires the `professional` user type. Rejects with 403 Forbidden otherwise.
pub struct RequireProfessional(pub AuthUser);

impl FromRequestParts<AppState> for RequireProfessional {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != USER_TYPE_PROFESSIONAL {
            return Err(AppError::Core(CoreError::Forbidden(
                "Only professionals can perform this action".into(),
            )));
        }
        Ok(RequireProfessional(user))
    }
}
