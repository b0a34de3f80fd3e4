//! Handlers for the authenticated professional's portfolio.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use gladiator_core::error::CoreError;
use gladiator_core::types::DbId;
use gladiator_db::models::portfolio::{CreatePortfolioItem, PortfolioItem};
use gladiator_db::repositories::PortfolioRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireProfessional;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/portfolio
///
/// The authenticated professional's portfolio items, newest first.
pub async fn list_own(
    RequireProfessional(user): RequireProfessional,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PortfolioItem>>>> {
    let items = PortfolioRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/portfolio
///
/// Add a portfolio item. Title is required and must be non-empty; the
/// image URL, if any, points at already-uploaded blob storage.
pub async fn create(
    RequireProfessional(user): RequireProfessional,
    State(state): State<AppState>,
    Json(input): Json<CreatePortfolioItem>,
) -> AppResult<Json<DataResponse<PortfolioItem>>> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Portfolio item title must not be empty".into(),
        )));
    }
    if input.tags.iter().any(|t| t.trim().is_empty()) {
        return Err(AppError::Core(CoreError::Validation(
            "Portfolio tags must not be blank".into(),
        )));
    }

    let item = PortfolioRepo::create(&state.pool, user.user_id, &input).await?;

    tracing::info!(user_id = user.user_id, item_id = item.id, "portfolio item created");
    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/portfolio/{id}
///
/// Remove a portfolio item. The ownership check is part of the delete
/// statement, so another professional's item simply is not found.
pub async fn delete(
    RequireProfessional(user): RequireProfessional,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PortfolioRepo::delete(&state.pool, id, user.user_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "PortfolioItem",
            id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}
