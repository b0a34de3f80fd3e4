//! Handlers for the professional directory.

use axum::extract::{Path, Query, State};
use axum::Json;
use gladiator_core::directory::{active_filter_count, search_directory, SearchCriteria};
use gladiator_core::error::CoreError;
use gladiator_core::rating::RatingSummary;
use gladiator_core::roles::USER_TYPE_PROFESSIONAL;
use gladiator_core::types::DbId;
use gladiator_db::directory::PgDirectory;
use gladiator_db::models::profile::Profile;
use gladiator_db::repositories::{PortfolioRepo, ProfileRepo, RatingRepo, ReviewRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/professionals
///
/// Search the directory. All criteria are optional query parameters:
/// `category`, `query`, `min_price`, `max_price`, `min_experience`,
/// `has_portfolio`, `sort_by`. The response meta carries the number of
/// non-default criteria for the UI filter badge.
pub async fn search(
    State(state): State<AppState>,
    Query(criteria): Query<SearchCriteria>,
) -> AppResult<Json<serde_json::Value>> {
    let source = PgDirectory::new(state.pool.clone());
    let results = search_directory(&source, &criteria).await?;
    let count = results.len();

    Ok(Json(serde_json::json!({
        "data": results,
        "meta": {
            "count": count,
            "active_filters": active_filter_count(&criteria),
        }
    })))
}

/// GET /api/v1/professionals/{id}
///
/// A professional's public profile with portfolio and rating summary.
pub async fn get_professional(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let profile = find_professional(&state, id).await?;
    let portfolio = PortfolioRepo::list_for_user(&state.pool, id).await?;
    let rating = rating_summary(&state, id).await?;

    let professional: gladiator_core::directory::Professional = profile.into();
    Ok(Json(serde_json::json!({
        "data": {
            "professional": professional,
            "portfolio": portfolio,
            "rating": rating,
        }
    })))
}

/// GET /api/v1/professionals/{id}/rating
///
/// Rating summary only. A professional with zero reviews yields
/// `{ average_rating: null, review_count: 0 }`.
pub async fn get_rating(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<RatingSummary>>> {
    find_professional(&state, id).await?;
    let rating = rating_summary(&state, id).await?;
    Ok(Json(DataResponse { data: rating }))
}

/// GET /api/v1/professionals/{id}/reviews
///
/// A professional's reviews, newest first, with author info.
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    find_professional(&state, id).await?;
    let reviews = ReviewRepo::list_for_professional(&state.pool, id).await?;
    Ok(Json(serde_json::json!({ "data": reviews })))
}

/// Fetch a profile and require it to be a professional.
async fn find_professional(state: &AppState, id: DbId) -> AppResult<Profile> {
    let profile = ProfileRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|p| p.user_type == USER_TYPE_PROFESSIONAL)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Professional",
            id,
        }))?;
    Ok(profile)
}

/// Read the rating aggregate, treating an absent row as the zero-review
/// state rather than an error.
async fn rating_summary(state: &AppState, id: DbId) -> AppResult<RatingSummary> {
    let summary = match RatingRepo::get(&state.pool, id).await? {
        Some(row) => RatingSummary {
            average_rating: Some(row.average_rating),
            review_count: row.review_count,
        },
        None => RatingSummary::empty(),
    };
    Ok(summary)
}
