//! Handlers for the authenticated user's own profile.

use axum::extract::State;
use axum::Json;
use gladiator_core::categories::validate_category;
use gladiator_core::error::CoreError;
use gladiator_core::profile::{
    validate_bio, validate_experience_years, validate_hourly_rate, validate_skills,
};
use gladiator_core::roles::USER_TYPE_PROFESSIONAL;
use gladiator_db::models::profile::{Profile, UpdateProfile};
use gladiator_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/profiles/me
///
/// The authenticated user's full profile (password hash excluded by
/// serialization).
pub async fn get_me(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Profile>>> {
    let profile = ProfileRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: auth.user_id,
        }))?;
    Ok(Json(DataResponse { data: profile }))
}

/// PUT /api/v1/profiles/me
///
/// Patch the authenticated user's profile. The updatable field set depends
/// on the user type: professionals edit their service listing, clients
/// their company details. Fields outside the caller's set are dropped
/// before the update reaches the database.
pub async fn update_me(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<DataResponse<Profile>>> {
    let update = sanitize_for_role(input, &auth.role)?;

    let profile = ProfileRepo::update(&state.pool, auth.user_id, &update)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: auth.user_id,
        }))?;

    tracing::info!(user_id = auth.user_id, "profile updated");
    Ok(Json(DataResponse { data: profile }))
}

/// Validate the patch and strip fields the caller's role may not touch.
fn sanitize_for_role(input: UpdateProfile, role: &str) -> Result<UpdateProfile, AppError> {
    let mut update = UpdateProfile {
        full_name: input.full_name,
        avatar_url: input.avatar_url,
        ..Default::default()
    };

    if role == USER_TYPE_PROFESSIONAL {
        validate_hourly_rate(input.hourly_rate)?;
        validate_experience_years(input.experience_years)?;
        validate_bio(input.bio.as_deref())?;
        if let Some(category) = &input.category {
            validate_category(category)?;
        }
        if let Some(skills) = &input.skills {
            validate_skills(skills)?;
        }

        update.age = input.age;
        update.bio = input.bio;
        update.skills = input.skills;
        update.category = input.category;
        update.experience_years = input.experience_years;
        update.hourly_rate = input.hourly_rate;
        update.location = input.location;
        update.wallet_address = input.wallet_address;
        update.accepts_crypto = input.accepts_crypto;
    } else {
        update.company_name = input.company_name;
        update.company_description = input.company_description;
        update.website = input.website;
        update.phone = input.phone;
    }

    Ok(update)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gladiator_core::roles::USER_TYPE_CLIENT;

    #[test]
    fn professional_fields_dropped_for_clients() {
        let input = UpdateProfile {
            full_name: Some("Ana".into()),
            hourly_rate: Some(40.0),
            company_name: Some("Acme".into()),
            ..Default::default()
        };
        let update = sanitize_for_role(input, USER_TYPE_CLIENT).unwrap();
        assert_eq!(update.full_name.as_deref(), Some("Ana"));
        assert_eq!(update.company_name.as_deref(), Some("Acme"));
        assert_eq!(update.hourly_rate, None);
    }

    #[test]
    fn client_fields_dropped_for_professionals() {
        let input = UpdateProfile {
            hourly_rate: Some(40.0),
            company_name: Some("Acme".into()),
            ..Default::default()
        };
        let update = sanitize_for_role(input, USER_TYPE_PROFESSIONAL).unwrap();
        assert_eq!(update.hourly_rate, Some(40.0));
        assert_eq!(update.company_name, None);
    }

    #[test]
    fn invalid_professional_fields_rejected() {
        let input = UpdateProfile {
            hourly_rate: Some(-1.0),
            ..Default::default()
        };
        assert!(sanitize_for_role(input, USER_TYPE_PROFESSIONAL).is_err());

        let input = UpdateProfile {
            category: Some("plumbing".into()),
            ..Default::default()
        };
        assert!(sanitize_for_role(input, USER_TYPE_PROFESSIONAL).is_err());
    }
}
