//! Repository for the `profiles` table.

use gladiator_core::roles::USER_TYPE_PROFESSIONAL;
use gladiator_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{CreateProfile, Profile, UpdateProfile};

/// Column list for `profiles` queries.
const COLUMNS: &str = "\
    id, email, password_hash, user_type, full_name, avatar_url, age, bio, \
    skills, category, experience_years, hourly_rate, location, \
    company_name, company_description, website, phone, \
    wallet_address, accepts_crypto, created_at, updated_at";

/// Provides CRUD operations for profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Create a profile at registration. Fails on a duplicate email via
    /// the `uq_profiles_email` constraint.
    pub async fn create(pool: &PgPool, input: &CreateProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (email, password_hash, user_type, full_name) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.user_type)
            .bind(input.full_name.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Find a profile by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a profile by email (login lookup).
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE email = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// All professional profiles, newest first. This is the directory
    /// snapshot the filter/sort engine works on.
    pub async fn list_professionals(pool: &PgPool) -> Result<Vec<Profile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM profiles \
             WHERE user_type = $1 \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(USER_TYPE_PROFESSIONAL)
            .fetch_all(pool)
            .await
    }

    /// Patch a profile. Absent fields keep their current value.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET \
                full_name = COALESCE($2, full_name), \
                avatar_url = COALESCE($3, avatar_url), \
                age = COALESCE($4, age), \
                bio = COALESCE($5, bio), \
                skills = COALESCE($6, skills), \
                category = COALESCE($7, category), \
                experience_years = COALESCE($8, experience_years), \
                hourly_rate = COALESCE($9, hourly_rate), \
                location = COALESCE($10, location), \
                company_name = COALESCE($11, company_name), \
                company_description = COALESCE($12, company_description), \
                website = COALESCE($13, website), \
                phone = COALESCE($14, phone), \
                wallet_address = COALESCE($15, wallet_address), \
                accepts_crypto = COALESCE($16, accepts_crypto), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(input.full_name.as_deref())
            .bind(input.avatar_url.as_deref())
            .bind(input.age)
            .bind(input.bio.as_deref())
            .bind(input.skills.as_deref())
            .bind(input.category.as_deref())
            .bind(input.experience_years)
            .bind(input.hourly_rate)
            .bind(input.location.as_deref())
            .bind(input.company_name.as_deref())
            .bind(input.company_description.as_deref())
            .bind(input.website.as_deref())
            .bind(input.phone.as_deref())
            .bind(input.wallet_address.as_deref())
            .bind(input.accepts_crypto)
            .fetch_optional(pool)
            .await
    }
}
