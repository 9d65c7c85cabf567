//! Repository for the `profiles` table (1:1 with users).

use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::profile::{CreateProfile, Profile, UpdateProfile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, last_name, email, current_title, bio_summary, \
                       phone, location, photo_url, created_at, updated_at, created_by, \
                       updated_by, is_active";

pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert the profile for a user. Name fields are expected pre-normalized
    /// by the service layer.
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        email: &str,
        input: &CreateProfile,
    ) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (user_id, name, last_name, email, current_title,
                                   bio_summary, phone, location, photo_url, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.last_name)
            .bind(email)
            .bind(&input.current_title)
            .bind(&input.bio_summary)
            .bind(&input.phone)
            .bind(&input.location)
            .bind(&input.photo_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM profiles WHERE user_id = $1 AND is_active = TRUE");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update the profile belonging to `user_id`. Only non-`None` fields are
    /// applied. Returns `None` if the user has no active profile.
    pub async fn update_by_user_id(
        pool: &PgPool,
        user_id: Uuid,
        input: &UpdateProfile,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                name = COALESCE($2, name),
                last_name = COALESCE($3, last_name),
                current_title = COALESCE($4, current_title),
                bio_summary = COALESCE($5, bio_summary),
                phone = COALESCE($6, phone),
                location = COALESCE($7, location),
                photo_url = COALESCE($8, photo_url),
                updated_at = now(),
                updated_by = $1
             WHERE user_id = $1 AND is_active = TRUE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.last_name)
            .bind(&input.current_title)
            .bind(&input.bio_summary)
            .bind(&input.phone)
            .bind(&input.location)
            .bind(&input.photo_url)
            .fetch_optional(pool)
            .await
    }
}
