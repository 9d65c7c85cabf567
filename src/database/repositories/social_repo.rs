//! Repository for the `socials` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::social::{CreateSocial, Social, UpdateSocial};

const COLUMNS: &str = "id, profile_id, platform, url, icon_name, position, created_at, \
                       updated_at, created_by, updated_by, is_active";

pub struct SocialRepo;

impl SocialRepo {
    pub async fn create(
        pool: &PgPool,
        profile_id: Uuid,
        input: &CreateSocial,
        created_by: Uuid,
    ) -> Result<Social, sqlx::Error> {
        let query = format!(
            "INSERT INTO socials (profile_id, platform, url, icon_name, position, created_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Social>(&query)
            .bind(profile_id)
            .bind(&input.platform)
            .bind(&input.url)
            .bind(&input.icon_name)
            .bind(input.position)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Social>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM socials WHERE id = $1 AND is_active = TRUE");
        sqlx::query_as::<_, Social>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Active social links of a profile, in display order.
    pub async fn list_by_profile(
        pool: &PgPool,
        profile_id: Uuid,
    ) -> Result<Vec<Social>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM socials
             WHERE profile_id = $1 AND is_active = TRUE
             ORDER BY position ASC"
        );
        sqlx::query_as::<_, Social>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }

    /// Update a social link. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        input: &UpdateSocial,
        updated_by: Uuid,
    ) -> Result<Option<Social>, sqlx::Error> {
        let query = format!(
            "UPDATE socials SET
                platform = COALESCE($2, platform),
                url = COALESCE($3, url),
                icon_name = COALESCE($4, icon_name),
                position = COALESCE($5, position),
                updated_at = now(),
                updated_by = $6
             WHERE id = $1 AND is_active = TRUE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Social>(&query)
            .bind(id)
            .bind(&input.platform)
            .bind(&input.url)
            .bind(&input.icon_name)
            .bind(input.position)
            .bind(updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Soft delete. Returns `true` if a row was deactivated.
    pub async fn soft_delete(
        pool: &PgPool,
        id: Uuid,
        deleted_by: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE socials SET is_active = FALSE, updated_at = now(), updated_by = $2
             WHERE id = $1 AND is_active = TRUE",
        )
        .bind(id)
        .bind(deleted_by)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
