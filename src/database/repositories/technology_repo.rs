//! Repository for the `technologies` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::technology::{CreateTechnology, Technology, UpdateTechnology};

const COLUMNS: &str = "id, profile_id, name, category, icon_url, created_at, updated_at, \
                       created_by, updated_by, is_active";

pub struct TechnologyRepo;

impl TechnologyRepo {
    pub async fn create(
        pool: &PgPool,
        profile_id: Uuid,
        input: &CreateTechnology,
        created_by: Uuid,
    ) -> Result<Technology, sqlx::Error> {
        let query = format!(
            "INSERT INTO technologies (profile_id, name, category, icon_url, created_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Technology>(&query)
            .bind(profile_id)
            .bind(&input.name)
            .bind(input.category.as_str())
            .bind(&input.icon_url)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Technology>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM technologies WHERE id = $1 AND is_active = TRUE");
        sqlx::query_as::<_, Technology>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_by_profile(
        pool: &PgPool,
        profile_id: Uuid,
    ) -> Result<Vec<Technology>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM technologies
             WHERE profile_id = $1 AND is_active = TRUE
             ORDER BY name ASC"
        );
        sqlx::query_as::<_, Technology>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }

    /// Update a technology. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        input: &UpdateTechnology,
        updated_by: Uuid,
    ) -> Result<Option<Technology>, sqlx::Error> {
        let query = format!(
            "UPDATE technologies SET
                name = COALESCE($2, name),
                category = COALESCE($3, category),
                icon_url = COALESCE($4, icon_url),
                updated_at = now(),
                updated_by = $5
             WHERE id = $1 AND is_active = TRUE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Technology>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.category.map(|c| c.as_str()))
            .bind(&input.icon_url)
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
            "UPDATE technologies SET is_active = FALSE, updated_at = now(), updated_by = $2
             WHERE id = $1 AND is_active = TRUE",
        )
        .bind(id)
        .bind(deleted_by)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
