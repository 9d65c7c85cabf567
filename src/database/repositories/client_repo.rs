//! Repository for the `clients` table (testimonials).

use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::client::{Client, CreateClient, UpdateClient};

const COLUMNS: &str = "id, profile_id, name, company, feedback, client_photo_url, project_link, \
                       created_at, updated_at, created_by, updated_by, is_active";

pub struct ClientRepo;

impl ClientRepo {
    pub async fn create(
        pool: &PgPool,
        profile_id: Uuid,
        input: &CreateClient,
        created_by: Uuid,
    ) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (profile_id, name, company, feedback, client_photo_url,
                                  project_link, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(profile_id)
            .bind(&input.name)
            .bind(&input.company)
            .bind(&input.feedback)
            .bind(&input.client_photo_url)
            .bind(&input.project_link)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1 AND is_active = TRUE");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_by_profile(
        pool: &PgPool,
        profile_id: Uuid,
    ) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM clients
             WHERE profile_id = $1 AND is_active = TRUE
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }

    /// Update a client testimonial. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        input: &UpdateClient,
        updated_by: Uuid,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "UPDATE clients SET
                name = COALESCE($2, name),
                company = COALESCE($3, company),
                feedback = COALESCE($4, feedback),
                client_photo_url = COALESCE($5, client_photo_url),
                project_link = COALESCE($6, project_link),
                updated_at = now(),
                updated_by = $7
             WHERE id = $1 AND is_active = TRUE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.company)
            .bind(&input.feedback)
            .bind(&input.client_photo_url)
            .bind(&input.project_link)
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
            "UPDATE clients SET is_active = FALSE, updated_at = now(), updated_by = $2
             WHERE id = $1 AND is_active = TRUE",
        )
        .bind(id)
        .bind(deleted_by)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
