//! Repository for the `work_experiences` table.

use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::work_experience::{
    CreateWorkExperience, UpdateWorkExperience, WorkExperience,
};

const COLUMNS: &str = "id, profile_id, job_title, company, location, start_date, end_date, \
                       description, created_at, updated_at, created_by, updated_by, is_active";

pub struct WorkExperienceRepo;

impl WorkExperienceRepo {
    pub async fn create(
        pool: &PgPool,
        profile_id: Uuid,
        input: &CreateWorkExperience,
        created_by: Uuid,
    ) -> Result<WorkExperience, sqlx::Error> {
        let query = format!(
            "INSERT INTO work_experiences (profile_id, job_title, company, location,
                                           start_date, end_date, description, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkExperience>(&query)
            .bind(profile_id)
            .bind(&input.job_title)
            .bind(&input.company)
            .bind(&input.location)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.description)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: Uuid,
    ) -> Result<Option<WorkExperience>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM work_experiences WHERE id = $1 AND is_active = TRUE");
        sqlx::query_as::<_, WorkExperience>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Active work experiences of a profile, most recent first.
    pub async fn list_by_profile(
        pool: &PgPool,
        profile_id: Uuid,
    ) -> Result<Vec<WorkExperience>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM work_experiences
             WHERE profile_id = $1 AND is_active = TRUE
             ORDER BY start_date DESC"
        );
        sqlx::query_as::<_, WorkExperience>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }

    /// Update a work experience. Only non-`None` fields are applied;
    /// `end_date` supports an explicit null to mark the position as current.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        input: &UpdateWorkExperience,
        updated_by: Uuid,
    ) -> Result<Option<WorkExperience>, sqlx::Error> {
        let query = format!(
            "UPDATE work_experiences SET
                job_title = COALESCE($2, job_title),
                company = COALESCE($3, company),
                location = COALESCE($4, location),
                start_date = COALESCE($5, start_date),
                end_date = CASE WHEN $6 THEN $7 ELSE end_date END,
                description = COALESCE($8, description),
                updated_at = now(),
                updated_by = $9
             WHERE id = $1 AND is_active = TRUE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkExperience>(&query)
            .bind(id)
            .bind(&input.job_title)
            .bind(&input.company)
            .bind(&input.location)
            .bind(input.start_date)
            .bind(input.end_date.is_some())
            .bind(input.end_date.flatten())
            .bind(&input.description)
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
            "UPDATE work_experiences SET is_active = FALSE, updated_at = now(), updated_by = $2
             WHERE id = $1 AND is_active = TRUE",
        )
        .bind(id)
        .bind(deleted_by)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
