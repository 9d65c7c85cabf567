//! Repositories for the `projects` table and its satellites
//! (`project_technologies`, `project_previews`).
//!
//! Mutating methods take any `PgExecutor` so services can run multi-step
//! writes inside one transaction.

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::database::models::project::{
    CreateProject, PreviewInput, Project, ProjectPreview, UpdateProject,
};

const PROJECT_COLUMNS: &str = "id, profile_id, title, category, description, thumbnail_url, \
                               live_url, repo_url, featured, work_experience_id, created_at, \
                               updated_at, created_by, updated_by, is_active";

const PREVIEW_COLUMNS: &str = "id, project_id, image_url, caption, position, created_at, \
                               updated_at, created_by, updated_by, is_active";

pub struct ProjectRepo;

impl ProjectRepo {
    pub async fn create(
        db: impl PgExecutor<'_>,
        profile_id: Uuid,
        input: &CreateProject,
        created_by: Uuid,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (profile_id, title, category, description, thumbnail_url,
                                   live_url, repo_url, featured, work_experience_id, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {PROJECT_COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(profile_id)
            .bind(&input.title)
            .bind(input.category.as_str())
            .bind(&input.description)
            .bind(&input.thumbnail_url)
            .bind(&input.live_url)
            .bind(&input.repo_url)
            .bind(input.featured)
            .bind(input.work_experience_id)
            .bind(created_by)
            .fetch_one(db)
            .await
    }

    /// Find an active project by id.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Project>, sqlx::Error> {
        let query =
            format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1 AND is_active = TRUE");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All active projects of a profile, featured first, newest first.
    pub async fn list_by_profile(
        pool: &PgPool,
        profile_id: Uuid,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {PROJECT_COLUMNS} FROM projects
             WHERE profile_id = $1 AND is_active = TRUE
             ORDER BY featured DESC, created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }

    /// Only the featured projects of a profile, newest first.
    pub async fn list_featured_by_profile(
        pool: &PgPool,
        profile_id: Uuid,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {PROJECT_COLUMNS} FROM projects
             WHERE profile_id = $1 AND featured = TRUE AND is_active = TRUE
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields are applied;
    /// `work_experience_id` supports an explicit null to detach.
    pub async fn update(
        db: impl PgExecutor<'_>,
        id: Uuid,
        input: &UpdateProject,
        updated_by: Uuid,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                category = COALESCE($3, category),
                description = COALESCE($4, description),
                thumbnail_url = COALESCE($5, thumbnail_url),
                live_url = COALESCE($6, live_url),
                repo_url = COALESCE($7, repo_url),
                featured = COALESCE($8, featured),
                work_experience_id = CASE WHEN $9 THEN $10 ELSE work_experience_id END,
                updated_at = now(),
                updated_by = $11
             WHERE id = $1 AND is_active = TRUE
             RETURNING {PROJECT_COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.category.map(|c| c.as_str()))
            .bind(&input.description)
            .bind(&input.thumbnail_url)
            .bind(&input.live_url)
            .bind(&input.repo_url)
            .bind(input.featured)
            .bind(input.work_experience_id.is_some())
            .bind(input.work_experience_id.flatten())
            .bind(updated_by)
            .fetch_optional(db)
            .await
    }

    /// Soft delete. Returns `true` if a row was deactivated.
    pub async fn soft_delete(
        db: impl PgExecutor<'_>,
        id: Uuid,
        deleted_by: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET is_active = FALSE, updated_at = now(), updated_by = $2
             WHERE id = $1 AND is_active = TRUE",
        )
        .bind(id)
        .bind(deleted_by)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

pub struct ProjectTechRepo;

impl ProjectTechRepo {
    /// Associate a technology with a project.
    pub async fn link(
        db: impl PgExecutor<'_>,
        project_id: Uuid,
        technology_id: Uuid,
        created_by: Uuid,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO project_technologies (project_id, technology_id, created_by)
             VALUES ($1, $2, $3)",
        )
        .bind(project_id)
        .bind(technology_id)
        .bind(created_by)
        .execute(db)
        .await?;
        Ok(())
    }

    /// Active technology ids associated with a project.
    pub async fn technology_ids(
        pool: &PgPool,
        project_id: Uuid,
    ) -> Result<Vec<Uuid>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT technology_id FROM project_technologies
             WHERE project_id = $1 AND is_active = TRUE",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Soft delete every technology association of a project.
    pub async fn unlink_all(
        db: impl PgExecutor<'_>,
        project_id: Uuid,
        updated_by: Uuid,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE project_technologies
             SET is_active = FALSE, updated_at = now(), updated_by = $2
             WHERE project_id = $1 AND is_active = TRUE",
        )
        .bind(project_id)
        .bind(updated_by)
        .execute(db)
        .await?;
        Ok(())
    }
}

pub struct ProjectPreviewRepo;

impl ProjectPreviewRepo {
    pub async fn create(
        db: impl PgExecutor<'_>,
        project_id: Uuid,
        input: &PreviewInput,
        created_by: Uuid,
    ) -> Result<ProjectPreview, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_previews (project_id, image_url, caption, position, created_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {PREVIEW_COLUMNS}"
        );
        sqlx::query_as::<_, ProjectPreview>(&query)
            .bind(project_id)
            .bind(&input.image_url)
            .bind(&input.caption)
            .bind(input.position)
            .bind(created_by)
            .fetch_one(db)
            .await
    }

    /// Active preview images of a project, in display order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: Uuid,
    ) -> Result<Vec<ProjectPreview>, sqlx::Error> {
        let query = format!(
            "SELECT {PREVIEW_COLUMNS} FROM project_previews
             WHERE project_id = $1 AND is_active = TRUE
             ORDER BY position ASC"
        );
        sqlx::query_as::<_, ProjectPreview>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Soft delete every preview of a project.
    pub async fn delete_by_project(
        db: impl PgExecutor<'_>,
        project_id: Uuid,
        updated_by: Uuid,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE project_previews
             SET is_active = FALSE, updated_at = now(), updated_by = $2
             WHERE project_id = $1 AND is_active = TRUE",
        )
        .bind(project_id)
        .bind(updated_by)
        .execute(db)
        .await?;
        Ok(())
    }
}
