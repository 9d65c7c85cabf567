//! Project use cases: CRUD plus technology links and preview images.
//!
//! Mutations verify ownership through the caller's profile; reads for the
//! public site go through the profile resolved from a username.

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::profile::Profile;
use crate::database::models::project::{CreateProject, Project, ProjectPreview, UpdateProject};
use crate::database::repositories::{
    ProfileRepo, ProjectPreviewRepo, ProjectRepo, ProjectTechRepo, TechnologyRepo, UserRepo,
    WorkExperienceRepo,
};
use crate::services::DomainError;

/// A project with its associated technology ids and preview images,
/// as served to clients. The project fields are flattened into the
/// response object.
#[derive(Debug, Serialize)]
pub struct ProjectDetails {
    #[serde(flatten)]
    pub project: Project,
    pub technology_ids: Vec<Uuid>,
    pub previews: Vec<ProjectPreview>,
}

pub struct ProjectService {
    pool: PgPool,
}

impl ProjectService {
    pub async fn new() -> Result<Self, DomainError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    async fn my_profile(&self, user_id: Uuid) -> Result<Profile, DomainError> {
        ProfileRepo::find_by_user_id(&self.pool, user_id)
            .await?
            .ok_or_else(|| DomainError::Validation("User has no profile yet".to_string()))
    }

    fn verify_ownership(&self, profile: &Profile, project: &Project) -> Result<(), DomainError> {
        if project.profile_id != profile.id {
            return Err(DomainError::Forbidden(
                "You do not have permission to access this project".to_string(),
            ));
        }
        Ok(())
    }

    async fn verify_work_experience(
        &self,
        profile: &Profile,
        work_experience_id: Option<Uuid>,
    ) -> Result<(), DomainError> {
        let Some(id) = work_experience_id else { return Ok(()) };
        let work_experience = WorkExperienceRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| DomainError::Validation("Work experience does not exist".to_string()))?;
        if work_experience.profile_id != profile.id {
            return Err(DomainError::Forbidden(
                "You do not have permission to use this work experience".to_string(),
            ));
        }
        Ok(())
    }

    async fn verify_technologies(
        &self,
        profile: &Profile,
        technology_ids: &[Uuid],
    ) -> Result<(), DomainError> {
        for &tech_id in technology_ids {
            let technology = TechnologyRepo::find_by_id(&self.pool, tech_id)
                .await?
                .ok_or_else(|| DomainError::Validation("Technology does not exist".to_string()))?;
            if technology.profile_id != profile.id {
                return Err(DomainError::Forbidden(
                    "You do not have permission to use this technology".to_string(),
                ));
            }
        }
        Ok(())
    }

    async fn load_details(&self, project: Project) -> Result<ProjectDetails, DomainError> {
        let technology_ids = ProjectTechRepo::technology_ids(&self.pool, project.id).await?;
        let previews = ProjectPreviewRepo::list_by_project(&self.pool, project.id).await?;
        Ok(ProjectDetails { project, technology_ids, previews })
    }

    async fn load_details_all(
        &self,
        projects: Vec<Project>,
    ) -> Result<Vec<ProjectDetails>, DomainError> {
        let mut details = Vec::with_capacity(projects.len());
        for project in projects {
            details.push(self.load_details(project).await?);
        }
        Ok(details)
    }

    pub async fn create_project(
        &self,
        user_id: Uuid,
        input: CreateProject,
    ) -> Result<ProjectDetails, DomainError> {
        let profile = self.my_profile(user_id).await?;
        self.verify_work_experience(&profile, input.work_experience_id).await?;
        self.verify_technologies(&profile, &input.technology_ids).await?;

        // One transaction so a project never lands with half its links
        let mut tx = self.pool.begin().await?;
        let project = ProjectRepo::create(&mut *tx, profile.id, &input, user_id).await?;
        for &tech_id in &input.technology_ids {
            ProjectTechRepo::link(&mut *tx, project.id, tech_id, user_id).await?;
        }
        for preview in &input.previews {
            ProjectPreviewRepo::create(&mut *tx, project.id, preview, user_id).await?;
        }
        tx.commit().await?;

        self.load_details(project).await
    }

    pub async fn my_projects(&self, user_id: Uuid) -> Result<Vec<ProjectDetails>, DomainError> {
        let profile = self.my_profile(user_id).await?;
        let projects = ProjectRepo::list_by_profile(&self.pool, profile.id).await?;
        self.load_details_all(projects).await
    }

    pub async fn my_featured_projects(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ProjectDetails>, DomainError> {
        let profile = self.my_profile(user_id).await?;
        let projects = ProjectRepo::list_featured_by_profile(&self.pool, profile.id).await?;
        self.load_details_all(projects).await
    }

    pub async fn project_by_id(
        &self,
        user_id: Uuid,
        project_id: Uuid,
    ) -> Result<ProjectDetails, DomainError> {
        let project = ProjectRepo::find_by_id(&self.pool, project_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Project not found".to_string()))?;
        let profile = self.my_profile(user_id).await?;
        self.verify_ownership(&profile, &project)?;
        self.load_details(project).await
    }

    /// Partial update. When `technology_ids` or `previews` are present the
    /// stored set is fully replaced.
    pub async fn update_project(
        &self,
        user_id: Uuid,
        project_id: Uuid,
        input: UpdateProject,
    ) -> Result<ProjectDetails, DomainError> {
        let existing = ProjectRepo::find_by_id(&self.pool, project_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Project not found".to_string()))?;
        let profile = self.my_profile(user_id).await?;
        self.verify_ownership(&profile, &existing)?;
        self.verify_work_experience(&profile, input.work_experience_id.flatten())
            .await?;
        if let Some(tech_ids) = &input.technology_ids {
            self.verify_technologies(&profile, tech_ids).await?;
        }

        // Replacement of links and previews is all-or-nothing
        let mut tx = self.pool.begin().await?;
        let project = ProjectRepo::update(&mut *tx, project_id, &input, user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Project not found".to_string()))?;

        if let Some(tech_ids) = &input.technology_ids {
            ProjectTechRepo::unlink_all(&mut *tx, project.id, user_id).await?;
            for &tech_id in tech_ids {
                ProjectTechRepo::link(&mut *tx, project.id, tech_id, user_id).await?;
            }
        }

        if let Some(previews) = &input.previews {
            ProjectPreviewRepo::delete_by_project(&mut *tx, project.id, user_id).await?;
            for preview in previews {
                ProjectPreviewRepo::create(&mut *tx, project.id, preview, user_id).await?;
            }
        }
        tx.commit().await?;

        self.load_details(project).await
    }

    pub async fn delete_project(&self, user_id: Uuid, project_id: Uuid) -> Result<(), DomainError> {
        let existing = ProjectRepo::find_by_id(&self.pool, project_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Project not found".to_string()))?;
        let profile = self.my_profile(user_id).await?;
        self.verify_ownership(&profile, &existing)?;

        // Links go with the project so public reads stay consistent
        let mut tx = self.pool.begin().await?;
        ProjectTechRepo::unlink_all(&mut *tx, project_id, user_id).await?;
        ProjectRepo::soft_delete(&mut *tx, project_id, user_id).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn public_profile(&self, username: &str) -> Result<Profile, DomainError> {
        let user = UserRepo::find_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| DomainError::NotFound("User not found".to_string()))?;
        ProfileRepo::find_by_user_id(&self.pool, user.id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Profile not found".to_string()))
    }

    pub async fn public_projects(
        &self,
        username: &str,
    ) -> Result<Vec<ProjectDetails>, DomainError> {
        let profile = self.public_profile(username).await?;
        let projects = ProjectRepo::list_by_profile(&self.pool, profile.id).await?;
        self.load_details_all(projects).await
    }

    pub async fn public_featured_projects(
        &self,
        username: &str,
    ) -> Result<Vec<ProjectDetails>, DomainError> {
        let profile = self.public_profile(username).await?;
        let projects = ProjectRepo::list_featured_by_profile(&self.pool, profile.id).await?;
        self.load_details_all(projects).await
    }

    /// A single public project; a project belonging to someone else reports
    /// not-found rather than leaking its existence.
    pub async fn public_project(
        &self,
        username: &str,
        project_id: Uuid,
    ) -> Result<ProjectDetails, DomainError> {
        let profile = self.public_profile(username).await?;
        let project = ProjectRepo::find_by_id(&self.pool, project_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Project not found".to_string()))?;
        if project.profile_id != profile.id {
            return Err(DomainError::NotFound("Project not found".to_string()));
        }
        self.load_details(project).await
    }
}
