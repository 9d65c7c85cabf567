//! Public portfolio reads, keyed by account username. No token required.

use axum::{extract::Path, response::IntoResponse};
use uuid::Uuid;

use crate::error::ApiError;
use crate::handlers::success;
use crate::services::client_service::ClientService;
use crate::services::profile_service::ProfileService;
use crate::services::project_service::ProjectService;
use crate::services::social_service::SocialService;
use crate::services::technology_service::TechnologyService;
use crate::services::work_experience_service::WorkExperienceService;

/// GET /portfolio/:username
pub async fn profile_get(Path(username): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let service = ProfileService::new().await?;
    let profile = service.public_profile(&username).await?;
    Ok(success(profile))
}

/// GET /portfolio/:username/projects
pub async fn projects_get(Path(username): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let service = ProjectService::new().await?;
    let projects = service.public_projects(&username).await?;
    Ok(success(projects))
}

/// GET /portfolio/:username/projects/featured
pub async fn featured_projects_get(
    Path(username): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let service = ProjectService::new().await?;
    let projects = service.public_featured_projects(&username).await?;
    Ok(success(projects))
}

/// GET /portfolio/:username/projects/:project_id
pub async fn project_get(
    Path((username, project_id)): Path<(String, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    let service = ProjectService::new().await?;
    let project = service.public_project(&username, project_id).await?;
    Ok(success(project))
}

/// GET /portfolio/:username/technologies
pub async fn technologies_get(
    Path(username): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let service = TechnologyService::new().await?;
    let technologies = service.public_technologies(&username).await?;
    Ok(success(technologies))
}

/// GET /portfolio/:username/socials
pub async fn socials_get(Path(username): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let service = SocialService::new().await?;
    let socials = service.public_socials(&username).await?;
    Ok(success(socials))
}

/// GET /portfolio/:username/work-experiences
pub async fn work_experiences_get(
    Path(username): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let service = WorkExperienceService::new().await?;
    let rows = service.public_work_experiences(&username).await?;
    Ok(success(rows))
}

/// GET /portfolio/:username/clients
pub async fn clients_get(Path(username): Path<String>) -> Result<impl IntoResponse, ApiError> {
    let service = ClientService::new().await?;
    let clients = service.public_clients(&username).await?;
    Ok(success(clients))
}
