use axum::{extract::Path, http::StatusCode, response::IntoResponse, Extension, Json};
use uuid::Uuid;

use crate::database::models::project::{CreateProject, UpdateProject};
use crate::error::ApiError;
use crate::handlers::success;
use crate::middleware::AuthUser;
use crate::services::project_service::ProjectService;

/// GET /api/projects - the caller's projects, featured first.
pub async fn projects_get(
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let service = ProjectService::new().await?;
    let projects = service.my_projects(user.user_id).await?;
    Ok(success(projects))
}

/// GET /api/projects/featured
pub async fn featured_projects_get(
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let service = ProjectService::new().await?;
    let projects = service.my_featured_projects(user.user_id).await?;
    Ok(success(projects))
}

/// GET /api/projects/:project_id
pub async fn project_get(
    Extension(user): Extension<AuthUser>,
    Path(project_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let service = ProjectService::new().await?;
    let project = service.project_by_id(user.user_id, project_id).await?;
    Ok(success(project))
}

/// POST /api/projects
pub async fn project_post(
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CreateProject>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_admin()?;
    let service = ProjectService::new().await?;
    let project = service.create_project(user.user_id, body).await?;
    Ok((StatusCode::CREATED, success(project)))
}

/// PATCH /api/projects/:project_id - partial update; technology and preview
/// lists are replaced wholesale when present.
pub async fn project_patch(
    Extension(user): Extension<AuthUser>,
    Path(project_id): Path<Uuid>,
    Json(body): Json<UpdateProject>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_admin()?;
    let service = ProjectService::new().await?;
    let project = service.update_project(user.user_id, project_id, body).await?;
    Ok(success(project))
}

/// DELETE /api/projects/:project_id - soft delete.
pub async fn project_delete(
    Extension(user): Extension<AuthUser>,
    Path(project_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_admin()?;
    let service = ProjectService::new().await?;
    service.delete_project(user.user_id, project_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
