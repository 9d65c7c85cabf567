use axum::{extract::Path, http::StatusCode, response::IntoResponse, Extension, Json};
use uuid::Uuid;

use crate::database::models::work_experience::{CreateWorkExperience, UpdateWorkExperience};
use crate::error::ApiError;
use crate::handlers::success;
use crate::middleware::AuthUser;
use crate::services::work_experience_service::WorkExperienceService;

/// GET /api/work-experiences - the caller's history, most recent first.
pub async fn work_experiences_get(
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let service = WorkExperienceService::new().await?;
    let rows = service.my_work_experiences(user.user_id).await?;
    Ok(success(rows))
}

/// GET /api/work-experiences/:work_experience_id
pub async fn work_experience_get(
    Extension(user): Extension<AuthUser>,
    Path(work_experience_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let service = WorkExperienceService::new().await?;
    let row = service
        .work_experience_by_id(user.user_id, work_experience_id)
        .await?;
    Ok(success(row))
}

/// POST /api/work-experiences
pub async fn work_experience_post(
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CreateWorkExperience>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_admin()?;
    let service = WorkExperienceService::new().await?;
    let row = service.create_work_experience(user.user_id, body).await?;
    Ok((StatusCode::CREATED, success(row)))
}

/// PATCH /api/work-experiences/:work_experience_id
pub async fn work_experience_patch(
    Extension(user): Extension<AuthUser>,
    Path(work_experience_id): Path<Uuid>,
    Json(body): Json<UpdateWorkExperience>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_admin()?;
    let service = WorkExperienceService::new().await?;
    let row = service
        .update_work_experience(user.user_id, work_experience_id, body)
        .await?;
    Ok(success(row))
}

/// DELETE /api/work-experiences/:work_experience_id - soft delete.
pub async fn work_experience_delete(
    Extension(user): Extension<AuthUser>,
    Path(work_experience_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_admin()?;
    let service = WorkExperienceService::new().await?;
    service
        .delete_work_experience(user.user_id, work_experience_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
