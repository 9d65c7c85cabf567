use axum::{extract::Path, http::StatusCode, response::IntoResponse, Extension, Json};
use uuid::Uuid;

use crate::database::models::technology::{CreateTechnology, UpdateTechnology};
use crate::error::ApiError;
use crate::handlers::success;
use crate::middleware::AuthUser;
use crate::services::technology_service::TechnologyService;

/// GET /api/technologies - the caller's technologies, alphabetical.
pub async fn technologies_get(
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let service = TechnologyService::new().await?;
    let technologies = service.my_technologies(user.user_id).await?;
    Ok(success(technologies))
}

/// GET /api/technologies/:technology_id
pub async fn technology_get(
    Extension(user): Extension<AuthUser>,
    Path(technology_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let service = TechnologyService::new().await?;
    let technology = service.technology_by_id(user.user_id, technology_id).await?;
    Ok(success(technology))
}

/// POST /api/technologies
pub async fn technology_post(
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CreateTechnology>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_admin()?;
    let service = TechnologyService::new().await?;
    let technology = service.create_technology(user.user_id, body).await?;
    Ok((StatusCode::CREATED, success(technology)))
}

/// PATCH /api/technologies/:technology_id
pub async fn technology_patch(
    Extension(user): Extension<AuthUser>,
    Path(technology_id): Path<Uuid>,
    Json(body): Json<UpdateTechnology>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_admin()?;
    let service = TechnologyService::new().await?;
    let technology = service
        .update_technology(user.user_id, technology_id, body)
        .await?;
    Ok(success(technology))
}

/// DELETE /api/technologies/:technology_id - soft delete.
pub async fn technology_delete(
    Extension(user): Extension<AuthUser>,
    Path(technology_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_admin()?;
    let service = TechnologyService::new().await?;
    service.delete_technology(user.user_id, technology_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
