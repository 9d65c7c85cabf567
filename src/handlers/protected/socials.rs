use axum::{extract::Path, http::StatusCode, response::IntoResponse, Extension, Json};
use uuid::Uuid;

use crate::database::models::social::{CreateSocial, UpdateSocial};
use crate::error::ApiError;
use crate::handlers::success;
use crate::middleware::AuthUser;
use crate::services::social_service::SocialService;

/// GET /api/socials - the caller's social links in display order.
pub async fn socials_get(
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let service = SocialService::new().await?;
    let socials = service.my_socials(user.user_id).await?;
    Ok(success(socials))
}

/// GET /api/socials/:social_id
pub async fn social_get(
    Extension(user): Extension<AuthUser>,
    Path(social_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let service = SocialService::new().await?;
    let social = service.social_by_id(user.user_id, social_id).await?;
    Ok(success(social))
}

/// POST /api/socials
pub async fn social_post(
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CreateSocial>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_admin()?;
    let service = SocialService::new().await?;
    let social = service.create_social(user.user_id, body).await?;
    Ok((StatusCode::CREATED, success(social)))
}

/// PATCH /api/socials/:social_id
pub async fn social_patch(
    Extension(user): Extension<AuthUser>,
    Path(social_id): Path<Uuid>,
    Json(body): Json<UpdateSocial>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_admin()?;
    let service = SocialService::new().await?;
    let social = service.update_social(user.user_id, social_id, body).await?;
    Ok(success(social))
}

/// DELETE /api/socials/:social_id - soft delete.
pub async fn social_delete(
    Extension(user): Extension<AuthUser>,
    Path(social_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_admin()?;
    let service = SocialService::new().await?;
    service.delete_social(user.user_id, social_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
