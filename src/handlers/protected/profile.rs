use axum::{http::StatusCode, response::IntoResponse, Extension, Json};

use crate::database::models::profile::{CreateProfile, UpdateProfile};
use crate::error::ApiError;
use crate::handlers::success;
use crate::middleware::AuthUser;
use crate::services::profile_service::ProfileService;

/// GET /api/profile - the caller's own profile.
pub async fn profile_get(
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let service = ProfileService::new().await?;
    let profile = service.my_profile(user.user_id).await?;
    Ok(success(profile))
}

/// POST /api/profile - create the caller's profile. One per account.
pub async fn profile_post(
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CreateProfile>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_admin()?;
    let service = ProfileService::new().await?;
    let profile = service.create_profile(user.user_id, body).await?;
    Ok((StatusCode::CREATED, success(profile)))
}

/// PATCH /api/profile - partial update of the caller's profile.
pub async fn profile_patch(
    Extension(user): Extension<AuthUser>,
    Json(body): Json<UpdateProfile>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_admin()?;
    let service = ProfileService::new().await?;
    let profile = service.update_profile(user.user_id, body).await?;
    Ok(success(profile))
}
