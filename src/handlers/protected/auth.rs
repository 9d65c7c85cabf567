use axum::{response::IntoResponse, Extension};

use crate::error::ApiError;
use crate::handlers::success;
use crate::middleware::AuthUser;
use crate::services::auth_service::AuthService;

/// GET /api/auth/whoami - the account behind the presented token.
pub async fn whoami_get(Extension(user): Extension<AuthUser>) -> Result<impl IntoResponse, ApiError> {
    let service = AuthService::new().await?;
    let account = service.current_user(user.user_id).await?;
    Ok(success(account))
}
