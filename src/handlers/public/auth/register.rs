use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;

use crate::error::ApiError;
use crate::handlers::success;
use crate::services::auth_service::AuthService;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// POST /auth/register - create an account.
pub async fn register_post(
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let service = AuthService::new().await?;
    let user = service
        .register(&body.username, &body.email, &body.password)
        .await?;
    Ok((StatusCode::CREATED, success(user)))
}
