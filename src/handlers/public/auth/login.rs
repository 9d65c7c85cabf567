use axum::{response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;
use crate::services::auth_service::AuthService;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /auth/login - exchange credentials for a bearer token.
///
/// The token payload is returned at the top level, not inside the usual
/// success envelope, so standard OAuth2-style clients can consume it.
pub async fn login_post(Json(body): Json<LoginRequest>) -> Result<impl IntoResponse, ApiError> {
    let service = AuthService::new().await?;
    let token = service.login(&body.email, &body.password).await?;
    Ok(Json(json!({
        "access_token": token.access_token,
        "token_type": token.token_type
    })))
}
