use axum::{extract::Path, http::StatusCode, response::IntoResponse, Extension, Json};
use uuid::Uuid;

use crate::database::models::client::{CreateClient, UpdateClient};
use crate::error::ApiError;
use crate::handlers::success;
use crate::middleware::AuthUser;
use crate::services::client_service::ClientService;

/// GET /api/clients - the caller's testimonials, newest first.
pub async fn clients_get(
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let service = ClientService::new().await?;
    let clients = service.my_clients(user.user_id).await?;
    Ok(success(clients))
}

/// GET /api/clients/:client_id
pub async fn client_get(
    Extension(user): Extension<AuthUser>,
    Path(client_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let service = ClientService::new().await?;
    let client = service.client_by_id(user.user_id, client_id).await?;
    Ok(success(client))
}

/// POST /api/clients
pub async fn client_post(
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CreateClient>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_admin()?;
    let service = ClientService::new().await?;
    let client = service.create_client(user.user_id, body).await?;
    Ok((StatusCode::CREATED, success(client)))
}

/// PATCH /api/clients/:client_id
pub async fn client_patch(
    Extension(user): Extension<AuthUser>,
    Path(client_id): Path<Uuid>,
    Json(body): Json<UpdateClient>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_admin()?;
    let service = ClientService::new().await?;
    let client = service.update_client(user.user_id, client_id, body).await?;
    Ok(success(client))
}

/// DELETE /api/clients/:client_id - soft delete.
pub async fn client_delete(
    Extension(user): Extension<AuthUser>,
    Path(client_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    user.require_admin()?;
    let service = ClientService::new().await?;
    service.delete_client(user.user_id, client_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
