use axum::{extract::Multipart, response::IntoResponse, Extension};

use crate::error::ApiError;
use crate::handlers::success;
use crate::middleware::AuthUser;
use crate::services::cloudinary::CloudinaryClient;
use crate::services::DomainError;

const UPLOAD_FOLDER: &str = "portfolio";

/// POST /api/images/upload - multipart upload proxied to the image host.
/// Expects a single `file` part; responds with the hosted URL.
pub async fn image_upload_post(
    Extension(user): Extension<AuthUser>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    user.require_admin()?;

    let mut upload: Option<(String, String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .ok_or_else(|| ApiError::bad_request("File part is missing a content type"))?
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Could not read file part: {}", e)))?;
        upload = Some((file_name, content_type, bytes.to_vec()));
        break;
    }

    let (file_name, content_type, bytes) = upload
        .ok_or_else(|| ApiError::bad_request("Request must include a 'file' part"))?;

    CloudinaryClient::validate_image(&content_type, &bytes).map_err(|e| match e {
        DomainError::Validation(msg) => ApiError::validation_error(msg, None),
        other => ApiError::from(other),
    })?;

    let client = CloudinaryClient::from_config()?;
    let uploaded = client.upload_image(&file_name, bytes, UPLOAD_FOLDER).await?;

    tracing::info!(
        user_id = %user.user_id,
        public_id = %uploaded.public_id,
        "image uploaded"
    );
    Ok(success(uploaded))
}
