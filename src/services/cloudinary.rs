//! Signed uploads to the Cloudinary REST API.
//!
//! The request carries the image bytes plus a timestamped signature:
//! hex(SHA-256(sorted "k=v" params joined by '&', then the API secret)).

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::config;

/// Largest accepted image payload. The router's body limit must stay above
/// this so oversized files reach the JSON validation error instead of a
/// bare 413.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

const ALLOWED_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp", "image/gif"];

#[derive(Debug, Error)]
pub enum CloudinaryError {
    #[error("cloudinary credentials are not configured")]
    MissingConfig,

    #[error("upload rejected: {0}")]
    Upload(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from cloudinary")]
    MalformedResponse,
}

/// The subset of the upload response we care about.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadedImage {
    pub secure_url: String,
    pub public_id: String,
}

#[derive(Debug, Deserialize)]
struct UploadErrorBody {
    error: UploadErrorMessage,
}

#[derive(Debug, Deserialize)]
struct UploadErrorMessage {
    message: String,
}

pub struct CloudinaryClient {
    http: reqwest::Client,
    cloud_name: String,
    api_key: String,
    api_secret: String,
}

impl CloudinaryClient {
    pub fn from_config() -> Result<Self, CloudinaryError> {
        let cfg = &config::config().cloudinary;
        if cfg.cloud_name.is_empty() || cfg.api_key.is_empty() || cfg.api_secret.is_empty() {
            return Err(CloudinaryError::MissingConfig);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.upload_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            cloud_name: cfg.cloud_name.clone(),
            api_key: cfg.api_key.clone(),
            api_secret: cfg.api_secret.clone(),
        })
    }

    /// Basic sanity checks before we spend a network round trip.
    pub fn validate_image(
        content_type: &str,
        bytes: &[u8],
    ) -> Result<(), crate::services::DomainError> {
        if !ALLOWED_CONTENT_TYPES.contains(&content_type) {
            return Err(crate::services::DomainError::Validation(format!(
                "Unsupported image type: {}",
                content_type
            )));
        }
        if bytes.is_empty() {
            return Err(crate::services::DomainError::Validation(
                "Image file is empty".to_string(),
            ));
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(crate::services::DomainError::Validation(
                "Image exceeds the 5 MB size limit".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn upload_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        folder: &str,
    ) -> Result<UploadedImage, CloudinaryError> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = sign_params(
            &[("folder", folder), ("timestamp", &timestamp)],
            &self.api_secret,
        );

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", folder.to_string())
            .text("signature", signature)
            .part("file", part);

        let url = format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        );
        let response = self.http.post(&url).multipart(form).send().await?;

        if !response.status().is_success() {
            let message = response
                .json::<UploadErrorBody>()
                .await
                .map(|b| b.error.message)
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(CloudinaryError::Upload(message));
        }

        response
            .json::<UploadedImage>()
            .await
            .map_err(|_| CloudinaryError::MalformedResponse)
    }
}

/// Cloudinary signature scheme: parameters sorted by key, joined as
/// `k=v&k=v`, the secret appended, the whole thing SHA-256 hashed.
fn sign_params(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted: Vec<_> = params.to_vec();
    sorted.sort_by_key(|(k, _)| *k);

    let joined = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_is_stable_and_key_sorted() {
        let a = sign_params(&[("timestamp", "1700000000"), ("folder", "portfolio")], "s3cret");
        let b = sign_params(&[("folder", "portfolio"), ("timestamp", "1700000000")], "s3cret");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn signature_depends_on_secret() {
        let a = sign_params(&[("timestamp", "1700000000")], "secret-a");
        let b = sign_params(&[("timestamp", "1700000000")], "secret-b");
        assert_ne!(a, b);
    }

    #[test]
    fn oversized_and_unsupported_images_are_rejected() {
        assert!(CloudinaryClient::validate_image("image/png", &[1, 2, 3]).is_ok());
        assert!(CloudinaryClient::validate_image("text/plain", &[1, 2, 3]).is_err());
        assert!(CloudinaryClient::validate_image("image/png", &[]).is_err());

        let big = vec![0u8; MAX_IMAGE_BYTES + 1];
        assert!(CloudinaryClient::validate_image("image/png", &big).is_err());
    }
}
