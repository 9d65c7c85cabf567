use thiserror::Error;

use crate::database::manager::DatabaseError;

pub mod auth_service;
pub mod client_service;
pub mod cloudinary;
pub mod profile_service;
pub mod project_service;
pub mod social_service;
pub mod technology_service;
pub mod work_experience_service;

/// Use-case level error taxonomy. Handlers convert this into `ApiError`,
/// so services stay free of HTTP concerns.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Pool(#[from] DatabaseError),

    #[error("{0}")]
    Internal(String),
}
