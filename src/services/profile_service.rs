//! Profile use cases. Each user owns exactly one profile and all portfolio
//! content hangs off it.

use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::profile::{
    normalize_person_name, CreateProfile, Profile, UpdateProfile, MAX_BIO_LENGTH,
};
use crate::database::repositories::{ProfileRepo, UserRepo};
use crate::services::DomainError;

pub struct ProfileService {
    pool: PgPool,
}

impl ProfileService {
    pub async fn new() -> Result<Self, DomainError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    pub async fn create_profile(
        &self,
        user_id: Uuid,
        mut input: CreateProfile,
    ) -> Result<Profile, DomainError> {
        input.name = normalize_person_name(&input.name);
        input.last_name = normalize_person_name(&input.last_name);
        validate_profile_fields(Some(&input.name), Some(&input.last_name), input.bio_summary.as_deref())?;

        if ProfileRepo::find_by_user_id(&self.pool, user_id).await?.is_some() {
            return Err(DomainError::Conflict(
                "User already has a profile".to_string(),
            ));
        }

        // Profile email mirrors the account email for cheap public reads
        let user = UserRepo::find_by_id(&self.pool, user_id)
            .await?
            .ok_or_else(|| DomainError::Unauthorized("User no longer exists".to_string()))?;

        let profile = ProfileRepo::create(&self.pool, user_id, &user.email, &input).await?;
        Ok(profile)
    }

    pub async fn my_profile(&self, user_id: Uuid) -> Result<Profile, DomainError> {
        ProfileRepo::find_by_user_id(&self.pool, user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Profile not found".to_string()))
    }

    pub async fn update_profile(
        &self,
        user_id: Uuid,
        mut input: UpdateProfile,
    ) -> Result<Profile, DomainError> {
        if let Some(name) = &input.name {
            input.name = Some(normalize_person_name(name));
        }
        if let Some(last_name) = &input.last_name {
            input.last_name = Some(normalize_person_name(last_name));
        }
        validate_profile_fields(
            input.name.as_deref(),
            input.last_name.as_deref(),
            input.bio_summary.as_deref(),
        )?;

        ProfileRepo::update_by_user_id(&self.pool, user_id, &input)
            .await?
            .ok_or_else(|| DomainError::NotFound("Profile not found".to_string()))
    }

    /// Resolve a public profile by account username.
    pub async fn public_profile(&self, username: &str) -> Result<Profile, DomainError> {
        let user = UserRepo::find_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| DomainError::NotFound("User not found".to_string()))?;

        ProfileRepo::find_by_user_id(&self.pool, user.id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Profile not found".to_string()))
    }
}

/// Shared field rules for create and update. `None` means "not being changed".
fn validate_profile_fields(
    name: Option<&str>,
    last_name: Option<&str>,
    bio_summary: Option<&str>,
) -> Result<(), DomainError> {
    if let Some(name) = name {
        if name.is_empty() {
            return Err(DomainError::Validation("Name is required".to_string()));
        }
    }
    if let Some(last_name) = last_name {
        if last_name.is_empty() {
            return Err(DomainError::Validation("Last name is required".to_string()));
        }
    }
    if let Some(bio) = bio_summary {
        if bio.chars().count() > MAX_BIO_LENGTH {
            return Err(DomainError::Validation(format!(
                "Bio cannot exceed {} characters",
                MAX_BIO_LENGTH
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        assert!(validate_profile_fields(Some(""), Some("Valdez"), None).is_err());
        assert!(validate_profile_fields(Some("Juan"), Some(""), None).is_err());
        assert!(validate_profile_fields(Some("Juan"), Some("Valdez"), None).is_ok());
    }

    #[test]
    fn oversized_bio_is_rejected() {
        let long_bio = "x".repeat(MAX_BIO_LENGTH + 1);
        assert!(validate_profile_fields(None, None, Some(&long_bio)).is_err());

        let max_bio = "x".repeat(MAX_BIO_LENGTH);
        assert!(validate_profile_fields(None, None, Some(&max_bio)).is_ok());
    }

    #[test]
    fn absent_fields_are_not_validated() {
        assert!(validate_profile_fields(None, None, None).is_ok());
    }
}
