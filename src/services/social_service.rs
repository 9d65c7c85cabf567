//! Social link use cases.

use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::profile::Profile;
use crate::database::models::social::{CreateSocial, Social, UpdateSocial};
use crate::database::repositories::{ProfileRepo, SocialRepo, UserRepo};
use crate::services::DomainError;

pub struct SocialService {
    pool: PgPool,
}

impl SocialService {
    pub async fn new() -> Result<Self, DomainError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    async fn my_profile(&self, user_id: Uuid) -> Result<Profile, DomainError> {
        ProfileRepo::find_by_user_id(&self.pool, user_id)
            .await?
            .ok_or_else(|| DomainError::Validation("User has no profile yet".to_string()))
    }

    async fn owned_social(
        &self,
        profile: &Profile,
        social_id: Uuid,
    ) -> Result<Social, DomainError> {
        let social = SocialRepo::find_by_id(&self.pool, social_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Social link not found".to_string()))?;
        if social.profile_id != profile.id {
            return Err(DomainError::Forbidden(
                "You do not have permission to access this social link".to_string(),
            ));
        }
        Ok(social)
    }

    pub async fn create_social(
        &self,
        user_id: Uuid,
        input: CreateSocial,
    ) -> Result<Social, DomainError> {
        validate_social_fields(Some(&input.platform), Some(&input.url))?;
        let profile = self.my_profile(user_id).await?;
        let social = SocialRepo::create(&self.pool, profile.id, &input, user_id).await?;
        Ok(social)
    }

    pub async fn social_by_id(
        &self,
        user_id: Uuid,
        social_id: Uuid,
    ) -> Result<Social, DomainError> {
        let profile = self.my_profile(user_id).await?;
        self.owned_social(&profile, social_id).await
    }

    pub async fn my_socials(&self, user_id: Uuid) -> Result<Vec<Social>, DomainError> {
        let profile = self.my_profile(user_id).await?;
        let socials = SocialRepo::list_by_profile(&self.pool, profile.id).await?;
        Ok(socials)
    }

    pub async fn update_social(
        &self,
        user_id: Uuid,
        social_id: Uuid,
        input: UpdateSocial,
    ) -> Result<Social, DomainError> {
        validate_social_fields(input.platform.as_deref(), input.url.as_deref())?;
        let profile = self.my_profile(user_id).await?;
        self.owned_social(&profile, social_id).await?;

        SocialRepo::update(&self.pool, social_id, &input, user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Social link not found".to_string()))
    }

    pub async fn delete_social(&self, user_id: Uuid, social_id: Uuid) -> Result<(), DomainError> {
        let profile = self.my_profile(user_id).await?;
        self.owned_social(&profile, social_id).await?;
        SocialRepo::soft_delete(&self.pool, social_id, user_id).await?;
        Ok(())
    }

    pub async fn public_socials(&self, username: &str) -> Result<Vec<Social>, DomainError> {
        let user = UserRepo::find_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| DomainError::NotFound("User not found".to_string()))?;
        let profile = ProfileRepo::find_by_user_id(&self.pool, user.id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Profile not found".to_string()))?;
        let socials = SocialRepo::list_by_profile(&self.pool, profile.id).await?;
        Ok(socials)
    }
}

fn validate_social_fields(platform: Option<&str>, url: Option<&str>) -> Result<(), DomainError> {
    if let Some(platform) = platform {
        if platform.trim().is_empty() {
            return Err(DomainError::Validation("Platform is required".to_string()));
        }
    }
    if let Some(url) = url {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(DomainError::Validation(
                "URL must start with http:// or https://".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_scheme_is_enforced() {
        assert!(validate_social_fields(Some("github"), Some("https://github.com/x")).is_ok());
        assert!(validate_social_fields(Some("github"), Some("ftp://github.com/x")).is_err());
        assert!(validate_social_fields(Some(""), Some("https://github.com/x")).is_err());
    }

    #[test]
    fn absent_fields_are_not_validated() {
        assert!(validate_social_fields(None, None).is_ok());
    }
}
