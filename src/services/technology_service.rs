//! Technology use cases: the skills/tools list attached to a profile.

use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::profile::Profile;
use crate::database::models::technology::{CreateTechnology, Technology, UpdateTechnology};
use crate::database::repositories::{ProfileRepo, TechnologyRepo, UserRepo};
use crate::services::DomainError;

pub struct TechnologyService {
    pool: PgPool,
}

impl TechnologyService {
    pub async fn new() -> Result<Self, DomainError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    async fn my_profile(&self, user_id: Uuid) -> Result<Profile, DomainError> {
        ProfileRepo::find_by_user_id(&self.pool, user_id)
            .await?
            .ok_or_else(|| DomainError::Validation("User has no profile yet".to_string()))
    }

    async fn owned_technology(
        &self,
        profile: &Profile,
        technology_id: Uuid,
    ) -> Result<Technology, DomainError> {
        let technology = TechnologyRepo::find_by_id(&self.pool, technology_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Technology not found".to_string()))?;
        if technology.profile_id != profile.id {
            return Err(DomainError::Forbidden(
                "You do not have permission to access this technology".to_string(),
            ));
        }
        Ok(technology)
    }

    pub async fn create_technology(
        &self,
        user_id: Uuid,
        input: CreateTechnology,
    ) -> Result<Technology, DomainError> {
        if input.name.trim().is_empty() {
            return Err(DomainError::Validation("Name is required".to_string()));
        }
        let profile = self.my_profile(user_id).await?;
        let technology = TechnologyRepo::create(&self.pool, profile.id, &input, user_id).await?;
        Ok(technology)
    }

    pub async fn technology_by_id(
        &self,
        user_id: Uuid,
        technology_id: Uuid,
    ) -> Result<Technology, DomainError> {
        let profile = self.my_profile(user_id).await?;
        self.owned_technology(&profile, technology_id).await
    }

    pub async fn my_technologies(&self, user_id: Uuid) -> Result<Vec<Technology>, DomainError> {
        let profile = self.my_profile(user_id).await?;
        let technologies = TechnologyRepo::list_by_profile(&self.pool, profile.id).await?;
        Ok(technologies)
    }

    pub async fn update_technology(
        &self,
        user_id: Uuid,
        technology_id: Uuid,
        input: UpdateTechnology,
    ) -> Result<Technology, DomainError> {
        if let Some(name) = &input.name {
            if name.trim().is_empty() {
                return Err(DomainError::Validation("Name is required".to_string()));
            }
        }
        let profile = self.my_profile(user_id).await?;
        self.owned_technology(&profile, technology_id).await?;

        TechnologyRepo::update(&self.pool, technology_id, &input, user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Technology not found".to_string()))
    }

    pub async fn delete_technology(
        &self,
        user_id: Uuid,
        technology_id: Uuid,
    ) -> Result<(), DomainError> {
        let profile = self.my_profile(user_id).await?;
        self.owned_technology(&profile, technology_id).await?;
        TechnologyRepo::soft_delete(&self.pool, technology_id, user_id).await?;
        Ok(())
    }

    pub async fn public_technologies(
        &self,
        username: &str,
    ) -> Result<Vec<Technology>, DomainError> {
        let user = UserRepo::find_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| DomainError::NotFound("User not found".to_string()))?;
        let profile = ProfileRepo::find_by_user_id(&self.pool, user.id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Profile not found".to_string()))?;
        let technologies = TechnologyRepo::list_by_profile(&self.pool, profile.id).await?;
        Ok(technologies)
    }
}
