//! Client testimonial use cases.

use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::client::{Client, CreateClient, UpdateClient};
use crate::database::models::profile::Profile;
use crate::database::repositories::{ClientRepo, ProfileRepo, UserRepo};
use crate::services::DomainError;

pub struct ClientService {
    pool: PgPool,
}

impl ClientService {
    pub async fn new() -> Result<Self, DomainError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    async fn my_profile(&self, user_id: Uuid) -> Result<Profile, DomainError> {
        ProfileRepo::find_by_user_id(&self.pool, user_id)
            .await?
            .ok_or_else(|| DomainError::Validation("User has no profile yet".to_string()))
    }

    async fn owned_client(
        &self,
        profile: &Profile,
        client_id: Uuid,
    ) -> Result<Client, DomainError> {
        let client = ClientRepo::find_by_id(&self.pool, client_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Client not found".to_string()))?;
        if client.profile_id != profile.id {
            return Err(DomainError::Forbidden(
                "You do not have permission to access this client".to_string(),
            ));
        }
        Ok(client)
    }

    pub async fn create_client(
        &self,
        user_id: Uuid,
        input: CreateClient,
    ) -> Result<Client, DomainError> {
        if input.name.trim().is_empty() {
            return Err(DomainError::Validation("Name is required".to_string()));
        }
        let profile = self.my_profile(user_id).await?;
        let client = ClientRepo::create(&self.pool, profile.id, &input, user_id).await?;
        Ok(client)
    }

    pub async fn client_by_id(
        &self,
        user_id: Uuid,
        client_id: Uuid,
    ) -> Result<Client, DomainError> {
        let profile = self.my_profile(user_id).await?;
        self.owned_client(&profile, client_id).await
    }

    pub async fn my_clients(&self, user_id: Uuid) -> Result<Vec<Client>, DomainError> {
        let profile = self.my_profile(user_id).await?;
        let clients = ClientRepo::list_by_profile(&self.pool, profile.id).await?;
        Ok(clients)
    }

    pub async fn update_client(
        &self,
        user_id: Uuid,
        client_id: Uuid,
        input: UpdateClient,
    ) -> Result<Client, DomainError> {
        if let Some(name) = &input.name {
            if name.trim().is_empty() {
                return Err(DomainError::Validation("Name is required".to_string()));
            }
        }
        let profile = self.my_profile(user_id).await?;
        self.owned_client(&profile, client_id).await?;

        ClientRepo::update(&self.pool, client_id, &input, user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Client not found".to_string()))
    }

    pub async fn delete_client(&self, user_id: Uuid, client_id: Uuid) -> Result<(), DomainError> {
        let profile = self.my_profile(user_id).await?;
        self.owned_client(&profile, client_id).await?;
        ClientRepo::soft_delete(&self.pool, client_id, user_id).await?;
        Ok(())
    }

    pub async fn public_clients(&self, username: &str) -> Result<Vec<Client>, DomainError> {
        let user = UserRepo::find_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| DomainError::NotFound("User not found".to_string()))?;
        let profile = ProfileRepo::find_by_user_id(&self.pool, user.id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Profile not found".to_string()))?;
        let clients = ClientRepo::list_by_profile(&self.pool, profile.id).await?;
        Ok(clients)
    }
}
