//! Registration and login use cases.

use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password, MIN_PASSWORD_LENGTH};
use crate::auth::{generate_jwt, Claims};
use crate::config;
use crate::database::manager::DatabaseManager;
use crate::database::models::user::{CreateUser, User, UserRole};
use crate::database::repositories::UserRepo;
use crate::services::DomainError;

pub struct AuthService {
    pool: PgPool,
}

/// Issued token pair returned to the client on login.
#[derive(Debug)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: &'static str,
}

impl AuthService {
    pub async fn new() -> Result<Self, DomainError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    /// Register a new account. Every registration gets the admin role so the
    /// owner can manage their own portfolio; the configured superadmin email
    /// is promoted to superadmin.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, DomainError> {
        let username = username.trim();
        let email = email.trim().to_lowercase();

        if username.chars().count() < 3 {
            return Err(DomainError::Validation(
                "Username must be at least 3 characters long".to_string(),
            ));
        }
        if !email.contains('@') {
            return Err(DomainError::Validation(
                "Email must have a valid format".to_string(),
            ));
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::Validation(format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            )));
        }

        if UserRepo::find_by_email(&self.pool, &email).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "Email {} is already registered",
                email
            )));
        }
        if UserRepo::find_by_username(&self.pool, username).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "Username {} is already taken",
                username
            )));
        }

        let role = match &config::config().security.superadmin_email {
            Some(superadmin) if superadmin == &email => UserRole::Superadmin,
            _ => UserRole::Admin,
        };

        let password_hash = hash_password(password)
            .map_err(|e| DomainError::Internal(format!("password hashing failed: {}", e)))?;

        let user = UserRepo::create(
            &self.pool,
            &CreateUser {
                username: username.to_string(),
                email,
                password_hash,
                role,
            },
        )
        .await?;

        Ok(user)
    }

    /// Validate credentials and issue a bearer token. The same error is
    /// returned for an unknown email and a wrong password.
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, DomainError> {
        let email = email.trim().to_lowercase();

        let user = UserRepo::find_by_email(&self.pool, &email)
            .await?
            .ok_or_else(|| DomainError::Unauthorized("Incorrect credentials".to_string()))?;

        let valid = verify_password(password, &user.password_hash)
            .map_err(|e| DomainError::Internal(format!("password verification failed: {}", e)))?;
        if !valid {
            return Err(DomainError::Unauthorized("Incorrect credentials".to_string()));
        }

        UserRepo::record_login(&self.pool, user.id).await?;

        let claims = Claims::new(user.email.clone(), user.role().to_string(), user.id);
        let access_token = generate_jwt(&claims)
            .map_err(|e| DomainError::Internal(format!("token issuance failed: {}", e)))?;

        Ok(IssuedToken { access_token, token_type: "bearer" })
    }

    /// Load the full user row for an authenticated identity.
    pub async fn current_user(&self, user_id: Uuid) -> Result<User, DomainError> {
        UserRepo::find_by_id(&self.pool, user_id)
            .await?
            .ok_or_else(|| DomainError::Unauthorized("User no longer exists".to_string()))
    }
}
