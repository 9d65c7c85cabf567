use std::str::FromStr;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config;

pub mod password;

/// JWT claims asserted for an authenticated user.
/// `sub` carries the user's email, matching what the login flow issues.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub user_id: Uuid,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(email: String, role: String, user_id: Uuid) -> Self {
        let now = Utc::now();
        let expire_minutes = config::config().security.access_token_expire_minutes;
        let exp = (now + Duration::minutes(expire_minutes)).timestamp();

        Self {
            sub: email,
            role,
            user_id,
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid JWT token: {0}")]
    InvalidToken(String),

    #[error("Invalid JWT secret")]
    InvalidSecret,

    #[error("Unsupported JWT algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

fn signing_algorithm() -> Result<Algorithm, JwtError> {
    let name = &config::config().security.jwt_algorithm;
    Algorithm::from_str(name).map_err(|_| JwtError::UnsupportedAlgorithm(name.clone()))
}

pub fn generate_jwt(claims: &Claims) -> Result<String, JwtError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::new(signing_algorithm()?);

    encode(&header, claims, &encoding_key).map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

/// Validate a bearer token and extract its claims. Signature and expiry are
/// both checked; an expired or tampered token is rejected.
pub fn verify_jwt(token: &str) -> Result<Claims, JwtError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::new(signing_algorithm()?);

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| JwtError::InvalidToken(e.to_string()))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_secret<F: FnOnce()>(f: F) {
        std::env::set_var("SECRET_KEY", "test-secret-for-unit-tests");
        f();
    }

    #[test]
    fn claims_expire_in_the_future() {
        with_secret(|| {
            let claims = Claims::new("a@b.com".into(), "admin".into(), Uuid::new_v4());
            assert!(claims.exp > claims.iat);
        });
    }

    #[test]
    fn token_round_trips() {
        with_secret(|| {
            let user_id = Uuid::new_v4();
            let claims = Claims::new("round@trip.dev".into(), "admin".into(), user_id);
            let token = generate_jwt(&claims).expect("token should be generated");

            let decoded = verify_jwt(&token).expect("token should verify");
            assert_eq!(decoded.sub, "round@trip.dev");
            assert_eq!(decoded.role, "admin");
            assert_eq!(decoded.user_id, user_id);
        });
    }

    #[test]
    fn expired_token_is_rejected() {
        with_secret(|| {
            let now = Utc::now();
            // Past the default validation leeway
            let claims = Claims {
                sub: "late@example.com".into(),
                role: "admin".into(),
                user_id: Uuid::new_v4(),
                exp: (now - Duration::hours(2)).timestamp(),
                iat: (now - Duration::hours(3)).timestamp(),
            };
            let token = generate_jwt(&claims).expect("token should be generated");
            assert!(verify_jwt(&token).is_err());
        });
    }

    #[test]
    fn tampered_token_is_rejected() {
        with_secret(|| {
            let claims = Claims::new("a@b.com".into(), "admin".into(), Uuid::new_v4());
            let mut token = generate_jwt(&claims).expect("token should be generated");
            // Flip a character in the signature segment
            token.pop();
            token.push('x');
            assert!(verify_jwt(&token).is_err());
        });
    }
}
