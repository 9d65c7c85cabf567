use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Longest accepted bio, in characters.
pub const MAX_BIO_LENGTH: usize = 500;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub current_title: Option<String>,
    pub bio_summary: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub is_active: bool,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name)
    }
}

/// Request body for creating the authenticated user's profile.
/// The profile email is copied from the user account, not client-supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfile {
    pub name: String,
    pub last_name: String,
    pub current_title: Option<String>,
    pub bio_summary: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub photo_url: Option<String>,
}

/// Partial update; absent fields keep their current values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub current_title: Option<String>,
    pub bio_summary: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub photo_url: Option<String>,
}

/// Collapse internal whitespace and title-case each word, so that
/// " juan   carlos " becomes "Juan Carlos".
pub fn normalize_person_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
