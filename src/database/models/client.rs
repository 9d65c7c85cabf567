use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Client testimonial attached to a profile.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub name: String,
    pub company: Option<String>,
    pub feedback: Option<String>,
    pub client_photo_url: Option<String>,
    pub project_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateClient {
    pub name: String,
    pub company: Option<String>,
    pub feedback: Option<String>,
    pub client_photo_url: Option<String>,
    pub project_link: Option<String>,
}

/// Partial update; absent fields keep their current values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateClient {
    pub name: Option<String>,
    pub company: Option<String>,
    pub feedback: Option<String>,
    pub client_photo_url: Option<String>,
    pub project_link: Option<String>,
}
