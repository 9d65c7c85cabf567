use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Social {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub platform: String,
    pub url: String,
    pub icon_name: Option<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSocial {
    pub platform: String,
    pub url: String,
    pub icon_name: Option<String>,
    #[serde(default)]
    pub position: i32,
}

/// Partial update; absent fields keep their current values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSocial {
    pub platform: Option<String>,
    pub url: Option<String>,
    pub icon_name: Option<String>,
    pub position: Option<i32>,
}
