use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkExperience {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub job_title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    /// None while the position is current.
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkExperience {
    pub job_title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Partial update; absent fields keep their current values.
/// `end_date` accepts an explicit `null` to mark the position as current.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWorkExperience {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub end_date: Option<Option<NaiveDate>>,
    pub description: Option<String>,
}
