use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Technology category stored as text in `technologies.category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechnologyCategory {
    Frontend,
    Backend,
    Database,
    Devops,
    Mobile,
    Other,
}

impl TechnologyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TechnologyCategory::Frontend => "frontend",
            TechnologyCategory::Backend => "backend",
            TechnologyCategory::Database => "database",
            TechnologyCategory::Devops => "devops",
            TechnologyCategory::Mobile => "mobile",
            TechnologyCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Technology {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub name: String,
    pub category: String,
    pub icon_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTechnology {
    pub name: String,
    pub category: TechnologyCategory,
    pub icon_url: Option<String>,
}

/// Partial update; absent fields keep their current values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTechnology {
    pub name: Option<String>,
    pub category: Option<TechnologyCategory>,
    pub icon_url: Option<String>,
}
