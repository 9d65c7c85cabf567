use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Project category stored as text in `projects.category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Frontend,
    Backend,
    Fullstack,
    Mobile,
    Other,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Frontend => "frontend",
            ProjectCategory::Backend => "backend",
            ProjectCategory::Fullstack => "fullstack",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub title: String,
    pub category: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    pub featured: bool,
    pub work_experience_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectPreview {
    pub id: Uuid,
    pub project_id: Uuid,
    pub image_url: String,
    pub caption: Option<String>,
    pub position: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub is_active: bool,
}

/// Preview image payload embedded in project create/update requests.
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewInput {
    pub image_url: String,
    pub caption: Option<String>,
    #[serde(default)]
    pub position: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub category: ProjectCategory,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub work_experience_id: Option<Uuid>,
    #[serde(default)]
    pub technology_ids: Vec<Uuid>,
    #[serde(default)]
    pub previews: Vec<PreviewInput>,
}

/// Partial update; absent fields keep their current values.
/// `technology_ids` and `previews`, when present, replace the full set.
/// `work_experience_id` accepts an explicit `null` to detach the project.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub category: Option<ProjectCategory>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub live_url: Option<String>,
    pub repo_url: Option<String>,
    pub featured: Option<bool>,
    #[serde(default, deserialize_with = "super::double_option")]
    pub work_experience_id: Option<Option<Uuid>>,
    pub technology_ids: Option<Vec<Uuid>>,
    pub previews: Option<Vec<PreviewInput>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_distinguishes_absent_from_null_work_experience() {
        let absent: UpdateProject = serde_json::from_str(r#"{ "title": "x" }"#).unwrap();
        assert_eq!(absent.work_experience_id, None);

        let cleared: UpdateProject =
            serde_json::from_str(r#"{ "work_experience_id": null }"#).unwrap();
        assert_eq!(cleared.work_experience_id, Some(None));

        let id = Uuid::new_v4();
        let set: UpdateProject =
            serde_json::from_str(&format!(r#"{{ "work_experience_id": "{}" }}"#, id)).unwrap();
        assert_eq!(set.work_experience_id, Some(Some(id)));
    }
}
