//! Work experience use cases.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::manager::DatabaseManager;
use crate::database::models::profile::Profile;
use crate::database::models::work_experience::{
    CreateWorkExperience, UpdateWorkExperience, WorkExperience,
};
use crate::database::repositories::{ProfileRepo, UserRepo, WorkExperienceRepo};
use crate::services::DomainError;

pub struct WorkExperienceService {
    pool: PgPool,
}

impl WorkExperienceService {
    pub async fn new() -> Result<Self, DomainError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    async fn my_profile(&self, user_id: Uuid) -> Result<Profile, DomainError> {
        ProfileRepo::find_by_user_id(&self.pool, user_id)
            .await?
            .ok_or_else(|| DomainError::Validation("User has no profile yet".to_string()))
    }

    async fn owned_work_experience(
        &self,
        profile: &Profile,
        work_experience_id: Uuid,
    ) -> Result<WorkExperience, DomainError> {
        let work_experience = WorkExperienceRepo::find_by_id(&self.pool, work_experience_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Work experience not found".to_string()))?;
        if work_experience.profile_id != profile.id {
            return Err(DomainError::Forbidden(
                "You do not have permission to access this work experience".to_string(),
            ));
        }
        Ok(work_experience)
    }

    pub async fn create_work_experience(
        &self,
        user_id: Uuid,
        input: CreateWorkExperience,
    ) -> Result<WorkExperience, DomainError> {
        validate_date_range(input.start_date, input.end_date)?;
        let profile = self.my_profile(user_id).await?;
        let work_experience =
            WorkExperienceRepo::create(&self.pool, profile.id, &input, user_id).await?;
        Ok(work_experience)
    }

    pub async fn work_experience_by_id(
        &self,
        user_id: Uuid,
        work_experience_id: Uuid,
    ) -> Result<WorkExperience, DomainError> {
        let profile = self.my_profile(user_id).await?;
        self.owned_work_experience(&profile, work_experience_id).await
    }

    pub async fn my_work_experiences(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<WorkExperience>, DomainError> {
        let profile = self.my_profile(user_id).await?;
        let rows = WorkExperienceRepo::list_by_profile(&self.pool, profile.id).await?;
        Ok(rows)
    }

    pub async fn update_work_experience(
        &self,
        user_id: Uuid,
        work_experience_id: Uuid,
        input: UpdateWorkExperience,
    ) -> Result<WorkExperience, DomainError> {
        let profile = self.my_profile(user_id).await?;
        let existing = self.owned_work_experience(&profile, work_experience_id).await?;

        // Validate against the dates the row will end up with; an explicit
        // null end date marks the position as current again
        let start = input.start_date.unwrap_or(existing.start_date);
        let end = match input.end_date {
            Some(value) => value,
            None => existing.end_date,
        };
        validate_date_range(start, end)?;

        WorkExperienceRepo::update(&self.pool, work_experience_id, &input, user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Work experience not found".to_string()))
    }

    pub async fn delete_work_experience(
        &self,
        user_id: Uuid,
        work_experience_id: Uuid,
    ) -> Result<(), DomainError> {
        let profile = self.my_profile(user_id).await?;
        self.owned_work_experience(&profile, work_experience_id).await?;
        WorkExperienceRepo::soft_delete(&self.pool, work_experience_id, user_id).await?;
        Ok(())
    }

    pub async fn public_work_experiences(
        &self,
        username: &str,
    ) -> Result<Vec<WorkExperience>, DomainError> {
        let user = UserRepo::find_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| DomainError::NotFound("User not found".to_string()))?;
        let profile = ProfileRepo::find_by_user_id(&self.pool, user.id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Profile not found".to_string()))?;
        let rows = WorkExperienceRepo::list_by_profile(&self.pool, profile.id).await?;
        Ok(rows)
    }
}

/// `end_date` is `None` for a current position.
fn validate_date_range(start: NaiveDate, end: Option<NaiveDate>) -> Result<(), DomainError> {
    if let Some(end) = end {
        if end < start {
            return Err(DomainError::Validation(
                "End date cannot be earlier than start date".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn end_before_start_is_rejected() {
        assert!(validate_date_range(date(2022, 5, 1), Some(date(2021, 1, 1))).is_err());
        assert!(validate_date_range(date(2021, 1, 1), Some(date(2022, 5, 1))).is_ok());
    }

    #[test]
    fn open_ended_positions_are_valid() {
        assert!(validate_date_range(date(2022, 5, 1), None).is_ok());
    }

    #[test]
    fn same_day_start_and_end_is_valid() {
        assert!(validate_date_range(date(2022, 5, 1), Some(date(2022, 5, 1))).is_ok());
    }
}
