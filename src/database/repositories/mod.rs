pub mod client_repo;
pub mod profile_repo;
pub mod project_repo;
pub mod social_repo;
pub mod technology_repo;
pub mod user_repo;
pub mod work_experience_repo;

pub use client_repo::ClientRepo;
pub use profile_repo::ProfileRepo;
pub use project_repo::{ProjectPreviewRepo, ProjectRepo, ProjectTechRepo};
pub use social_repo::SocialRepo;
pub use technology_repo::TechnologyRepo;
pub use user_repo::UserRepo;
pub use work_experience_repo::WorkExperienceRepo;
