//! Data access layer. One zero-sized repo struct per aggregate, taking a
//! `&PgPool` per call.

pub mod comment_repo;
pub mod dashboard_repo;
pub mod education_repo;
pub mod experience_repo;
pub mod post_repo;
pub mod project_repo;
pub mod skill_repo;
pub mod taxonomy_repo;
pub mod testimonial_repo;

pub use comment_repo::CommentRepo;
pub use dashboard_repo::{DashboardCounts, DashboardRepo};
pub use education_repo::EducationRepo;
pub use experience_repo::ExperienceRepo;
pub use post_repo::PostRepo;
pub use project_repo::ProjectRepo;
pub use skill_repo::SkillRepo;
pub use taxonomy_repo::{CategoryRepo, TagRepo, TechniqueRepo};
pub use testimonial_repo::TestimonialRepo;
