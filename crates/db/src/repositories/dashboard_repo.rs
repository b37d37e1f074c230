//! Aggregate counts backing the admin dashboard.

use serde::Serialize;
use sqlx::PgPool;

/// Entity counts shown on the admin landing page.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardCounts {
    pub posts: i64,
    pub published_posts: i64,
    pub projects: i64,
    pub skills: i64,
    pub testimonials: i64,
    pub experiences: i64,
    pub educations: i64,
    pub pending_comments: i64,
}

/// Count queries for the dashboard. Each is a single scalar select so the
/// handler can run them concurrently.
pub struct DashboardRepo;

impl DashboardRepo {
    pub async fn count_posts(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM posts")
            .fetch_one(pool)
            .await
    }

    pub async fn count_published_posts(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE is_published")
            .fetch_one(pool)
            .await
    }

    pub async fn count_projects(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await
    }

    pub async fn count_skills(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM skills")
            .fetch_one(pool)
            .await
    }

    pub async fn count_testimonials(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM testimonials")
            .fetch_one(pool)
            .await
    }

    pub async fn count_experiences(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM experiences")
            .fetch_one(pool)
            .await
    }

    pub async fn count_educations(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM educations")
            .fetch_one(pool)
            .await
    }

    pub async fn count_pending_comments(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM post_comments WHERE NOT is_approved")
            .fetch_one(pool)
            .await
    }
}
