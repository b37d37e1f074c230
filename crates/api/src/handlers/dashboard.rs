//! Handler for the admin dashboard counts.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use atelier_db::repositories::{DashboardCounts, DashboardRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/dashboard
///
/// All counts are independent scalar selects, issued concurrently.
pub async fn get_counts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pool = &state.pool;

    let (
        posts,
        published_posts,
        projects,
        skills,
        testimonials,
        experiences,
        educations,
        pending_comments,
    ) = tokio::try_join!(
        DashboardRepo::count_posts(pool),
        DashboardRepo::count_published_posts(pool),
        DashboardRepo::count_projects(pool),
        DashboardRepo::count_skills(pool),
        DashboardRepo::count_testimonials(pool),
        DashboardRepo::count_experiences(pool),
        DashboardRepo::count_educations(pool),
        DashboardRepo::count_pending_comments(pool),
    )?;

    Ok(Json(DataResponse {
        data: DashboardCounts {
            posts,
            published_posts,
            projects,
            skills,
            testimonials,
            experiences,
            educations,
            pending_comments,
        },
    }))
}
