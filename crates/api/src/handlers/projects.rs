//! Handlers for portfolio projects: public localized reads plus admin CRUD,
//! translations, and the technique junction.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::content::ContentService;
use atelier_db::models::project::{
    CreateProject, SetProjectTechniques, UpdateProject, UpsertProjectTranslation,
};
use atelier_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{require_locale, resolve_public_locale, LocaleQuery};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/content/{locale}/projects
pub async fn list_public(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> impl IntoResponse {
    let locale = resolve_public_locale(&locale, &state);
    let projects = ContentService::active_projects(&state.pool, locale).await;

    Json(DataResponse { data: projects })
}

/// GET /api/v1/content/{locale}/projects/{id}
pub async fn get_public(
    State(state): State<AppState>,
    Path((locale, id)): Path<(String, DbId)>,
) -> AppResult<impl IntoResponse> {
    let locale = resolve_public_locale(&locale, &state);
    let project = ContentService::project_by_id(&state.pool, id, locale)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    Ok(Json(DataResponse { data: project }))
}

// ---------------------------------------------------------------------------
// Admin endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/projects?locale=
pub async fn list_admin(
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
) -> AppResult<impl IntoResponse> {
    let locale = query.resolve(&state)?;
    let graphs = ProjectRepo::list_all(&state.pool, locale).await?;
    let projects: Vec<_> = graphs.iter().map(|g| g.project(locale)).collect();

    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/admin/projects/{id}?locale=
///
/// One project regardless of active state, for the edit form.
pub async fn get_admin(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(query): Query<LocaleQuery>,
) -> AppResult<impl IntoResponse> {
    let locale = query.resolve(&state)?;
    let project = ProjectRepo::find_by_id(&state.pool, id, locale)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?
        .project(locale);

    Ok(Json(DataResponse { data: project }))
}

/// POST /api/v1/admin/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::from_validation)?;

    let project = ProjectRepo::create(&state.pool, &input).await?;

    tracing::info!(project_id = project.id, slug = %project.slug, "Project created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// PUT /api/v1/admin/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::from_validation)?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/admin/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = ProjectRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }

    tracing::info!(project_id = id, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/projects/{id}/feature
pub async fn feature(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    set_featured(state, id, true).await
}

/// POST /api/v1/admin/projects/{id}/unfeature
pub async fn unfeature(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    set_featured(state, id, false).await
}

async fn set_featured(state: AppState, id: DbId, featured: bool) -> AppResult<impl IntoResponse> {
    let input = UpdateProject {
        slug: None,
        image_url: None,
        repo_url: None,
        live_url: None,
        is_active: None,
        is_featured: Some(featured),
    };

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    tracing::info!(project_id = id, featured, "Project feature flag changed");

    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/v1/admin/projects/{id}/translations/{locale}
pub async fn upsert_translation(
    State(state): State<AppState>,
    Path((id, locale)): Path<(DbId, String)>,
    Json(input): Json<UpsertProjectTranslation>,
) -> AppResult<impl IntoResponse> {
    let locale = require_locale(&locale)?;
    input.validate().map_err(AppError::from_validation)?;

    let translation = ProjectRepo::upsert_translation(&state.pool, id, locale, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    tracing::info!(project_id = id, locale = locale.as_str(), "Project translation upserted");

    Ok(Json(DataResponse { data: translation }))
}

/// PUT /api/v1/admin/projects/{id}/techniques
pub async fn set_techniques(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetProjectTechniques>,
) -> AppResult<impl IntoResponse> {
    let found = ProjectRepo::set_techniques(&state.pool, id, &input.technique_ids).await?;
    if !found {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }

    tracing::info!(
        project_id = id,
        techniques = input.technique_ids.len(),
        "Project technique set replaced",
    );

    Ok(StatusCode::NO_CONTENT)
}
