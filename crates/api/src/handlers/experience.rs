//! Handlers for work experience entries.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::content::ContentService;
use atelier_db::models::experience::{
    CreateExperience, UpdateExperience, UpsertExperienceTranslation,
};
use atelier_db::repositories::ExperienceRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{require_locale, resolve_public_locale, LocaleQuery};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/content/{locale}/experience
pub async fn list_public(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> impl IntoResponse {
    let locale = resolve_public_locale(&locale, &state);
    let entries = ContentService::active_experiences(&state.pool, locale).await;

    Json(DataResponse { data: entries })
}

/// GET /api/v1/admin/experience?locale=
pub async fn list_admin(
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
) -> AppResult<impl IntoResponse> {
    let locale = query.resolve(&state)?;
    let graphs = ExperienceRepo::list_all(&state.pool, locale).await?;
    let entries: Vec<_> = graphs.iter().map(|g| g.project(locale)).collect();

    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/admin/experience/{id}?locale=
pub async fn get_admin(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(query): Query<LocaleQuery>,
) -> AppResult<impl IntoResponse> {
    let locale = query.resolve(&state)?;
    let entry = ExperienceRepo::find_by_id(&state.pool, id, locale)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Experience",
            id,
        }))?
        .project(locale);

    Ok(Json(DataResponse { data: entry }))
}

/// POST /api/v1/admin/experience
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateExperience>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::from_validation)?;

    let entry = ExperienceRepo::create(&state.pool, &input).await?;

    tracing::info!(experience_id = entry.id, "Experience entry created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// PUT /api/v1/admin/experience/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateExperience>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::from_validation)?;

    let entry = ExperienceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Experience",
            id,
        }))?;

    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/v1/admin/experience/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = ExperienceRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Experience",
            id,
        }));
    }

    tracing::info!(experience_id = id, "Experience entry deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/experience/{id}/translations/{locale}
pub async fn upsert_translation(
    State(state): State<AppState>,
    Path((id, locale)): Path<(DbId, String)>,
    Json(input): Json<UpsertExperienceTranslation>,
) -> AppResult<impl IntoResponse> {
    let locale = require_locale(&locale)?;
    input.validate().map_err(AppError::from_validation)?;

    let found = ExperienceRepo::upsert_translation(&state.pool, id, locale, &input).await?;
    if !found {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Experience",
            id,
        }));
    }

    tracing::info!(
        experience_id = id,
        locale = locale.as_str(),
        "Experience translation upserted",
    );

    Ok(StatusCode::NO_CONTENT)
}
