//! Handlers for skills.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::content::ContentService;
use atelier_db::models::skill::{CreateSkill, UpdateSkill};
use atelier_db::models::taxonomy::UpsertNameTranslation;
use atelier_db::repositories::SkillRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{require_locale, resolve_public_locale, LocaleQuery};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/content/{locale}/skills
pub async fn list_public(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> impl IntoResponse {
    let locale = resolve_public_locale(&locale, &state);
    let skills = ContentService::active_skills(&state.pool, locale).await;

    Json(DataResponse { data: skills })
}

/// GET /api/v1/admin/skills?locale=
pub async fn list_admin(
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
) -> AppResult<impl IntoResponse> {
    let locale = query.resolve(&state)?;
    let graphs = SkillRepo::list_all(&state.pool, locale).await?;
    let skills: Vec<_> = graphs.iter().map(|g| g.project(locale)).collect();

    Ok(Json(DataResponse { data: skills }))
}

/// GET /api/v1/admin/skills/{id}?locale=
pub async fn get_admin(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(query): Query<LocaleQuery>,
) -> AppResult<impl IntoResponse> {
    let locale = query.resolve(&state)?;
    let skill = SkillRepo::find_by_id(&state.pool, id, locale)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Skill", id }))?
        .project(locale);

    Ok(Json(DataResponse { data: skill }))
}

/// POST /api/v1/admin/skills
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSkill>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::from_validation)?;

    let skill = SkillRepo::create(&state.pool, &input).await?;

    tracing::info!(skill_id = skill.id, "Skill created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: skill })))
}

/// PUT /api/v1/admin/skills/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSkill>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::from_validation)?;

    let skill = SkillRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Skill", id }))?;

    Ok(Json(DataResponse { data: skill }))
}

/// DELETE /api/v1/admin/skills/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = SkillRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound { entity: "Skill", id }));
    }

    tracing::info!(skill_id = id, "Skill deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/skills/{id}/translations/{locale}
pub async fn upsert_translation(
    State(state): State<AppState>,
    Path((id, locale)): Path<(DbId, String)>,
    Json(input): Json<UpsertNameTranslation>,
) -> AppResult<impl IntoResponse> {
    let locale = require_locale(&locale)?;
    input.validate().map_err(AppError::from_validation)?;

    let found = SkillRepo::upsert_translation(&state.pool, id, locale, &input).await?;
    if !found {
        return Err(AppError::Core(CoreError::NotFound { entity: "Skill", id }));
    }

    tracing::info!(skill_id = id, locale = locale.as_str(), "Skill translation upserted");

    Ok(StatusCode::NO_CONTENT)
}
