//! Handlers for the taxonomy admin surface: tags, categories, techniques.
//!
//! Taxonomy items are only managed here; the public surface sees them
//! embedded in post and project projections.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::taxonomy::{CreateTaxonomyItem, UpsertNameTranslation};
use atelier_db::repositories::{CategoryRepo, TagRepo, TechniqueRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::require_locale;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/tags
pub async fn list_tags(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tags = TagRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: tags }))
}

/// GET /api/v1/admin/tags/{id}
pub async fn get_tag(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let tag = TagRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Tag", id }))?;
    Ok(Json(DataResponse { data: tag }))
}

/// POST /api/v1/admin/tags
pub async fn create_tag(
    State(state): State<AppState>,
    Json(input): Json<CreateTaxonomyItem>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::from_validation)?;

    let tag = TagRepo::create(&state.pool, &input).await?;
    tracing::info!(tag_id = tag.id, slug = %tag.slug, "Tag created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: tag })))
}

/// DELETE /api/v1/admin/tags/{id}
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !TagRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Tag", id }));
    }
    tracing::info!(tag_id = id, "Tag deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/tags/{id}/translations/{locale}
pub async fn upsert_tag_translation(
    State(state): State<AppState>,
    Path((id, locale)): Path<(DbId, String)>,
    Json(input): Json<UpsertNameTranslation>,
) -> AppResult<impl IntoResponse> {
    let locale = require_locale(&locale)?;
    input.validate().map_err(AppError::from_validation)?;

    if !TagRepo::upsert_translation(&state.pool, id, locale, &input).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Tag", id }));
    }
    tracing::info!(tag_id = id, locale = locale.as_str(), "Tag translation upserted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// GET /api/v1/admin/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(DataResponse { data: category }))
}

/// POST /api/v1/admin/categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateTaxonomyItem>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::from_validation)?;

    let category = CategoryRepo::create(&state.pool, &input).await?;
    tracing::info!(category_id = category.id, slug = %category.slug, "Category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// DELETE /api/v1/admin/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !CategoryRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }
    tracing::info!(category_id = id, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/categories/{id}/translations/{locale}
pub async fn upsert_category_translation(
    State(state): State<AppState>,
    Path((id, locale)): Path<(DbId, String)>,
    Json(input): Json<UpsertNameTranslation>,
) -> AppResult<impl IntoResponse> {
    let locale = require_locale(&locale)?;
    input.validate().map_err(AppError::from_validation)?;

    if !CategoryRepo::upsert_translation(&state.pool, id, locale, &input).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }
    tracing::info!(category_id = id, locale = locale.as_str(), "Category translation upserted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Techniques
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/techniques
pub async fn list_techniques(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let techniques = TechniqueRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: techniques }))
}

/// GET /api/v1/admin/techniques/{id}
pub async fn get_technique(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let technique = TechniqueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Technique",
            id,
        }))?;
    Ok(Json(DataResponse { data: technique }))
}

/// POST /api/v1/admin/techniques
pub async fn create_technique(
    State(state): State<AppState>,
    Json(input): Json<CreateTaxonomyItem>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::from_validation)?;

    let technique = TechniqueRepo::create(&state.pool, &input).await?;
    tracing::info!(technique_id = technique.id, slug = %technique.slug, "Technique created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: technique })))
}

/// DELETE /api/v1/admin/techniques/{id}
pub async fn delete_technique(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !TechniqueRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Technique",
            id,
        }));
    }
    tracing::info!(technique_id = id, "Technique deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/techniques/{id}/translations/{locale}
pub async fn upsert_technique_translation(
    State(state): State<AppState>,
    Path((id, locale)): Path<(DbId, String)>,
    Json(input): Json<UpsertNameTranslation>,
) -> AppResult<impl IntoResponse> {
    let locale = require_locale(&locale)?;
    input.validate().map_err(AppError::from_validation)?;

    if !TechniqueRepo::upsert_translation(&state.pool, id, locale, &input).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Technique",
            id,
        }));
    }
    tracing::info!(
        technique_id = id,
        locale = locale.as_str(),
        "Technique translation upserted",
    );

    Ok(StatusCode::NO_CONTENT)
}
