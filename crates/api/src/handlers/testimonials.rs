//! Handlers for testimonials.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::content::ContentService;
use atelier_db::models::testimonial::{
    CreateTestimonial, UpdateTestimonial, UpsertTestimonialTranslation,
};
use atelier_db::repositories::TestimonialRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{require_locale, resolve_public_locale, LocaleQuery};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/content/{locale}/testimonials
pub async fn list_public(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> impl IntoResponse {
    let locale = resolve_public_locale(&locale, &state);
    let testimonials = ContentService::active_testimonials(&state.pool, locale).await;

    Json(DataResponse { data: testimonials })
}

/// GET /api/v1/admin/testimonials?locale=
pub async fn list_admin(
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
) -> AppResult<impl IntoResponse> {
    let locale = query.resolve(&state)?;
    let graphs = TestimonialRepo::list_all(&state.pool, locale).await?;
    let testimonials: Vec<_> = graphs.iter().map(|g| g.project(locale)).collect();

    Ok(Json(DataResponse { data: testimonials }))
}

/// GET /api/v1/admin/testimonials/{id}?locale=
pub async fn get_admin(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(query): Query<LocaleQuery>,
) -> AppResult<impl IntoResponse> {
    let locale = query.resolve(&state)?;
    let testimonial = TestimonialRepo::find_by_id(&state.pool, id, locale)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }))?
        .project(locale);

    Ok(Json(DataResponse { data: testimonial }))
}

/// POST /api/v1/admin/testimonials
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTestimonial>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::from_validation)?;

    let testimonial = TestimonialRepo::create(&state.pool, &input).await?;

    tracing::info!(testimonial_id = testimonial.id, "Testimonial created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: testimonial })))
}

/// PUT /api/v1/admin/testimonials/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTestimonial>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::from_validation)?;

    let testimonial = TestimonialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }))?;

    Ok(Json(DataResponse { data: testimonial }))
}

/// DELETE /api/v1/admin/testimonials/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = TestimonialRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }));
    }

    tracing::info!(testimonial_id = id, "Testimonial deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/testimonials/{id}/translations/{locale}
pub async fn upsert_translation(
    State(state): State<AppState>,
    Path((id, locale)): Path<(DbId, String)>,
    Json(input): Json<UpsertTestimonialTranslation>,
) -> AppResult<impl IntoResponse> {
    let locale = require_locale(&locale)?;
    input.validate().map_err(AppError::from_validation)?;

    let found = TestimonialRepo::upsert_translation(&state.pool, id, locale, &input).await?;
    if !found {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }));
    }

    tracing::info!(
        testimonial_id = id,
        locale = locale.as_str(),
        "Testimonial translation upserted",
    );

    Ok(StatusCode::NO_CONTENT)
}
