//! Handlers for blog posts: the public localized read surface plus the
//! admin CRUD, translation, tagging, and comment moderation endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::content::ContentService;
use atelier_db::models::post::{
    CreateComment, CreatePost, SetPostTags, UpdatePost, UpsertPostTranslation,
};
use atelier_db::repositories::{CommentRepo, PostRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::{require_locale, resolve_public_locale, LocaleQuery};
use crate::response::DataResponse;
use crate::state::AppState;

/// Payload returned after a like is recorded.
#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub likes: i64,
}

// ---------------------------------------------------------------------------
// Public endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/content/{locale}/posts
///
/// Published posts projected for the locale, newest first. Fails soft: a
/// store outage yields an empty list, never a 500.
pub async fn list_public(
    State(state): State<AppState>,
    Path(locale): Path<String>,
) -> impl IntoResponse {
    let locale = resolve_public_locale(&locale, &state);
    let posts = ContentService::published_posts(&state.pool, locale).await;

    Json(DataResponse { data: posts })
}

/// GET /api/v1/content/{locale}/posts/{id}
pub async fn get_public(
    State(state): State<AppState>,
    Path((locale, id)): Path<(String, DbId)>,
) -> AppResult<impl IntoResponse> {
    let locale = resolve_public_locale(&locale, &state);
    let post = ContentService::post_by_id(&state.pool, id, locale)
        .await
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    Ok(Json(DataResponse { data: post }))
}

/// GET /api/v1/content/{locale}/posts/slug/{slug}
pub async fn get_public_by_slug(
    State(state): State<AppState>,
    Path((locale, slug)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let locale = resolve_public_locale(&locale, &state);
    let post = ContentService::post_by_slug(&state.pool, &slug, locale)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Post with slug '{slug}' not found")))?;

    Ok(Json(DataResponse { data: post }))
}

/// POST /api/v1/content/{locale}/posts/{id}/like
pub async fn like(
    State(state): State<AppState>,
    Path((_locale, id)): Path<(String, DbId)>,
) -> AppResult<impl IntoResponse> {
    let likes = PostRepo::like(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    Ok(Json(DataResponse {
        data: LikeResponse { likes },
    }))
}

/// GET /api/v1/content/{locale}/posts/{id}/comments
///
/// Approved comments in submission order. Fails soft like the other public
/// reads.
pub async fn list_public_comments(
    State(state): State<AppState>,
    Path((locale, id)): Path<(String, DbId)>,
) -> impl IntoResponse {
    let locale = resolve_public_locale(&locale, &state);
    let comments = ContentService::approved_comments(&state.pool, id, locale).await;

    Json(DataResponse { data: comments })
}

/// POST /api/v1/content/{locale}/posts/{id}/comments
///
/// Submit a visitor comment. It lands unapproved and stays out of public
/// counts until moderated.
pub async fn create_comment(
    State(state): State<AppState>,
    Path((_locale, id)): Path<(String, DbId)>,
    Json(input): Json<CreateComment>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::from_validation)?;

    let comment = CommentRepo::create(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    tracing::info!(post_id = id, comment_id = comment.id, "Comment submitted");

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}

// ---------------------------------------------------------------------------
// Admin endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/posts?locale=
///
/// All posts, drafts included, projected for the queried locale.
pub async fn list_admin(
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
) -> AppResult<impl IntoResponse> {
    let locale = query.resolve(&state)?;
    let graphs = PostRepo::list_all(&state.pool, locale).await?;
    let posts: Vec<_> = graphs.iter().map(|g| g.project(locale)).collect();

    Ok(Json(DataResponse { data: posts }))
}

/// GET /api/v1/admin/posts/{id}?locale=
///
/// One post regardless of publish state, for the edit form.
pub async fn get_admin(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(query): Query<LocaleQuery>,
) -> AppResult<impl IntoResponse> {
    let locale = query.resolve(&state)?;
    let post = PostRepo::find_by_id(&state.pool, id, locale)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?
        .project(locale);

    Ok(Json(DataResponse { data: post }))
}

/// POST /api/v1/admin/posts
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePost>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::from_validation)?;

    let post = PostRepo::create(&state.pool, &input).await?;

    tracing::info!(post_id = post.id, slug = %post.slug, "Post created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// PUT /api/v1/admin/posts/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePost>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(AppError::from_validation)?;

    let post = PostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    Ok(Json(DataResponse { data: post }))
}

/// DELETE /api/v1/admin/posts/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = PostRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound { entity: "Post", id }));
    }

    tracing::info!(post_id = id, "Post deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/posts/{id}/publish
pub async fn publish(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    set_published(state, id, true).await
}

/// POST /api/v1/admin/posts/{id}/unpublish
pub async fn unpublish(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    set_published(state, id, false).await
}

async fn set_published(
    state: AppState,
    id: DbId,
    published: bool,
) -> AppResult<impl IntoResponse> {
    let post = PostRepo::set_published(&state.pool, id, published)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    tracing::info!(post_id = id, published, "Post publish state changed");

    Ok(Json(DataResponse { data: post }))
}

/// PUT /api/v1/admin/posts/{id}/translations/{locale}
pub async fn upsert_translation(
    State(state): State<AppState>,
    Path((id, locale)): Path<(DbId, String)>,
    Json(input): Json<UpsertPostTranslation>,
) -> AppResult<impl IntoResponse> {
    let locale = require_locale(&locale)?;
    input.validate().map_err(AppError::from_validation)?;

    let translation = PostRepo::upsert_translation(&state.pool, id, locale, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    tracing::info!(post_id = id, locale = locale.as_str(), "Post translation upserted");

    Ok(Json(DataResponse { data: translation }))
}

/// PUT /api/v1/admin/posts/{id}/tags
pub async fn set_tags(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetPostTags>,
) -> AppResult<impl IntoResponse> {
    let found = PostRepo::set_tags(&state.pool, id, &input.tag_ids).await?;
    if !found {
        return Err(AppError::Core(CoreError::NotFound { entity: "Post", id }));
    }

    tracing::info!(post_id = id, tags = input.tag_ids.len(), "Post tag set replaced");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/admin/posts/{id}/comments
///
/// Every comment on a post, pending ones included.
pub async fn list_admin_comments(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let comments = CommentRepo::list_all(&state.pool, id).await?;

    Ok(Json(DataResponse { data: comments }))
}

/// POST /api/v1/admin/comments/{id}/approve
pub async fn approve_comment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let comment = CommentRepo::approve(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))?;

    tracing::info!(comment_id = id, post_id = comment.post_id, "Comment approved");

    Ok(Json(DataResponse { data: comment }))
}

/// DELETE /api/v1/admin/comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = CommentRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }));
    }

    tracing::info!(comment_id = id, "Comment deleted");

    Ok(StatusCode::NO_CONTENT)
}
