//! Route definitions for blog posts.
//!
//! Three routers are provided:
//! - `public_router()` mounted at `/content/{locale}/posts`
//! - `admin_router()` mounted at `/admin/posts`
//! - `comments_router()` mounted at `/admin/comments`

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// Public post routes mounted at `/content/{locale}/posts`.
///
/// ```text
/// GET  /               -> list_public
/// GET  /{id}           -> get_public
/// GET  /slug/{slug}    -> get_public_by_slug
/// POST /{id}/like      -> like
/// GET  /{id}/comments  -> list_public_comments
/// POST /{id}/comments  -> create_comment
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_public))
        .route("/{id}", get(posts::get_public))
        .route("/slug/{slug}", get(posts::get_public_by_slug))
        .route("/{id}/like", post(posts::like))
        .route(
            "/{id}/comments",
            get(posts::list_public_comments).post(posts::create_comment),
        )
}

/// Admin post routes mounted at `/admin/posts`.
///
/// ```text
/// GET    /                            -> list_admin (?locale=)
/// POST   /                            -> create
/// GET    /{id}                        -> get_admin (?locale=)
/// PUT    /{id}                        -> update
/// DELETE /{id}                        -> delete
/// POST   /{id}/publish                -> publish
/// POST   /{id}/unpublish              -> unpublish
/// PUT    /{id}/translations/{locale}  -> upsert_translation
/// PUT    /{id}/tags                   -> set_tags
/// GET    /{id}/comments               -> list_admin_comments
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list_admin).post(posts::create))
        .route(
            "/{id}",
            get(posts::get_admin).put(posts::update).delete(posts::delete),
        )
        .route("/{id}/publish", post(posts::publish))
        .route("/{id}/unpublish", post(posts::unpublish))
        .route(
            "/{id}/translations/{locale}",
            put(posts::upsert_translation),
        )
        .route("/{id}/tags", put(posts::set_tags))
        .route("/{id}/comments", get(posts::list_admin_comments))
}

/// Comment moderation routes mounted at `/admin/comments`.
///
/// ```text
/// DELETE /{id}          -> delete_comment
/// POST   /{id}/approve  -> approve_comment
/// ```
pub fn comments_router() -> Router<AppState> {
    Router::new()
        .route("/{id}", axum::routing::delete(posts::delete_comment))
        .route("/{id}/approve", post(posts::approve_comment))
}
