//! Route definitions for the taxonomy admin surface.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::taxonomy;
use crate::state::AppState;

/// Tag routes mounted at `/admin/tags`.
///
/// ```text
/// GET    /                            -> list_tags
/// POST   /                            -> create_tag
/// GET    /{id}                        -> get_tag
/// DELETE /{id}                        -> delete_tag
/// PUT    /{id}/translations/{locale}  -> upsert_tag_translation
/// ```
pub fn tags_router() -> Router<AppState> {
    Router::new()
        .route("/", get(taxonomy::list_tags).post(taxonomy::create_tag))
        .route("/{id}", get(taxonomy::get_tag).delete(taxonomy::delete_tag))
        .route(
            "/{id}/translations/{locale}",
            put(taxonomy::upsert_tag_translation),
        )
}

/// Category routes mounted at `/admin/categories` (same shape as tags).
pub fn categories_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(taxonomy::list_categories).post(taxonomy::create_category),
        )
        .route(
            "/{id}",
            get(taxonomy::get_category).delete(taxonomy::delete_category),
        )
        .route(
            "/{id}/translations/{locale}",
            put(taxonomy::upsert_category_translation),
        )
}

/// Technique routes mounted at `/admin/techniques` (same shape as tags).
pub fn techniques_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(taxonomy::list_techniques).post(taxonomy::create_technique),
        )
        .route(
            "/{id}",
            get(taxonomy::get_technique).delete(taxonomy::delete_technique),
        )
        .route(
            "/{id}/translations/{locale}",
            put(taxonomy::upsert_technique_translation),
        )
}
