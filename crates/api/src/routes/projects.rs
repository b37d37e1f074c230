//! Route definitions for portfolio projects.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Public project routes mounted at `/content/{locale}/projects`.
///
/// ```text
/// GET /      -> list_public
/// GET /{id}  -> get_public
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_public))
        .route("/{id}", get(projects::get_public))
}

/// Admin project routes mounted at `/admin/projects`.
///
/// ```text
/// GET    /                            -> list_admin (?locale=)
/// POST   /                            -> create
/// GET    /{id}                        -> get_admin (?locale=)
/// PUT    /{id}                        -> update
/// DELETE /{id}                        -> delete
/// POST   /{id}/feature                -> feature
/// POST   /{id}/unfeature              -> unfeature
/// PUT    /{id}/translations/{locale}  -> upsert_translation
/// PUT    /{id}/techniques             -> set_techniques
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_admin).post(projects::create))
        .route(
            "/{id}",
            get(projects::get_admin)
                .put(projects::update)
                .delete(projects::delete),
        )
        .route("/{id}/feature", post(projects::feature))
        .route("/{id}/unfeature", post(projects::unfeature))
        .route(
            "/{id}/translations/{locale}",
            put(projects::upsert_translation),
        )
        .route("/{id}/techniques", put(projects::set_techniques))
}
