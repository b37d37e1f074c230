//! Route definitions for education entries.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::education;
use crate::state::AppState;

/// Public education routes mounted at `/content/{locale}/education`.
///
/// ```text
/// GET /  -> list_public
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(education::list_public))
}

/// Admin education routes mounted at `/admin/education`.
///
/// ```text
/// GET    /                            -> list_admin (?locale=)
/// POST   /                            -> create
/// GET    /{id}                        -> get_admin (?locale=)
/// PUT    /{id}                        -> update
/// DELETE /{id}                        -> delete
/// PUT    /{id}/translations/{locale}  -> upsert_translation
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(education::list_admin).post(education::create))
        .route(
            "/{id}",
            get(education::get_admin)
                .put(education::update)
                .delete(education::delete),
        )
        .route(
            "/{id}/translations/{locale}",
            put(education::upsert_translation),
        )
}
