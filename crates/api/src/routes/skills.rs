//! Route definitions for skills.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::skills;
use crate::state::AppState;

/// Public skill routes mounted at `/content/{locale}/skills`.
///
/// ```text
/// GET /  -> list_public
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(skills::list_public))
}

/// Admin skill routes mounted at `/admin/skills`.
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
        .route("/", get(skills::list_admin).post(skills::create))
        .route(
            "/{id}",
            get(skills::get_admin).put(skills::update).delete(skills::delete),
        )
        .route(
            "/{id}/translations/{locale}",
            put(skills::upsert_translation),
        )
}
