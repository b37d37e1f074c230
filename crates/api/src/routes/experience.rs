//! Route definitions for work experience entries.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::experience;
use crate::state::AppState;

/// Public experience routes mounted at `/content/{locale}/experience`.
///
/// ```text
/// GET /  -> list_public
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(experience::list_public))
}

/// Admin experience routes mounted at `/admin/experience`.
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
        .route("/", get(experience::list_admin).post(experience::create))
        .route(
            "/{id}",
            get(experience::get_admin)
                .put(experience::update)
                .delete(experience::delete),
        )
        .route(
            "/{id}/translations/{locale}",
            put(experience::upsert_translation),
        )
}
