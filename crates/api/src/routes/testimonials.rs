//! Route definitions for testimonials.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::testimonials;
use crate::state::AppState;

/// Public testimonial routes mounted at `/content/{locale}/testimonials`.
///
/// ```text
/// GET /  -> list_public
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(testimonials::list_public))
}

/// Admin testimonial routes mounted at `/admin/testimonials`.
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
        .route("/", get(testimonials::list_admin).post(testimonials::create))
        .route(
            "/{id}",
            get(testimonials::get_admin)
                .put(testimonials::update)
                .delete(testimonials::delete),
        )
        .route(
            "/{id}/translations/{locale}",
            put(testimonials::upsert_translation),
        )
}
