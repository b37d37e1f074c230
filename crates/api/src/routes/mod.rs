pub mod education;
pub mod experience;
pub mod health;
pub mod posts;
pub mod projects;
pub mod skills;
pub mod taxonomy;
pub mod testimonials;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /content/{locale}/posts                          published posts
/// /content/{locale}/posts/{id}                     one post
/// /content/{locale}/posts/slug/{slug}              one post by slug
/// /content/{locale}/posts/{id}/like                record a like (POST)
/// /content/{locale}/posts/{id}/comments            approved comments (GET), submit (POST)
/// /content/{locale}/projects                       active projects
/// /content/{locale}/projects/{id}                  one project
/// /content/{locale}/skills                         active skills
/// /content/{locale}/testimonials                   active testimonials
/// /content/{locale}/experience                     active experience entries
/// /content/{locale}/education                      active education entries
///
/// /admin/posts                                     list (?locale=), create
/// /admin/posts/{id}                                get (?locale=), update, delete
/// /admin/posts/{id}/publish                        publish (POST)
/// /admin/posts/{id}/unpublish                      unpublish (POST)
/// /admin/posts/{id}/translations/{locale}          upsert translation (PUT)
/// /admin/posts/{id}/tags                           replace tag set (PUT)
/// /admin/posts/{id}/comments                       all comments incl. pending (GET)
/// /admin/comments/{id}                             delete comment
/// /admin/comments/{id}/approve                     approve comment (POST)
///
/// /admin/projects                                  list (?locale=), create
/// /admin/projects/{id}                             get (?locale=), update, delete
/// /admin/projects/{id}/feature                     set featured (POST)
/// /admin/projects/{id}/unfeature                   clear featured (POST)
/// /admin/projects/{id}/translations/{locale}       upsert translation (PUT)
/// /admin/projects/{id}/techniques                  replace technique set (PUT)
///
/// /admin/skills                                    list (?locale=), create
/// /admin/skills/{id}                               get (?locale=), update, delete
/// /admin/skills/{id}/translations/{locale}         upsert translation (PUT)
/// /admin/testimonials …                            same shape as skills
/// /admin/experience …                              same shape as skills
/// /admin/education …                               same shape as skills
///
/// /admin/tags                                      list, create
/// /admin/tags/{id}                                 get, delete
/// /admin/tags/{id}/translations/{locale}           upsert name (PUT)
/// /admin/categories …                              same shape as tags
/// /admin/techniques …                              same shape as tags
///
/// /admin/dashboard                                 aggregate counts (GET)
/// ```
///
/// Public routes resolve the `{locale}` segment leniently (unsupported
/// values serve the configured default); admin routes reject unsupported
/// locales with 400.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public localized content.
        .nest("/content/{locale}/posts", posts::public_router())
        .nest("/content/{locale}/projects", projects::public_router())
        .nest("/content/{locale}/skills", skills::public_router())
        .nest(
            "/content/{locale}/testimonials",
            testimonials::public_router(),
        )
        .nest("/content/{locale}/experience", experience::public_router())
        .nest("/content/{locale}/education", education::public_router())
        // Admin content management.
        .nest("/admin/posts", posts::admin_router())
        .nest("/admin/comments", posts::comments_router())
        .nest("/admin/projects", projects::admin_router())
        .nest("/admin/skills", skills::admin_router())
        .nest("/admin/testimonials", testimonials::admin_router())
        .nest("/admin/experience", experience::admin_router())
        .nest("/admin/education", education::admin_router())
        // Taxonomy management.
        .nest("/admin/tags", taxonomy::tags_router())
        .nest("/admin/categories", taxonomy::categories_router())
        .nest("/admin/techniques", taxonomy::techniques_router())
        // Dashboard counts.
        .route("/admin/dashboard", get(handlers::dashboard::get_counts))
}
