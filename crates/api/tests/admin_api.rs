//! Integration tests for the admin surface.
//!
//! Unlike the public surface, admin endpoints are strict: unsupported
//! locales are 400s and store failures surface as sanitized 500s.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, get, send_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Locale strictness
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_list_with_unsupported_locale_is_400() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get(app, "/api/v1/admin/posts?locale=fr").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNSUPPORTED_LOCALE");
}

#[tokio::test]
async fn admin_translation_upsert_with_unsupported_locale_is_400() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = send_json(
        app,
        Method::PUT,
        "/api/v1/admin/posts/1/translations/de",
        json!({"title": "Hallo"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNSUPPORTED_LOCALE");
}

#[tokio::test]
async fn admin_locale_codes_are_exact() {
    // No case folding or region-tag stripping on the admin side.
    for locale in ["EN", "en-US", "arabic"] {
        let app = common::build_test_app(common::unreachable_pool());
        let response = get(app, &format!("/api/v1/admin/skills?locale={locale}")).await;

        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "locale: {locale}"
        );
    }
}

// ---------------------------------------------------------------------------
// Validation runs before the store is touched
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_comment_body_is_400_not_500() {
    // Empty author_name fails validation even though the store is down.
    let app = common::build_test_app(common::unreachable_pool());
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/content/en/posts/1/comments",
        json!({"author_name": "", "body": "hello"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn skill_level_out_of_range_is_400() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/admin/skills",
        json!({"level": 101}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Store failures are NOT softened on the admin path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_list_with_store_down_is_sanitized_500() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get(app, "/api/v1/admin/posts").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    // The raw driver error must not leak.
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn admin_dashboard_with_store_down_is_500() {
    let app = common::build_test_app(common::unreachable_pool());
    let response = get(app, "/api/v1/admin/dashboard").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
