//! Authentication integration tests.
//!
//! Tests verify:
//! - Unauthenticated requests redirect to the login page
//! - Valid cookies pass the gate, wrong ones do not
//! - The login flow sets the session cookie and redirects
//! - Public routes (login pair, images) bypass the gate

use axum::http::{header, StatusCode};
use tower::ServiceExt;

use super::test_utils::{
    anonymous_get, authed_get, body_string, login_post, TestEnv, TEST_PASSCODE,
};

// =============================================================================
// Gate Behavior
// =============================================================================

#[tokio::test]
async fn test_missing_cookie_redirects_to_login() {
    let env = TestEnv::new(&[("Alpha", &["page (1).jpg"])]);

    for uri in ["/", "/api/all-folders", "/api/cover-image?title=Alpha", "/list?title=Alpha"] {
        let response = env.router().oneshot(anonymous_get(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER, "uri {uri}");
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
    }
}

#[tokio::test]
async fn test_wrong_cookie_redirects_to_login() {
    let env = TestEnv::new(&[("Alpha", &[])]);

    let request = axum::http::Request::builder()
        .uri("/api/all-folders")
        .header(header::COOKIE, "auth=wrong-passcode")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = env.router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/login");
}

#[tokio::test]
async fn test_valid_cookie_passes_gate() {
    let env = TestEnv::new(&[("Alpha", &[])]);

    let response = env
        .router()
        .oneshot(authed_get("/api/all-folders"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = super::test_utils::body_json(response).await;
    assert_eq!(json, serde_json::json!(["Alpha"]));
}

// =============================================================================
// Login Flow
// =============================================================================

#[tokio::test]
async fn test_login_page_is_public() {
    let env = TestEnv::new(&[]);

    let response = env.router().oneshot(anonymous_get("/login")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains(r#"action="/login_check""#));
    assert!(body.contains(r#"name="passcode""#));
}

#[tokio::test]
async fn test_login_with_correct_passcode_sets_cookie_and_redirects() {
    let env = TestEnv::new(&[]);

    let response = env
        .router()
        .oneshot(login_post(TEST_PASSCODE))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with(&format!("auth={}", TEST_PASSCODE)));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_login_with_wrong_passcode_renders_inline_failure() {
    let env = TestEnv::new(&[]);

    let response = env.router().oneshot(login_post("nope")).await.unwrap();

    // Failure is an inline page, never a 401 and never a cookie
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let body = body_string(response).await;
    assert!(body.contains(r#"href="/login""#));
}

#[tokio::test]
async fn test_login_with_legacy_key_field_is_rejected() {
    let env = TestEnv::new(&[]);

    // The earlier revision posted `key`; only `passcode` is accepted now
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/login_check")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(axum::body::Body::from(format!("key={}", TEST_PASSCODE)))
        .unwrap();

    let response = env.router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

// =============================================================================
// Public Image Routes
// =============================================================================

#[tokio::test]
async fn test_images_are_served_without_auth() {
    let env = TestEnv::new(&[("Alpha", &["page (1).jpg"])]);

    let response = env
        .router()
        .oneshot(anonymous_get("/images/Alpha/page%20(1).jpg"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert_eq!(body, "image-bytes");
}

#[tokio::test]
async fn test_missing_image_is_plain_404() {
    let env = TestEnv::new(&[("Alpha", &[])]);

    let response = env
        .router()
        .oneshot(anonymous_get("/images/Alpha/missing.jpg"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
