//! Metadata integration tests.
//!
//! Tests verify:
//! - Tag updates persist to the JSON file, pretty-printed
//! - Unrelated titles survive an update (no clobbering)
//! - Validation failures are 400s with JSON error bodies
//! - Store failures surface as 500s with a generic message

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::test_utils::{authed_get, authed_post_json, body_json, TestEnv};

// =============================================================================
// Tag Updates
// =============================================================================

#[tokio::test]
async fn test_update_tags_persists_to_file() {
    let env = TestEnv::new(&[("Alpha", &[])]);

    let body = json!({"title": "Alpha", "tags": ["ongoing", "favorite"]});
    let response = env
        .router()
        .oneshot(authed_post_json("/api/update-tags", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    // The file on disk reflects the update, pretty-printed
    let raw = std::fs::read_to_string(env.metadata_path()).unwrap();
    assert!(raw.contains('\n'));

    let on_disk: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(on_disk["Alpha"]["tags"], json!(["ongoing", "favorite"]));
}

#[tokio::test]
async fn test_update_tags_preserves_unrelated_titles() {
    let env = TestEnv::new(&[]);

    for (title, tag) in [("Alpha", "a"), ("Beta", "b")] {
        let body = json!({"title": title, "tags": [tag]});
        let response = env
            .router()
            .oneshot(authed_post_json("/api/update-tags", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let raw = std::fs::read_to_string(env.metadata_path()).unwrap();
    let on_disk: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(on_disk["Alpha"]["tags"], json!(["a"]));
    assert_eq!(on_disk["Beta"]["tags"], json!(["b"]));
}

#[tokio::test]
async fn test_update_tags_readable_through_api() {
    let env = TestEnv::new(&[]);

    let body = json!({"title": "Alpha", "tags": ["x"]});
    let response = env
        .router()
        .oneshot(authed_post_json("/api/update-tags", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = env
        .router()
        .oneshot(authed_get("/api/metadata"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["Alpha"]["tags"], json!(["x"]));
}

#[tokio::test]
async fn test_metadata_missing_file_is_empty_mapping() {
    let env = TestEnv::new(&[]);

    let response = env
        .router()
        .oneshot(authed_get("/api/metadata"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, json!({}));
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn test_update_tags_non_array_tags_is_bad_request() {
    let env = TestEnv::new(&[]);

    let body = json!({"title": "Alpha", "tags": "not-an-array"});
    let response = env
        .router()
        .oneshot(authed_post_json("/api/update-tags", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "invalid_tags");
}

#[tokio::test]
async fn test_update_tags_non_string_element_is_bad_request() {
    let env = TestEnv::new(&[]);

    let body = json!({"title": "Alpha", "tags": ["ok", 7]});
    let response = env
        .router()
        .oneshot(authed_post_json("/api/update-tags", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_tags_missing_title_is_bad_request() {
    let env = TestEnv::new(&[]);

    let body = json!({"tags": ["a"]});
    let response = env
        .router()
        .oneshot(authed_post_json("/api/update-tags", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "missing_title");
}

#[tokio::test]
async fn test_update_tags_missing_tags_is_bad_request() {
    let env = TestEnv::new(&[]);

    let body = json!({"title": "Alpha"});
    let response = env
        .router()
        .oneshot(authed_post_json("/api/update-tags", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Store Failures
// =============================================================================

#[tokio::test]
async fn test_corrupt_metadata_file_is_internal_error() {
    let env = TestEnv::new(&[]);
    std::fs::write(env.metadata_path(), b"{ not json").unwrap();

    let response = env
        .router()
        .oneshot(authed_get("/api/metadata"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // The response stays generic; the parse detail goes to the log
    let json = body_json(response).await;
    assert_eq!(json["error"], "metadata_error");
    assert_eq!(json["message"], "failed to access metadata");
}

#[tokio::test]
async fn test_corrupt_metadata_file_fails_update_too() {
    let env = TestEnv::new(&[]);
    std::fs::write(env.metadata_path(), b"{ not json").unwrap();

    let body = json!({"title": "Alpha", "tags": ["a"]});
    let response = env
        .router()
        .oneshot(authed_post_json("/api/update-tags", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
