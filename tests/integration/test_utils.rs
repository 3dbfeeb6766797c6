//! Test utilities for integration tests.
//!
//! Builds real routers over temporary image roots and provides request
//! helpers for authenticated and unauthenticated calls.

use std::fs;
use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;

use manga_shelf::{create_router, JsonMetadataStore, Library, RouterConfig};

/// Passcode used by every test router.
pub const TEST_PASSCODE: &str = "test-passcode";

// =============================================================================
// Test Environment
// =============================================================================

/// A temporary image root plus metadata file location.
pub struct TestEnv {
    /// Keeps the temp directory alive for the test's duration
    _tmp: TempDir,
    pub images: PathBuf,
    pub metadata: PathBuf,
}

impl TestEnv {
    /// Build an environment seeding the given gallery folders and files.
    /// Files are written with a tiny non-empty payload so static serving
    /// can be asserted on.
    pub fn new(folders: &[(&str, &[&str])]) -> Self {
        let tmp = TempDir::new().unwrap();
        let images = tmp.path().join("images");
        fs::create_dir(&images).unwrap();

        for (folder, files) in folders {
            let dir = images.join(folder);
            fs::create_dir(&dir).unwrap();
            for file in *files {
                fs::write(dir.join(file), b"image-bytes").unwrap();
            }
        }

        let metadata = tmp.path().join("metadata.json");
        Self {
            _tmp: tmp,
            images,
            metadata,
        }
    }

    /// Create a router over this environment with tracing disabled.
    pub fn router(&self) -> Router {
        create_router(
            Library::new(&self.images),
            JsonMetadataStore::new(&self.metadata),
            RouterConfig::new(TEST_PASSCODE).with_tracing(false),
        )
    }

    /// The metadata file path.
    pub fn metadata_path(&self) -> &Path {
        &self.metadata
    }
}

// =============================================================================
// Request Helpers
// =============================================================================

/// Build a GET request carrying a valid auth cookie.
pub fn authed_get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, format!("auth={}", TEST_PASSCODE))
        .body(Body::empty())
        .unwrap()
}

/// Build a GET request with no cookie.
pub fn anonymous_get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Build an authenticated POST request with a JSON body.
pub fn authed_post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::COOKIE, format!("auth={}", TEST_PASSCODE))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

/// Build a login form submission.
pub fn login_post(passcode: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/login_check")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("passcode={}", passcode)))
        .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as a UTF-8 string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
