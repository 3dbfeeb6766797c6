//! HTTP request handlers for the gallery JSON API.
//!
//! # Endpoints
//!
//! - `GET /` - Application shell
//! - `GET /api/all-folders` - List gallery titles
//! - `GET /api/cover-image?title=...` - Cover URL for one title
//! - `GET /api/metadata` - Whole title → tags mapping
//! - `GET /list?title=...` - Sorted image filenames of one title
//! - `POST /api/update-tags` - Replace the tag list of one title

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::error::{LibraryError, MetadataError};
use crate::library::Library;
use crate::metadata::{MetadataMap, MetadataStore};

use super::pages;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state passed to all handlers via Axum's State
/// extractor.
pub struct AppState<M: MetadataStore> {
    /// The image library
    pub library: Arc<Library>,

    /// The persisted title → tags store
    pub metadata: Arc<M>,
}

impl<M: MetadataStore> AppState<M> {
    /// Create application state from a library and a metadata store.
    pub fn new(library: Library, metadata: M) -> Self {
        Self {
            library: Arc::new(library),
            metadata: Arc::new(metadata),
        }
    }
}

impl<M: MetadataStore> Clone for AppState<M> {
    fn clone(&self) -> Self {
        Self {
            library: Arc::clone(&self.library),
            metadata: Arc::clone(&self.metadata),
        }
    }
}

// =============================================================================
// Request Parameters
// =============================================================================

/// Query parameters for endpoints addressing a single title.
#[derive(Debug, Deserialize)]
pub struct TitleQueryParams {
    /// Gallery title (required; its absence is a 400, not a routing miss)
    #[serde(default)]
    pub title: Option<String>,
}

impl TitleQueryParams {
    /// The title, or `EmptyTitle` when the parameter is missing or empty.
    fn require_title(&self) -> Result<&str, LibraryError> {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => Ok(title),
            _ => Err(LibraryError::EmptyTitle),
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// JSON error response returned for all error conditions.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type identifier (e.g., "not_found", "missing_title")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code (included for convenience)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status: None,
        }
    }

    /// Create a new error response with status code.
    pub fn with_status(
        error: impl Into<String>,
        message: impl Into<String>,
        status: StatusCode,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status: Some(status.as_u16()),
        }
    }
}

/// Response from the cover image endpoint.
#[derive(Debug, Serialize)]
pub struct CoverResponse {
    /// URL path of the cover image under `/images`
    pub cover: String,
}

/// Response from the update-tags endpoint.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

// =============================================================================
// URL Encoding
// =============================================================================

/// Characters escaped in a URL path segment.
///
/// Mirrors JavaScript's `encodeURIComponent`: everything but ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )` is percent-encoded. The shell
/// script builds image URLs with `encodeURIComponent`, so cover URLs use
/// the identical alphabet (notably leaving parentheses literal).
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one path segment of an `/images` URL.
pub fn encode_component(segment: &str) -> String {
    utf8_percent_encode(segment, URI_COMPONENT).to_string()
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Convert LibraryError to HTTP response.
///
/// 5xx errors are logged at ERROR level, 404s at DEBUG (common and
/// expected), other 4xx at WARN.
impl IntoResponse for LibraryError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            LibraryError::EmptyTitle => (
                StatusCode::BAD_REQUEST,
                "missing_title",
                self.to_string(),
            ),
            LibraryError::InvalidTitle(_) => {
                (StatusCode::BAD_REQUEST, "invalid_title", self.to_string())
            }
            LibraryError::TitleNotFound(_) | LibraryError::NoImages(_) => {
                (StatusCode::NOT_FOUND, "not_found", self.to_string())
            }
            LibraryError::Io { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "io_error",
                self.to_string(),
            ),
        };

        if status.is_server_error() {
            error!(
                error_type = error_type,
                status = status.as_u16(),
                "Server error: {}",
                message
            );
        } else if status == StatusCode::NOT_FOUND {
            debug!(
                error_type = error_type,
                status = status.as_u16(),
                "Resource not found: {}",
                message
            );
        } else {
            warn!(
                error_type = error_type,
                status = status.as_u16(),
                "Client error: {}",
                message
            );
        }

        let error_response = ErrorResponse::with_status(error_type, message, status);
        (status, Json(error_response)).into_response()
    }
}

/// Convert MetadataError to HTTP response.
///
/// Validation failures are 400s with their own message; store failures are
/// 500s with a generic message, the cause goes to the log only.
impl IntoResponse for MetadataError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            MetadataError::EmptyTitle => {
                (StatusCode::BAD_REQUEST, "missing_title", self.to_string())
            }
            MetadataError::InvalidTags => {
                (StatusCode::BAD_REQUEST, "invalid_tags", self.to_string())
            }
            MetadataError::Read { .. }
            | MetadataError::Write { .. }
            | MetadataError::Parse { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "metadata_error",
                "failed to access metadata".to_string(),
            ),
        };

        if status.is_server_error() {
            error!(
                error_type = error_type,
                status = status.as_u16(),
                "Metadata error: {}",
                self
            );
        } else {
            warn!(
                error_type = error_type,
                status = status.as_u16(),
                "Client error: {}",
                message
            );
        }

        let error_response = ErrorResponse::with_status(error_type, message, status);
        (status, Json(error_response)).into_response()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Serve the application shell.
///
/// # Endpoint
///
/// `GET /`
pub async fn shell_handler() -> Html<&'static str> {
    Html(pages::SHELL_PAGE)
}

/// List all gallery titles.
///
/// # Endpoint
///
/// `GET /api/all-folders`
///
/// # Response
///
/// `200 OK` with a JSON array of title strings, numeric-aware sorted:
/// `["Alpha", "Title 2", "Title 10"]`
///
/// # Errors
///
/// - `500 Internal Server Error`: image root unreadable
pub async fn all_folders_handler<M: MetadataStore>(
    State(state): State<AppState<M>>,
) -> Result<Json<Vec<String>>, LibraryError> {
    let titles = state.library.list_titles().await?;
    Ok(Json(titles))
}

/// Look up the cover image of a title.
///
/// # Endpoint
///
/// `GET /api/cover-image?title=Alpha`
///
/// # Response
///
/// `200 OK` with `{"cover": "/images/Alpha/page%20(1).jpg"}`; the cover is
/// the first image under the canonical page order.
///
/// # Errors
///
/// - `400 Bad Request`: missing or invalid title parameter
/// - `404 Not Found`: no such gallery, or the gallery has no images
/// - `500 Internal Server Error`: filesystem error
pub async fn cover_image_handler<M: MetadataStore>(
    State(state): State<AppState<M>>,
    Query(query): Query<TitleQueryParams>,
) -> Result<Json<CoverResponse>, LibraryError> {
    let title = query.require_title()?;
    let cover = state.library.cover_image(title).await?;

    Ok(Json(CoverResponse {
        cover: format!(
            "/images/{}/{}",
            encode_component(title),
            encode_component(&cover)
        ),
    }))
}

/// List the sorted image filenames of a title.
///
/// # Endpoint
///
/// `GET /list?title=Alpha`
///
/// # Response
///
/// `200 OK` with a JSON array of filenames in page order:
/// `["page (1).jpg", "page (2).jpg", "page (10).jpg"]`
///
/// # Errors
///
/// - `400 Bad Request`: missing or invalid title parameter
/// - `404 Not Found`: no such gallery
/// - `500 Internal Server Error`: filesystem error
pub async fn list_images_handler<M: MetadataStore>(
    State(state): State<AppState<M>>,
    Query(query): Query<TitleQueryParams>,
) -> Result<Json<Vec<String>>, LibraryError> {
    let title = query.require_title()?;
    let files = state.library.list_images(title).await?;
    Ok(Json(files))
}

/// Read the whole title → tags mapping.
///
/// # Endpoint
///
/// `GET /api/metadata`
///
/// # Response
///
/// `200 OK` with the persisted mapping; `{}` when no metadata file exists
/// yet.
///
/// # Errors
///
/// - `500 Internal Server Error`: metadata file unreadable or corrupt
pub async fn metadata_handler<M: MetadataStore>(
    State(state): State<AppState<M>>,
) -> Result<Json<MetadataMap>, MetadataError> {
    let all = state.metadata.read_all().await?;
    Ok(Json(all))
}

/// Replace the tag list of one title.
///
/// # Endpoint
///
/// `POST /api/update-tags` with body `{"title": "Alpha", "tags": ["a", "b"]}`
///
/// The body is validated by hand rather than through a typed extractor so
/// that a non-array `tags` or a missing `title` is a 400 with a JSON error
/// body.
///
/// # Response
///
/// `200 OK` with `{"success": true}`
///
/// # Errors
///
/// - `400 Bad Request`: missing title, or tags not an array of strings
/// - `500 Internal Server Error`: metadata file unreadable or unwritable
pub async fn update_tags_handler<M: MetadataStore>(
    State(state): State<AppState<M>>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<SuccessResponse>, MetadataError> {
    let title = body
        .get("title")
        .and_then(serde_json::Value::as_str)
        .unwrap_or("");
    if title.is_empty() {
        return Err(MetadataError::EmptyTitle);
    }

    let tags = body
        .get("tags")
        .and_then(serde_json::Value::as_array)
        .ok_or(MetadataError::InvalidTags)?;
    let tags: Vec<String> = tags
        .iter()
        .map(|v| v.as_str().map(str::to_string).ok_or(MetadataError::InvalidTags))
        .collect::<Result<_, _>>()?;

    state.metadata.set_tags(title, tags).await?;
    Ok(Json(SuccessResponse { success: true }))
}

// =============================================================================
// Tests
// =============================================================================
