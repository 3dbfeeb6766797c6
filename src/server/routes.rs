//! Router configuration for the gallery server.
//!
//! # Route Structure
//!
//! ```text
//! /                    - Application shell (protected)
//! /api/all-folders     - List titles (protected)
//! /api/cover-image     - Cover URL (protected)
//! /api/metadata        - Title → tags mapping (protected)
//! /list                - Sorted filenames (protected)
//! /api/update-tags     - Replace a tag list (protected)
//! /login               - Login form (public)
//! /login_check         - Login submission (public)
//! /images/*            - Raw image bytes (public)
//! ```
//!
//! The authentication allowlist is structural: the login routes and the
//! static image service are mounted outside the gate middleware, everything
//! else behind it.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::auth::{auth_middleware, login_check_handler, login_page_handler, PasscodeAuth};
use super::handlers::{
    all_folders_handler, cover_image_handler, list_images_handler, metadata_handler,
    shell_handler, update_tags_handler, AppState,
};
use crate::library::Library;
use crate::metadata::MetadataStore;

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Clone)]
pub struct RouterConfig {
    /// Shared passcode gating every non-public route
    pub passcode: String,

    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create a new router configuration with the given passcode.
    ///
    /// Request tracing is enabled by default.
    pub fn new(passcode: impl Into<String>) -> Self {
        Self {
            passcode: passcode.into(),
            enable_tracing: true,
        }
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// # Arguments
///
/// * `library` - The image library to serve
/// * `metadata` - The metadata store for tags
/// * `config` - Router configuration
///
/// # Returns
///
/// A configured Axum router ready to be served.
pub fn create_router<M>(library: Library, metadata: M, config: RouterConfig) -> Router
where
    M: MetadataStore + 'static,
{
    let images_root = library.root().to_path_buf();
    let state = AppState::new(library, metadata);
    let auth = PasscodeAuth::new(config.passcode.as_str());

    // Everything behind the cookie gate
    let protected_routes = Router::new()
        .route("/", get(shell_handler))
        .route("/api/all-folders", get(all_folders_handler::<M>))
        .route("/api/cover-image", get(cover_image_handler::<M>))
        .route("/api/metadata", get(metadata_handler::<M>))
        .route("/list", get(list_images_handler::<M>))
        .route("/api/update-tags", post(update_tags_handler::<M>))
        .with_state(state)
        .layer(middleware::from_fn_with_state(
            auth.clone(),
            auth_middleware,
        ));

    // Public routes: the login pair and the raw images
    let public_routes = Router::new()
        .route("/login", get(login_page_handler))
        .route("/login_check", post(login_check_handler))
        .with_state(auth);

    let router = Router::new()
        .merge(protected_routes)
        .merge(public_routes)
        .nest_service("/images", ServeDir::new(images_root));

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

// =============================================================================
// Tests
// =============================================================================
