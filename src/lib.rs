//! # Manga Shelf
//!
//! A passcode-gated web gallery for folders of manga page images.
//!
//! Point the server at a directory of gallery folders and it serves a
//! browsable shell page backed by a small JSON API. Pages inside a gallery
//! are ordered by the first parenthesized number in their filename
//! (`page (2).jpg` before `page (10).jpg`), titles are listed with
//! numeric-aware ordering, and per-title tags persist to a single JSON
//! file.
//!
//! ## Architecture
//!
//! - [`library`] - Folder and image listing over the filesystem root
//! - [`metadata`] - Persisted title → tags mapping behind a store trait
//! - [`server`] - Axum-based HTTP layer: cookie gate, JSON API, shell page
//! - [`config`] - CLI and configuration types
//! - [`error`] - Error taxonomy shared by the layers above
//!
//! ## Example
//!
//! ```rust,no_run
//! use manga_shelf::{create_router, JsonMetadataStore, Library, RouterConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let library = Library::new("images");
//!     let store = JsonMetadataStore::new("metadata.json");
//!     let router = create_router(library, store, RouterConfig::new("passcode"));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod library;
pub mod metadata;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use error::{LibraryError, MetadataError};
pub use library::{extract_sort_key, is_image_file, natural_cmp, Library, IMAGE_EXTENSIONS};
pub use metadata::{JsonMetadataStore, MetadataMap, MetadataStore, TitleMetadata};
pub use server::{
    auth_middleware, create_router, encode_component, AppState, ErrorResponse, PasscodeAuth,
    RouterConfig, AUTH_COOKIE,
};
