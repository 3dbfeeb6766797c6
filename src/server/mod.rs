//! HTTP server layer for the gallery.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        HTTP Layer                            │
//! │   GET /api/all-folders, /api/cover-image, /list, ...         │
//! │                                                              │
//! │  ┌──────────┐  ┌──────────────┐  ┌────────┐  ┌────────────┐  │
//! │  │ handlers │  │     auth     │  │ routes │  │   pages    │  │
//! │  │ (JSON)   │  │ (cookie gate)│  │        │  │ (shell UI) │  │
//! │  └──────────┘  └──────────────┘  └────────┘  └────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod handlers;
pub mod pages;
pub mod routes;

pub use auth::{
    auth_middleware, login_check_handler, login_page_handler, LoginForm, PasscodeAuth, AUTH_COOKIE,
};
pub use handlers::{
    all_folders_handler, cover_image_handler, encode_component, list_images_handler,
    metadata_handler, shell_handler, update_tags_handler, AppState, CoverResponse, ErrorResponse,
    SuccessResponse, TitleQueryParams,
};
pub use routes::{create_router, RouterConfig};
