//! Shared-passcode cookie authentication.
//!
//! Every device that knows the passcode gets the same session: logging in
//! sets an `auth` cookie holding the configured secret, and the gate
//! middleware compares that cookie on each request. There are no per-user
//! accounts and no server-side session state.
//!
//! Unauthenticated requests are redirected to `/login` rather than answered
//! with 401/403; a wrong passcode at login renders an inline failure page.
//! The login page, the login submission endpoint, and the raw image routes
//! are mounted outside this middleware (see [`super::routes`]).

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::{cookie::Cookie, CookieJar};
use serde::Deserialize;
use subtle::ConstantTimeEq;
use tracing::{debug, info, warn};

use super::pages;

/// Name of the session cookie.
pub const AUTH_COOKIE: &str = "auth";

// =============================================================================
// Passcode Authentication
// =============================================================================

/// The configured shared passcode.
#[derive(Clone)]
pub struct PasscodeAuth {
    secret: String,
}

impl PasscodeAuth {
    /// Create an authenticator with the given passcode.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Compare a candidate against the passcode in constant time.
    pub fn verify(&self, candidate: &str) -> bool {
        candidate.as_bytes().ct_eq(self.secret.as_bytes()).into()
    }

    /// Build the session cookie set after a successful login.
    ///
    /// Host-only (no `Domain`), `HttpOnly`, no explicit expiry: the cookie
    /// lives for the browser session.
    pub fn session_cookie(&self) -> Cookie<'static> {
        Cookie::build((AUTH_COOKIE, self.secret.clone()))
            .http_only(true)
            .path("/")
            .build()
    }
}

impl std::fmt::Debug for PasscodeAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Keep the secret out of debug output
        f.debug_struct("PasscodeAuth").finish_non_exhaustive()
    }
}

// =============================================================================
// Axum Middleware
// =============================================================================

/// Gate middleware: pass requests carrying a valid `auth` cookie, redirect
/// everything else to the login page.
pub async fn auth_middleware(
    State(auth): State<PasscodeAuth>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    match jar.get(AUTH_COOKIE) {
        Some(cookie) if auth.verify(cookie.value()) => next.run(request).await,
        Some(_) => {
            debug!(path = %request.uri().path(), "stale auth cookie, redirecting to login");
            Redirect::to("/login").into_response()
        }
        None => {
            debug!(path = %request.uri().path(), "no auth cookie, redirecting to login");
            Redirect::to("/login").into_response()
        }
    }
}

// =============================================================================
// Login Handlers
// =============================================================================

/// Login submission body. `passcode` is the canonical field name.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub passcode: String,
}

/// Serve the login form.
///
/// # Endpoint
///
/// `GET /login`
pub async fn login_page_handler() -> Html<&'static str> {
    Html(pages::LOGIN_PAGE)
}

/// Check a submitted passcode.
///
/// # Endpoint
///
/// `POST /login_check` with form field `passcode`
///
/// On success sets the session cookie and redirects to `/`; on failure
/// renders an inline message linking back to the login page. The submitted
/// value is never logged.
pub async fn login_check_handler(
    State(auth): State<PasscodeAuth>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    if auth.verify(&form.passcode) {
        info!("login succeeded");
        (jar.add(auth.session_cookie()), Redirect::to("/")).into_response()
    } else {
        warn!("login attempt with wrong passcode");
        Html(pages::LOGIN_FAILED_PAGE).into_response()
    }
}

// =============================================================================
// Tests
// =============================================================================
