//! Configuration management for the gallery server.
//!
//! Options come from command-line arguments via clap, with environment
//! variable fallbacks and defaults for everything:
//!
//! - `PORT` - Server port (default: 3000)
//! - `IMAGE_ROOT` - Directory of gallery folders (default: `images`)
//! - `METADATA_PATH` - Tag metadata file (default: `metadata.json`)
//! - `AUTH_KEY` - Shared passcode (default: a development-only fallback
//!   that must be overridden in any real deployment)
//!
//! # Example
//!
//! ```ignore
//! use manga_shelf::config::Config;
//!
//! let config = Config::parse();
//! println!("Listening on {}", config.bind_address());
//! ```

use std::path::PathBuf;

use clap::Parser;

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default image root directory.
pub const DEFAULT_IMAGE_ROOT: &str = "images";

/// Default metadata file path.
pub const DEFAULT_METADATA_PATH: &str = "metadata.json";

/// Development-only fallback passcode. Startup warns while this is in use.
pub const DEV_AUTH_KEY: &str = "abc123";

// =============================================================================
// CLI Arguments
// =============================================================================

/// Manga Shelf - a passcode-gated web gallery for folders of page images.
///
/// Each subdirectory of the image root is served as one gallery; pages are
/// ordered by the first parenthesized number in their filename.
#[derive(Parser, Debug, Clone)]
#[command(name = "manga-shelf")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "PORT")]
    pub port: u16,

    /// Directory containing one subdirectory per gallery.
    #[arg(long, default_value = DEFAULT_IMAGE_ROOT, env = "IMAGE_ROOT")]
    pub image_root: PathBuf,

    /// JSON file persisting the title → tags mapping.
    #[arg(long, default_value = DEFAULT_METADATA_PATH, env = "METADATA_PATH")]
    pub metadata_path: PathBuf,

    /// Shared passcode gating the gallery.
    #[arg(long, default_value = DEV_AUTH_KEY, env = "AUTH_KEY", hide_default_value = true)]
    pub auth_key: String,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.auth_key.is_empty() {
            return Err(
                "Passcode must not be empty. Set --auth-key or AUTH_KEY".to_string(),
            );
        }

        if self.image_root.as_os_str().is_empty() {
            return Err(
                "Image root is required. Set --image-root or IMAGE_ROOT".to_string(),
            );
        }

        if self.metadata_path.as_os_str().is_empty() {
            return Err(
                "Metadata path is required. Set --metadata-path or METADATA_PATH".to_string(),
            );
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether the server is still running on the development fallback
    /// passcode.
    pub fn is_dev_auth_key(&self) -> bool {
        self.auth_key == DEV_AUTH_KEY
    }
}

// =============================================================================
// Tests
// =============================================================================
