//! Manga Shelf - a passcode-gated web gallery for manga page images.
//!
//! This binary starts the HTTP server and configures all components.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use manga_shelf::{
    config::Config,
    metadata::JsonMetadataStore,
    server::{create_router, RouterConfig},
    Library,
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    // Initialize logging
    init_logging(config.verbose);

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Configuration:");
    info!("  Image root: {}", config.image_root.display());
    info!("  Metadata file: {}", config.metadata_path.display());

    // Auth status with warning when running on the dev fallback
    if config.is_dev_auth_key() {
        warn!("  Auth: using the development fallback passcode");
        warn!("        Set AUTH_KEY (or --auth-key) before exposing this server");
    } else {
        info!("  Auth: passcode configured");
    }

    // Probe the image root
    let library = Library::new(&config.image_root);

    info!("");
    info!("Scanning image root...");
    match library.list_titles().await {
        Ok(titles) => {
            info!("  Found {} gallery folder(s)", titles.len());
        }
        Err(e) => {
            error!("  Failed to read image root: {}", e);
            error!("");
            error!("  Please check:");
            error!(
                "    - The directory '{}' exists and is readable",
                config.image_root.display()
            );
            error!("    - Each gallery is a subdirectory of it");
            return ExitCode::FAILURE;
        }
    }

    // Create the metadata store
    let store = JsonMetadataStore::new(&config.metadata_path);

    // Create router
    let router_config =
        RouterConfig::new(config.auth_key.as_str()).with_tracing(!config.no_tracing);
    let router = create_router(library, store, router_config);

    // Bind and serve
    let addr = config.bind_address();

    info!("");
    info!("────────────────────────────────────────────────────────────────");
    info!("  Server listening on: http://{}", addr);
    info!("");
    info!("  Open the gallery in your browser:");
    info!("    open http://{}/", addr);
    info!("");
    info!("  API endpoints (after login):");
    info!("    curl -b 'auth=<passcode>' http://{}/api/all-folders", addr);
    info!("    curl -b 'auth=<passcode>' http://{}/list?title=<title>", addr);
    info!("────────────────────────────────────────────────────────────────");
    info!("");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "manga_shelf=debug,tower_http=debug"
    } else {
        "manga_shelf=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
