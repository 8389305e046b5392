//! HTTP server for the campus course and faculty site.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - Server-rendered HTML pages for the course catalog and faculty directory
//! - Static files from the configured public directory
//! - Status-specific error pages for every failure
//!
//! # Quick Start
//!
//! ```ignore
//! use campus_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         environment: "development".to_string(),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► security headers
//!                        │
//!                        └─► context chain (builds RequestContext)
//!                                │
//!                                └─► error pipeline
//!                                        │
//!                                        ├─► page routes ──► Catalog + sort policy ──► Views
//!                                        │
//!                                        └─► static files ──► not found
//! ```
//!
//! Handlers never render error pages. They return a [`PageError`](error::PageError),
//! and the error pipeline turns it into the 404 or 500 page.

mod app;
mod context;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;
mod views;

use std::path::PathBuf;
use std::sync::Arc;

use campus_catalog::{Catalog, MemoryCatalog};
use campus_config::StyleRule;
use state::AppState;

use crate::middleware::chain::{ChainSettings, ContextChain, RandomThemePicker, SystemClock};
use crate::views::Views;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Runtime environment name ("production" hides error detail).
    pub environment: String,
    /// Static files directory.
    pub public_dir: PathBuf,
    /// Template directory overriding the built-in templates.
    pub views_dir: Option<PathBuf>,
    /// Catalog data file (`None` uses the built-in listings).
    pub catalog_file: Option<PathBuf>,
    /// Theme body classes chosen from on each request.
    pub themes: Vec<String>,
    /// Route-scoped stylesheet rules.
    pub styles: Vec<StyleRule>,
}

impl ServerConfig {
    /// Whether error pages must hide diagnostic detail.
    #[must_use]
    pub fn is_production(&self) -> bool {
        self.environment == campus_config::PRODUCTION
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        let config = campus_config::Config::default();
        server_config_from_config(&config)
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the catalog or templates cannot be loaded, or the server
/// fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog: Arc<dyn Catalog> = match &config.catalog_file {
        Some(path) => Arc::new(MemoryCatalog::load(path)?),
        None => Arc::new(MemoryCatalog::seeded()),
    };

    let views = match &config.views_dir {
        Some(dir) => Views::with_overrides(dir.clone())?,
        None => Views::embedded()?,
    };

    let chain = ContextChain::standard(
        ChainSettings {
            environment: config.environment.clone(),
            themes: config.themes.clone(),
            styles: config.styles.clone(),
        },
        Arc::new(SystemClock),
        Arc::new(RandomThemePicker),
    );
    tracing::debug!(steps = ?chain.step_names(), "Context chain ready");

    let state = Arc::new(AppState {
        catalog,
        views,
        chain,
        production: config.is_production(),
        public_dir: config.public_dir.clone(),
    });

    let app = app::create_router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        environment = %config.environment,
        "Starting server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from the site configuration.
///
/// # Arguments
///
/// * `config` - Loaded site configuration
#[must_use]
pub fn server_config_from_config(config: &campus_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        environment: config.site_resolved.environment.clone(),
        public_dir: config.site_resolved.public_dir.clone(),
        views_dir: config.site_resolved.views_dir.clone(),
        catalog_file: config.site_resolved.catalog_file.clone(),
        themes: config.theme.palette.clone(),
        styles: config.styles.clone(),
    }
}
