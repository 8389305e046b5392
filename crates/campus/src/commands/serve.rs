//! `campus serve` command implementation.

use std::path::PathBuf;

use campus_config::{CliSettings, Config};
use campus_server::{run_server, server_config_from_config};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover campus.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Runtime environment, e.g. "development" (overrides config).
    #[arg(short, long, env = "CAMPUS_ENV")]
    environment: Option<String>,

    /// Catalog data file (overrides config).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Enable verbose output (log every request).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let (config_path, cli_settings) = self.into_settings();
        let config = Config::load(config_path.as_deref(), Some(&cli_settings))?;

        output.highlight(&format!(
            "Starting server on http://{}:{}",
            config.server.host, config.server.port
        ));
        match &config.config_path {
            Some(path) => output.info(&format!("Config: {}", path.display())),
            None => output.warning("No campus.toml found, using defaults"),
        }
        output.info(&format!("Environment: {}", config.site_resolved.environment));
        output.info(&format!(
            "Public directory: {}",
            config.site_resolved.public_dir.display()
        ));
        match &config.site_resolved.catalog_file {
            Some(path) => output.info(&format!("Catalog: {}", path.display())),
            None => output.info("Catalog: built-in listings"),
        }
        if let Some(views_dir) = &config.site_resolved.views_dir {
            output.info(&format!("Template overrides: {}", views_dir.display()));
        }

        let server_config = server_config_from_config(&config);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }

    /// Split into the config file path and the settings overriding it.
    fn into_settings(self) -> (Option<PathBuf>, CliSettings) {
        let settings = CliSettings {
            host: self.host,
            port: self.port,
            environment: self.environment,
            catalog_file: self.catalog,
        };
        (self.config, settings)
    }
}
