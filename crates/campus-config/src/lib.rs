//! Configuration management for the campus site.
//!
//! Parses `campus.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `site.environment`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override runtime environment name.
    pub environment: Option<String>,
    /// Override catalog data file.
    pub catalog_file: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "campus.toml";

/// Environment name that selects production-like error output.
pub const PRODUCTION: &str = "production";

/// Minimum number of themes in the palette.
const MIN_THEMES: usize = 3;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Site configuration (paths are relative strings from TOML).
    site: SiteConfigRaw,
    /// Theme palette.
    pub theme: ThemeConfig,
    /// Route-scoped stylesheet rules, applied in order.
    pub styles: Vec<StyleRule>,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        }
    }
}

/// Raw site configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    environment: Option<String>,
    public_dir: Option<String>,
    views_dir: Option<String>,
    catalog_file: Option<String>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug)]
pub struct SiteConfig {
    /// Runtime environment name, lowercased (e.g., "production", "development").
    pub environment: String,
    /// Directory served as static files.
    pub public_dir: PathBuf,
    /// Directory of templates overriding the built-in ones.
    pub views_dir: Option<PathBuf>,
    /// Catalog data file (`None` uses the built-in listings).
    pub catalog_file: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            environment: PRODUCTION.to_owned(),
            public_dir: PathBuf::from("public"),
            views_dir: None,
            catalog_file: None,
        }
    }
}

/// Theme configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Body classes to choose from on each request.
    pub palette: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            palette: ["blue-theme", "green-theme", "red-theme"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

/// Stylesheet added to every page under a path prefix.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StyleRule {
    /// Path prefix (e.g., "/catalog"). Matches on segment boundaries.
    pub prefix: String,
    /// Stylesheet URL (e.g., "/css/catalog.css").
    pub href: String,
}

impl StyleRule {
    fn new(prefix: &str, href: &str) -> Self {
        Self {
            prefix: prefix.to_owned(),
            href: href.to_owned(),
        }
    }
}

fn default_styles() -> Vec<StyleRule> {
    vec![
        StyleRule::new("/catalog", "/css/catalog.css"),
        StyleRule::new("/faculty", "/css/faculty.css"),
    ]
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`server.host`").
        field: String,
        /// Error message (e.g., "${`CAMPUS_HOST`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `campus.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails, or
    /// the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(environment) = &settings.environment {
            self.site_resolved.environment = environment.to_lowercase();
        }
        if let Some(catalog_file) = &settings.catalog_file {
            self.site_resolved.catalog_file = Some(catalog_file.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            site: SiteConfigRaw::default(),
            theme: ThemeConfig::default(),
            styles: default_styles(),
            site_resolved: SiteConfig {
                public_dir: base.join("public"),
                ..SiteConfig::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_site()?;
        self.validate_theme()?;
        self.validate_styles()?;
        Ok(())
    }

    /// Validate server configuration.
    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 is technically valid (OS assigns a random port), but it's
        // unlikely to be intentional in a config file
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site_resolved.environment, "site.environment")
    }

    /// Validate theme palette.
    fn validate_theme(&self) -> Result<(), ConfigError> {
        let palette = &self.theme.palette;
        if palette.len() < MIN_THEMES {
            return Err(ConfigError::Validation(format!(
                "theme.palette needs at least {MIN_THEMES} themes, got {}",
                palette.len()
            )));
        }
        for theme in palette {
            require_non_empty(theme, "theme.palette entry")?;
        }
        Ok(())
    }

    /// Validate route-scoped stylesheet rules.
    fn validate_styles(&self) -> Result<(), ConfigError> {
        for rule in &self.styles {
            if !rule.prefix.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "styles.prefix must start with '/': {:?}",
                    rule.prefix
                )));
            }
            require_non_empty(&rule.href, "styles.href")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        if let Some(ref environment) = self.site.environment {
            self.site.environment = Some(expand::expand_env(environment, "site.environment")?);
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>| path.map(|p| config_dir.join(p));

        self.site_resolved = SiteConfig {
            environment: self
                .site
                .environment
                .as_deref()
                .map_or_else(|| PRODUCTION.to_owned(), str::to_lowercase),
            public_dir: config_dir.join(self.site.public_dir.as_deref().unwrap_or("public")),
            views_dir: resolve(self.site.views_dir.as_deref()),
            catalog_file: resolve(self.site.catalog_file.as_deref()),
        };
    }
}
