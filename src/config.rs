use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};
use validator::{Validate, ValidationError};

/// Default values for configuration
pub const DEFAULT_API_URL: &str = "https://cfc-backend-b83s.onrender.com";
const DEFAULT_APP_PASSWORD: &str = "cfc2025";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const DEFAULT_ORDER_PAGE_SIZE: u32 = 200;
const DEFAULT_REQUEST_TIMEOUT_SECS: u32 = 30;
const DEFAULT_BANNER_TTL_SECS: u32 = 8;
const DEFAULT_SCREEN_WIDTH: u32 = 1920;
const DEFAULT_SCREEN_HEIGHT: u32 = 1080;
const CONFIG_DIR: &str = "config";
const ENV_PREFIX: &str = "CFC";

/// Dashboard configuration with validation
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Base URL of the order API
    #[validate(url)]
    pub api_url: String,

    /// Shared dashboard password. Compared client-side only.
    #[validate(length(min = 1))]
    pub app_password: String,

    /// Orders requested per load
    #[validate(range(min = 1, max = 1000))]
    pub order_page_size: u32,

    /// Whether archived orders are part of the snapshot
    pub include_complete: bool,

    #[validate(range(min = 1, max = 300))]
    pub request_timeout_secs: u64,

    /// How long a banner stays visible
    pub banner_ttl_secs: u64,

    /// Screen size used to place the freight quote window
    #[validate(range(min = 2))]
    pub screen_width: u32,
    #[validate(range(min = 1))]
    pub screen_height: u32,

    /// Login flag location; defaults to `$CFC_HOME/session.json` or
    /// `$HOME/.cfc-orders/session.json`
    #[serde(default)]
    pub session_file: Option<PathBuf>,

    #[validate(custom = "validate_log_level")]
    pub log_level: String,

    /// Log in JSON format (structured logging)
    pub log_json: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            app_password: DEFAULT_APP_PASSWORD.to_string(),
            order_page_size: DEFAULT_ORDER_PAGE_SIZE,
            include_complete: true,
            request_timeout_secs: u64::from(DEFAULT_REQUEST_TIMEOUT_SECS),
            banner_ttl_secs: u64::from(DEFAULT_BANNER_TTL_SECS),
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            session_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
        }
    }
}

impl DashboardConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn banner_ttl(&self) -> Duration {
        Duration::from_secs(self.banner_ttl_secs)
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validates log level values
fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if valid_levels.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("log_level");
        err.message = Some("Must be one of: trace, debug, info, warn, error".into());
        Err(err)
    }
}

/// Initializes tracing using the provided log level as the default filter.
/// Output goes to stderr so command output on stdout stays parseable.
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_directive = format!("cfc_orders={},reqwest=warn", level);
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    let builder = fmt()
        .with_env_filter(EnvFilter::new(filter_directive))
        .with_writer(std::io::stderr);
    if json {
        let _ = builder.json().try_init();
    } else {
        let _ = builder.try_init();
    }
}

/// Loads dashboard configuration
///
/// Layers configuration sources in this order:
/// 1. Built-in defaults
/// 2. Default config (config/default.toml)
/// 3. Environment-specific config (config/{CFC_ENV}.toml)
/// 4. Environment variables (CFC__*)
pub fn load_config() -> Result<DashboardConfig, AppConfigError> {
    let run_env = env::var("CFC_ENV").unwrap_or_else(|_| DEFAULT_ENV.to_string());
    load_config_from(CONFIG_DIR, &run_env)
}

/// Same layering as [`load_config`], reading files from `dir`.
pub fn load_config_from(
    dir: impl AsRef<Path>,
    run_env: &str,
) -> Result<DashboardConfig, AppConfigError> {
    let dir = dir.as_ref();
    info!("Loading configuration for environment: {}", run_env);

    if !dir.exists() {
        info!(
            "Config directory '{}' not found; relying on built-in defaults and environment variables",
            dir.display()
        );
    }

    let config = Config::builder()
        .set_default("api_url", DEFAULT_API_URL)?
        .set_default("app_password", DEFAULT_APP_PASSWORD)?
        .set_default("order_page_size", i64::from(DEFAULT_ORDER_PAGE_SIZE))?
        .set_default("include_complete", true)?
        .set_default("request_timeout_secs", i64::from(DEFAULT_REQUEST_TIMEOUT_SECS))?
        .set_default("banner_ttl_secs", i64::from(DEFAULT_BANNER_TTL_SECS))?
        .set_default("screen_width", i64::from(DEFAULT_SCREEN_WIDTH))?
        .set_default("screen_height", i64::from(DEFAULT_SCREEN_HEIGHT))?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .add_source(File::from(dir.join("default")).required(false))
        .add_source(File::from(dir.join(run_env)).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let dashboard_config: DashboardConfig = config.try_deserialize()?;

    dashboard_config.validate().map_err(|e| {
        error!("Configuration validation failed: {:?}", e);
        AppConfigError::Validation(e)
    })?;

    info!("Configuration loaded successfully");
    Ok(dashboard_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn defaults_apply_without_files() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from(dir.path().join("missing"), "development").unwrap();

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.order_page_size, 200);
        assert!(config.include_complete);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.session_file, None);
    }

    #[test]
    fn environment_file_overrides_default_file() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            "default.toml",
            r#"
                api_url = "http://localhost:9000"
                order_page_size = 50
            "#,
        );
        write_config(&dir, "staging.toml", "order_page_size = 75\nlog_json = true\n");

        let config = load_config_from(dir.path(), "staging").unwrap();
        assert_eq!(config.api_url, "http://localhost:9000");
        assert_eq!(config.order_page_size, 75);
        assert!(config.log_json);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir,
            "default.toml",
            "order_page_size = 0\nlog_level = \"loud\"\n",
        );

        match load_config_from(dir.path(), "development") {
            Err(AppConfigError::Validation(errors)) => {
                let fields = errors.field_errors();
                assert!(fields.contains_key("order_page_size"));
                assert!(fields.contains_key("log_level"));
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "default.toml", "database_url = \"sqlite://x\"\n");
        assert!(matches!(
            load_config_from(dir.path(), "development"),
            Err(AppConfigError::Load(_))
        ));
    }
}
