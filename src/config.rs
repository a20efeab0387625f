use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info};
use validator::{Validate, ValidationError};

use crate::validation::Locale;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_BODY_SIZE: usize = 64 * 1024;
const CONFIG_DIR: &str = "config";

/// Service configuration, checked with `validator` after loading.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[validate(length(min = 1))]
    pub host: String,

    #[serde(default = "default_port")]
    #[validate(range(min = 1))]
    pub port: u16,

    #[validate(length(min = 1))]
    pub environment: String,

    #[serde(default = "default_log_level")]
    #[validate(custom = "validate_log_level")]
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format.
    #[serde(default)]
    pub log_json: bool,

    /// Catalog used for validation messages.
    #[serde(default)]
    pub locale: Locale,

    /// Request bodies above this many bytes are refused before validation.
    #[serde(default = "default_max_body_size")]
    #[validate(range(min = 1024, max = 16777216))]
    pub max_body_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            environment: DEFAULT_ENV.to_string(),
            log_level: default_log_level(),
            log_json: false,
            locale: Locale::default(),
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_max_body_size() -> usize {
    DEFAULT_MAX_BODY_SIZE
}

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

/// Installs the global subscriber. `RUST_LOG` wins over `level` when set.
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| format!("warehouse_api={},tower_http=debug", level));
    let filter = EnvFilter::new(filter_directive);

    if json {
        let _ = fmt().with_env_filter(filter).json().try_init();
    } else {
        let _ = fmt().with_env_filter(filter).try_init();
    }
}

/// Loads configuration from `config/` relative to the working directory.
///
/// Sources, lowest precedence first:
/// 1. built-in defaults
/// 2. `config/default.toml`
/// 3. `config/{RUN_ENV}.toml`
/// 4. `APP__*` environment variables
pub fn load_config() -> Result<AppConfig, AppConfigError> {
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());
    load_config_from(Path::new(CONFIG_DIR), &run_env)
}

pub fn load_config_from(dir: &Path, run_env: &str) -> Result<AppConfig, AppConfigError> {
    info!(environment = %run_env, "loading configuration");
    if !dir.exists() {
        info!(
            dir = %dir.display(),
            "config directory not found; relying on defaults and environment variables"
        );
    }

    let config = Config::builder()
        .set_default("host", "0.0.0.0")?
        .set_default("port", i64::from(DEFAULT_PORT))?
        .set_default("environment", run_env)?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .add_source(File::with_name(&dir.join("default").to_string_lossy()).required(false))
        .add_source(File::with_name(&dir.join(run_env).to_string_lossy()).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    app_config.validate().map_err(|e| {
        error!(error = ?e, "configuration validation failed");
        AppConfigError::Validation(e)
    })?;

    info!("configuration loaded");
    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::TempDir;

    fn config_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn defaults_apply_without_files() {
        let dir = config_dir(&[]);
        let config = load_config_from(dir.path(), "test").unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, "test");
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.max_body_size, DEFAULT_MAX_BODY_SIZE);
    }

    #[test]
    fn environment_file_overrides_default_file() {
        let dir = config_dir(&[
            (
                "default.toml",
                "host = \"127.0.0.1\"\nport = 9000\nlocale = \"en\"\n",
            ),
            ("staging.toml", "port = 9100\nlocale = \"pt-BR\"\nlog_json = true\n"),
        ]);
        let config = load_config_from(dir.path(), "staging").unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9100);
        assert_eq!(config.locale, Locale::PtBr);
        assert!(config.log_json);
        assert_eq!(config.bind_address(), "127.0.0.1:9100");
    }

    #[test]
    fn invalid_log_level_is_rejected() {
        let dir = config_dir(&[("default.toml", "log_level = \"loud\"\n")]);
        let result = load_config_from(dir.path(), "development");

        assert_matches!(result, Err(AppConfigError::Validation(errors)) => {
            assert!(errors.field_errors().contains_key("log_level"));
        });
    }

    #[test]
    fn unknown_keys_fail_to_load() {
        let dir = config_dir(&[("default.toml", "database_url = \"sqlite://x\"\n")]);
        assert_matches!(
            load_config_from(dir.path(), "development"),
            Err(AppConfigError::Load(_))
        );
    }

    #[test]
    fn production_flag() {
        let config = AppConfig {
            environment: "Production".into(),
            ..AppConfig::default()
        };
        assert!(config.is_production());
        assert!(!AppConfig::default().is_production());
    }
}
