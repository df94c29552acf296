//! Configuration loading.
//!
//! Non-secret settings come from `config.toml` (or the embedded defaults) and may be
//! overridden from the environment. Secrets are read from the environment only; there is no
//! file key and no default for any of them.

use serde::Deserialize;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "ORDER_ADMIN_CONFIG";
pub const PROJECT_ID_ENV: &str = "SANITY_PROJECT_ID";
pub const DATASET_ENV: &str = "SANITY_DATASET";
pub const API_VERSION_ENV: &str = "SANITY_API_VERSION";
pub const API_TOKEN_ENV: &str = "SANITY_API_TOKEN";
pub const ADMIN_EMAIL_ENV: &str = "ORDER_ADMIN_EMAIL";
pub const ADMIN_PASSWORD_ENV: &str = "ORDER_ADMIN_PASSWORD";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[sanity]
project_id = ""
dataset = ""
api_version = "2025-02-07"
use_cdn = false
timeout_secs = 30
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Missing environment variable: {0}")]
    MissingSecret(&'static str),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub sanity: SanitySettings,
}

/// Where the order documents live.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SanitySettings {
    pub project_id: String,
    pub dataset: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Reads through the CDN may be stale; the admin panel reads the live API by default.
    #[serde(default)]
    pub use_cdn: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_version() -> String {
    "2025-02-07".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    /// Applies `SANITY_*` overrides found through `lookup`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(project_id) = lookup(PROJECT_ID_ENV) {
            self.sanity.project_id = project_id;
        }
        if let Some(dataset) = lookup(DATASET_ENV) {
            self.sanity.dataset = dataset;
        }
        if let Some(api_version) = lookup(API_VERSION_ENV) {
            self.sanity.api_version = api_version;
        }
        self
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.sanity.project_id.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "sanity.project_id is empty (set it in config.toml or {PROJECT_ID_ENV})"
            )));
        }
        if self.sanity.dataset.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "sanity.dataset is empty (set it in config.toml or {DATASET_ENV})"
            )));
        }
        if self.sanity.timeout_secs == 0 {
            return Err(ConfigError::Invalid("sanity.timeout_secs must be positive".into()));
        }
        Ok(self)
    }
}

/// Load configuration
///
/// Search order:
/// 1. The file named by `ORDER_ADMIN_CONFIG`
/// 2. `config.toml` next to the executable
/// 3. Falls back to embedded defaults
///
/// Environment overrides are applied last, then the result is validated.
pub fn load_config() -> Result<Config, ConfigError> {
    let env = |key: &str| std::env::var(key).ok();

    let config = match config_path(&env) {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            read_config(&path)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            Config::embedded()?
        }
    };

    config.with_overrides(env).validate()
}

fn config_path(env: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    if let Some(explicit) = env(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(explicit));
    }
    let exe_path = std::env::current_exe().ok()?;
    let config_path = exe_path.parent()?.join("config.toml");
    if config_path.exists() {
        Some(config_path)
    } else {
        tracing::warn!("config.toml not found at: {}", config_path.display());
        None
    }
}

pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Config::from_toml(&contents)
}

/// A value that must not show up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Secret(****)")
    }
}

/// Credentials the operator must present to open a session.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: Secret,
}

/// Everything that must stay out of source control.
#[derive(Debug, Clone)]
pub struct Secrets {
    pub api_token: Secret,
    pub admin: AdminCredentials,
}

impl Secrets {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads every secret through `lookup`. Missing or blank values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingSecret(key))
        };
        Ok(Self {
            api_token: Secret::new(require(API_TOKEN_ENV)?),
            admin: AdminCredentials {
                email: require(ADMIN_EMAIL_ENV)?,
                password: Secret::new(require(ADMIN_PASSWORD_ENV)?),
            },
        })
    }
}
