//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.healthnews/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub use crate::Environment;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HealthConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub environment: Option<Environment>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub development_url: Option<String>,
    pub production_url: Option<String>,
    pub media_host: Option<String>,
    pub timeout_ms: Option<u64>,
    pub enforce_timeout: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DEVELOPMENT_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PRODUCTION_URL: &str = "https://your-production-url.com";
/// Host prepended to `/media/` paths. Always the development server.
pub const DEFAULT_MEDIA_HOST: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub environment: Environment,
    pub base_url: String,
    pub media_host: String,
    pub timeout: Duration,
    /// Historically the timeout was configured but never applied; off by default.
    pub enforce_timeout: bool,
}

/// Values read from the process environment (after `.env` is loaded).
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub environment: Option<String>,
    pub base_url: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("HEALTHNEWS_ENV").ok(),
            base_url: std::env::var("HEALTHNEWS_BASE_URL").ok(),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.healthnews/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".healthnews").join("config.toml"))
}

/// Load config from `~/.healthnews/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `HealthConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<HealthConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(HealthConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(HealthConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: HealthConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# healthnews configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# environment = "development"        # "development" or "production" (or HEALTHNEWS_ENV)

# [api]
# development_url = "http://127.0.0.1:8000"
# production_url = "https://your-production-url.com"
# media_host = "http://127.0.0.1:8000"   # prepended to /media/ image paths
# timeout_ms = 10000
# enforce_timeout = false                 # apply timeout_ms to every request
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config from the file, the process environment and CLI flags.
pub fn resolve(config: &HealthConfig, cli_env: Option<Environment>) -> ResolvedConfig {
    resolve_with(config, cli_env, &EnvOverrides::from_env())
}

/// Collapses defaults → config file → `env` → CLI into concrete values.
pub fn resolve_with(
    config: &HealthConfig,
    cli_env: Option<Environment>,
    env: &EnvOverrides,
) -> ResolvedConfig {
    // Environment: CLI → env → config → build mode
    let environment = cli_env
        .or_else(|| {
            env.environment.as_deref().and_then(|raw| {
                let parsed = Environment::from_str(raw, true).ok();
                if parsed.is_none() {
                    warn!("Ignoring unknown HEALTHNEWS_ENV value: {raw}");
                }
                parsed
            })
        })
        .or(config.general.environment)
        .unwrap_or_default();

    // Base URL: env → config for the selected environment → default
    let base_url = env.base_url.clone().unwrap_or_else(|| match environment {
        Environment::Development => config
            .api
            .development_url
            .clone()
            .unwrap_or_else(|| DEFAULT_DEVELOPMENT_URL.to_string()),
        Environment::Production => config
            .api
            .production_url
            .clone()
            .unwrap_or_else(|| DEFAULT_PRODUCTION_URL.to_string()),
    });

    ResolvedConfig {
        environment,
        base_url,
        media_host: config
            .api
            .media_host
            .clone()
            .unwrap_or_else(|| DEFAULT_MEDIA_HOST.to_string()),
        timeout: Duration::from_millis(config.api.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)),
        enforce_timeout: config.api.enforce_timeout.unwrap_or(false),
    }
}
