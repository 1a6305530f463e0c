//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::state::DEFAULT_PAGE_SIZE;

/// Record source used when nothing else is configured.
pub const DEFAULT_SOURCE_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/roster/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Record source: an http(s) URL or a local file path.
    #[serde(default)]
    pub source: Option<String>,

    /// Rows per page. Zero is rejected at parse time.
    #[serde(default)]
    pub page_size: Option<NonZeroUsize>,

    /// HTTP request timeout in seconds.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Record source (URL or path).
    pub source: String,
    /// Rows per page.
    pub page_size: NonZeroUsize,
    /// HTTP request timeout.
    pub request_timeout: Duration,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/roster/roster.log` on Unix-like systems,
/// or the platform state directory elsewhere. Falls back to the current
/// directory when no state directory is known.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("roster").join("roster.log")
    } else {
        PathBuf::from("roster.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/roster/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("roster").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `ROSTER_CONFIG` environment variable
/// 3. Default path `~/.config/roster/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("ROSTER_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        source: config.source.unwrap_or(defaults.source),
        page_size: config.page_size.unwrap_or(defaults.page_size),
        request_timeout: config
            .request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `ROSTER_SOURCE`: Override record source
/// - `ROSTER_PAGE_SIZE`: Override rows per page (ignored unless a positive integer)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(source) = std::env::var("ROSTER_SOURCE") {
        if !source.trim().is_empty() {
            config.source = source;
        }
    }

    if let Ok(raw) = std::env::var("ROSTER_PAGE_SIZE") {
        match raw.trim().parse::<NonZeroUsize>() {
            Ok(size) => config.page_size = size,
            Err(_) => tracing::warn!(value = %raw, "Ignoring invalid ROSTER_PAGE_SIZE"),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    source_override: Option<String>,
    page_size_override: Option<NonZeroUsize>,
) -> ResolvedConfig {
    if let Some(source) = source_override {
        config.source = source;
    }

    if let Some(page_size) = page_size_override {
        config.page_size = page_size;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
