//! Runtime configuration.
//!
//! The backend base URL is the only tunable of the dashboard itself. It is
//! resolved once at startup with this precedence: `--api-url` flag, then the
//! `DEVDASH_API_URL` environment variable, then [`DEFAULT_API_URL`]. Logging
//! has its own two variables.

use std::path::PathBuf;

use crate::error::ConfigError;

/// Loopback fallback when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";
/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "DEVDASH_API_URL";
/// Environment variable holding a tracing filter directive.
pub const LOG_FILTER_ENV: &str = "DEVDASH_LOG";
/// Environment variable overriding the log file location.
pub const LOG_FILE_ENV: &str = "DEVDASH_LOG_FILE";

const DEFAULT_LOG_FILTER: &str = "info";

/// Resolved dashboard configuration.
///
/// ```ignore
/// use devdash::config::DashboardConfig;
///
/// let config = DashboardConfig::default()
///     .with_api_url("http://10.0.0.5:3000")
///     .validated()?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Backend base URL, without a trailing slash once validated
    pub api_url: String,
    /// tracing-subscriber `EnvFilter` directive
    pub log_filter: String,
    /// Explicit log file; `None` uses [`crate::logging::default_log_path`]
    pub log_file: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
        }
    }
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(url) = get(API_URL_ENV) {
            config.api_url = url;
        }
        if let Some(filter) = get(LOG_FILTER_ENV) {
            config.log_filter = filter;
        }
        if let Some(path) = get(LOG_FILE_ENV) {
            config.log_file = Some(PathBuf::from(path));
        }
        config
    }

    /// Environment plus an optional `--api-url` override, validated.
    pub fn resolve(api_url_flag: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::from_env();
        if let Some(url) = api_url_flag {
            config.api_url = url.to_string();
        }
        config.validated()
    }

    /// Validate and normalize the API URL.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        self.api_url = normalize_api_url(&self.api_url)?;
        Ok(self)
    }
}

/// Check that `raw` is an absolute http(s) URL with a host and strip any
/// trailing slash so endpoint paths can be appended directly.
pub fn normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let invalid = |reason: String| ConfigError::InvalidApiUrl {
        url: raw.to_string(),
        reason,
    };

    if trimmed.is_empty() {
        return Err(invalid("empty".to_string()));
    }

    let url = reqwest::Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{}'", other))),
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}
