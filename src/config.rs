//! Client configuration with environment overrides.
//!
//! Recognized variables:
//! - `CLASSIFY_API_KEY`
//! - `CLASSIFY_BASE_URL` (default `https://api.clarifai.com`)
//! - `CLASSIFY_HTTP_TIMEOUT_SECS` (default 30)
//! - `CLASSIFY_HTTP_CONNECT_TIMEOUT_SECS` (default 10)
//! - `CLASSIFY_HTTP_POOL_MAX_IDLE_PER_HOST` (default 32)
//! - `CLASSIFY_HTTP_POOL_IDLE_TIMEOUT_SECS` (default 90)
//! - `CLASSIFY_PROXY_URL`

use crate::{Error, ErrorContext, Result};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.clarifai.com";
pub const ENV_API_KEY: &str = "CLASSIFY_API_KEY";
pub const ENV_BASE_URL: &str = "CLASSIFY_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "CLASSIFY_HTTP_TIMEOUT_SECS";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "CLASSIFY_HTTP_CONNECT_TIMEOUT_SECS";
pub const ENV_POOL_MAX_IDLE: &str = "CLASSIFY_HTTP_POOL_MAX_IDLE_PER_HOST";
pub const ENV_POOL_IDLE_TIMEOUT_SECS: &str = "CLASSIFY_HTTP_POOL_IDLE_TIMEOUT_SECS";
pub const ENV_PROXY_URL: &str = "CLASSIFY_PROXY_URL";

/// Settings used to build the HTTP transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub pool_idle_timeout: Duration,
    pub proxy_url: Option<String>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_max_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
            proxy_url: None,
            user_agent: format!("classify-lib-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values from an arbitrary key lookup.
    ///
    /// Unparseable numeric values are ignored and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let secs = |key: &str| non_empty(key).and_then(|s| s.parse::<u64>().ok());

        if let Some(key) = non_empty(ENV_API_KEY) {
            cfg.api_key = Some(key);
        }
        if let Some(url) = non_empty(ENV_BASE_URL) {
            cfg.base_url = url;
        }
        if let Some(s) = secs(ENV_TIMEOUT_SECS) {
            cfg.timeout = Duration::from_secs(s);
        }
        if let Some(s) = secs(ENV_CONNECT_TIMEOUT_SECS) {
            cfg.connect_timeout = Duration::from_secs(s);
        }
        if let Some(n) = non_empty(ENV_POOL_MAX_IDLE).and_then(|s| s.parse::<usize>().ok()) {
            cfg.pool_max_idle_per_host = n;
        }
        if let Some(s) = secs(ENV_POOL_IDLE_TIMEOUT_SECS) {
            cfg.pool_idle_timeout = Duration::from_secs(s);
        }
        cfg.proxy_url = non_empty(ENV_PROXY_URL);
        cfg
    }

    /// Check the settings and return the API key and normalized base URL.
    pub fn validate(&self) -> Result<(String, url::Url)> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    format!("API key required ({})", ENV_API_KEY),
                    ErrorContext::new()
                        .with_field_path("config.api_key")
                        .with_source("client_config"),
                )
            })?
            .to_string();

        let base_url = url::Url::parse(&self.base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("config.base_url")
                    .with_details(self.base_url.clone())
                    .with_source("client_config"),
            )
        })?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(Error::configuration_with_context(
                "Base URL must be an absolute http(s) URL",
                ErrorContext::new()
                    .with_field_path("config.base_url")
                    .with_details(self.base_url.clone()),
            ));
        }

        if self.timeout.is_zero() {
            return Err(Error::configuration_with_context(
                "Timeout must be greater than zero",
                ErrorContext::new().with_field_path("config.timeout"),
            ));
        }

        Ok((api_key, base_url))
    }
}
