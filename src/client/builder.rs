use crate::client::core::ApiClient;
use crate::config::ClientConfig;
use crate::transport::HttpTransport;
use crate::Result;
use std::sync::Arc;
use std::time::Duration;

/// Builder for creating clients with custom configuration.
///
/// Starts from [`ClientConfig::from_env`]; explicit settings win over the
/// environment.
pub struct ApiClientBuilder {
    config: Option<ClientConfig>,
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    pool_max_idle_per_host: Option<usize>,
    pool_idle_timeout: Option<Duration>,
    proxy_url: Option<String>,
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            api_key: None,
            base_url: None,
            timeout: None,
            connect_timeout: None,
            pool_max_idle_per_host: None,
            pool_idle_timeout: None,
            proxy_url: None,
            user_agent: None,
        }
    }

    /// Use `config` as the base instead of reading the environment.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API base URL (e.g. a regional endpoint or a mock server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn pool_max_idle_per_host(mut self, n: usize) -> Self {
        self.pool_max_idle_per_host = Some(n);
        self
    }

    /// How long an idle pooled connection is kept open.
    pub fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = Some(timeout);
        self
    }

    pub fn proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Resolved configuration, without building the transport.
    pub fn resolve(self) -> ClientConfig {
        let mut cfg = self.config.unwrap_or_else(ClientConfig::from_env);
        if let Some(key) = self.api_key {
            cfg.api_key = Some(key);
        }
        if let Some(url) = self.base_url {
            cfg.base_url = url;
        }
        if let Some(t) = self.timeout {
            cfg.timeout = t;
        }
        if let Some(t) = self.connect_timeout {
            cfg.connect_timeout = t;
        }
        if let Some(n) = self.pool_max_idle_per_host {
            cfg.pool_max_idle_per_host = n;
        }
        if let Some(t) = self.pool_idle_timeout {
            cfg.pool_idle_timeout = t;
        }
        if let Some(p) = self.proxy_url {
            cfg.proxy_url = Some(p);
        }
        if let Some(ua) = self.user_agent {
            cfg.user_agent = ua;
        }
        cfg
    }

    pub fn build(self) -> Result<ApiClient> {
        let cfg = self.resolve();
        let transport = HttpTransport::new(&cfg)?;
        tracing::debug!(base_url = %transport.base_url(), "client initialized");
        Ok(ApiClient {
            transport: Arc::new(transport),
        })
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
