use crate::config::ClientConfig;
use crate::{Error, Result};
use once_cell::sync::OnceCell;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Method, Proxy};
use serde_json::Value;
use tracing::debug;

use super::TransportError;

/// Correlation id header attached to every request.
pub const REQUEST_ID_HEADER: &str = "x-classify-request-id";

/// One prepared HTTP exchange, borrowed from an `ApiRequest`.
#[derive(Debug, Clone, Copy)]
pub struct Call<'a> {
    pub method: &'a Method,
    pub segments: &'a [String],
    pub query: &'a [(String, String)],
    pub body: Option<&'a Value>,
    pub request_id: &'a str,
}

/// Status line and body of a completed exchange.
///
/// The body is kept as a `Result` because the headers may arrive while the
/// body read still fails.
#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: std::result::Result<String, TransportError>,
}

pub struct HttpTransport {
    client: reqwest::Client,
    blocking: OnceCell<reqwest::blocking::Client>,
    config: ClientConfig,
    base_url: url::Url,
    api_key: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let (api_key, base_url) = config.validate()?;

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(Some(config.pool_idle_timeout))
            .user_agent(config.user_agent.clone());

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url.as_str())
                .map_err(|e| Error::configuration(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            blocking: OnceCell::new(),
            config: config.clone(),
            base_url,
            api_key,
        })
    }

    pub fn base_url(&self) -> &url::Url {
        &self.base_url
    }

    // Built on first use: constructing a blocking client spins up its own
    // runtime thread, which async-only users never need.
    fn blocking_client(&self) -> std::result::Result<&reqwest::blocking::Client, TransportError> {
        self.blocking.get_or_try_init(|| {
            let mut builder = reqwest::blocking::Client::builder()
                .timeout(self.config.timeout)
                .connect_timeout(self.config.connect_timeout)
                .pool_max_idle_per_host(self.config.pool_max_idle_per_host)
                .pool_idle_timeout(Some(self.config.pool_idle_timeout))
                .user_agent(self.config.user_agent.clone());
            if let Some(proxy_url) = &self.config.proxy_url {
                builder = builder.proxy(Proxy::all(proxy_url.as_str())?);
            }
            Ok(builder.build()?)
        })
    }

    /// Resolve path segments against the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[String]) -> std::result::Result<url::Url, TransportError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| TransportError::InvalidUrl(self.base_url.to_string()))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    fn auth_value(&self) -> String {
        format!("Key {}", self.api_key)
    }

    pub async fn send(&self, call: Call<'_>) -> std::result::Result<RawResponse, TransportError> {
        let url = self.endpoint(call.segments)?;
        debug!(request_id = call.request_id, method = %call.method, %url, "sending request");

        let mut req = self
            .client
            .request(call.method.clone(), url)
            .header(AUTHORIZATION, self.auth_value())
            .header(ACCEPT, "application/json")
            .header(REQUEST_ID_HEADER, call.request_id);
        if !call.query.is_empty() {
            req = req.query(call.query);
        }
        if let Some(body) = call.body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(TransportError::Http);
        Ok(RawResponse { status, body })
    }

    pub fn send_blocking(&self, call: Call<'_>) -> std::result::Result<RawResponse, TransportError> {
        let url = self.endpoint(call.segments)?;
        debug!(request_id = call.request_id, method = %call.method, %url, "sending blocking request");

        let mut req = self
            .blocking_client()?
            .request(call.method.clone(), url)
            .header(AUTHORIZATION, self.auth_value())
            .header(ACCEPT, "application/json")
            .header(REQUEST_ID_HEADER, call.request_id);
        if !call.query.is_empty() {
            req = req.query(call.query);
        }
        if let Some(body) = call.body {
            req = req.json(body);
        }

        let resp = req.send()?;
        let status = resp.status().as_u16();
        let body = resp.text().map_err(TransportError::Http);
        Ok(RawResponse { status, body })
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.config.timeout)
            .finish_non_exhaustive()
    }
}
