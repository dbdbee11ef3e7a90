//! Prepared API requests and their execution.
//!
//! An [`ApiRequest`] can be executed any number of times, in one of three modes:
//!
//! | Mode | Method | Notes |
//! |------|--------|-------|
//! | async | [`ApiRequest::execute`] | awaits on the caller's runtime |
//! | blocking | [`ApiRequest::execute_blocking`] | caller's thread, outside any runtime |
//! | callback | [`ApiRequest::execute_with`] | spawned; one callback per execution |
//!
//! None of them return `Err` for API or network failures; those are classified
//! into the returned [`ApiResponse`].

mod callback;
pub(crate) mod dispatch;

pub use callback::{Callback, Handlers};

use crate::response::ApiResponse;
use crate::transport::{Call, HttpTransport};
use crate::unmarshal::JsonUnmarshaler;
use crate::{Error, Result};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tokio::task::JoinHandle;
use uuid::Uuid;

pub struct ApiRequest<T> {
    transport: Arc<HttpTransport>,
    method: Method,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    body: Option<Value>,
    unmarshaler: Arc<dyn JsonUnmarshaler<T>>,
}

impl<T> Clone for ApiRequest<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            method: self.method.clone(),
            segments: self.segments.clone(),
            query: self.query.clone(),
            body: self.body.clone(),
            unmarshaler: self.unmarshaler.clone(),
        }
    }
}

impl<T> std::fmt::Debug for ApiRequest<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("path", &self.path())
            .field("query", &self.query)
            .field("body", &self.body)
            .finish()
    }
}

impl<T> ApiRequest<T> {
    pub(crate) fn new(
        transport: Arc<HttpTransport>,
        method: Method,
        segments: Vec<String>,
        unmarshaler: impl JsonUnmarshaler<T> + 'static,
    ) -> Self {
        Self {
            transport,
            method,
            segments,
            query: Vec::new(),
            body: None,
            unmarshaler: Arc::new(unmarshaler),
        }
    }

    pub(crate) fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub(crate) fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Request path relative to the base URL, unencoded.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    fn call<'a>(&'a self, request_id: &'a str) -> Call<'a> {
        Call {
            method: &self.method,
            segments: &self.segments,
            query: &self.query,
            body: self.body.as_ref(),
            request_id,
        }
    }

    /// Send the request and classify the response.
    pub async fn execute(&self) -> ApiResponse<T> {
        let request_id = Uuid::new_v4().to_string();
        match self.transport.send(self.call(&request_id)).await {
            Ok(raw) => dispatch::classify(raw, self.unmarshaler.as_ref(), &request_id),
            Err(err) => dispatch::send_failed(&err, &request_id),
        }
    }

    /// Send the request on the current thread.
    ///
    /// Uses the blocking HTTP client, which must not be driven from inside an
    /// async runtime; call [`ApiRequest::execute`] there instead.
    pub fn execute_blocking(&self) -> ApiResponse<T> {
        let request_id = Uuid::new_v4().to_string();
        match self.transport.send_blocking(self.call(&request_id)) {
            Ok(raw) => dispatch::classify(raw, self.unmarshaler.as_ref(), &request_id),
            Err(err) => dispatch::send_failed(&err, &request_id),
        }
    }
}

impl<T: Send + 'static> ApiRequest<T> {
    /// Spawn the request onto the current tokio runtime and report the
    /// outcome to `callback`.
    ///
    /// Fails immediately when called outside a runtime. The handle resolves to
    /// the callback's own result, including [`Error::Unhandled`] for branches
    /// the callback declined.
    pub fn execute_with<C>(self, mut callback: C) -> Result<JoinHandle<Result<()>>>
    where
        C: Callback<T>,
    {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|e| Error::runtime(format!("execute_with requires a tokio runtime: {}", e)))?;
        Ok(handle.spawn(async move {
            let response = self.execute().await;
            callback::deliver(response.into_outcome(), &mut callback)
        }))
    }

    /// Same as [`ApiRequest::execute_with`] with closure handlers.
    pub fn execute_with_handlers(self, handlers: Handlers<T>) -> Result<JoinHandle<Result<()>>> {
        self.execute_with(handlers)
    }
}
