//! Mock HTTP server setup for integration tests

use classify_lib_rust::{ApiClient, ClientConfig};
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

pub const TEST_API_KEY: &str = "test-key";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// Create a client pointed at the mock server, ignoring the process environment.
    pub fn create_test_client(&self) -> ApiClient {
        client_for(&self.base_url)
    }

    /// Mock a JSON response for `method path`, requiring the API key header.
    pub async fn mock_json(&self, method: &str, path: &str, status: u16, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock(method, path)
            .match_header("authorization", format!("Key {}", TEST_API_KEY).as_str())
            .match_query(Matcher::Any)
            .with_status(status as usize)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock a JSON response that only matches a given request body.
    pub async fn mock_json_with_body(
        &self,
        method: &str,
        path: &str,
        expected_body: serde_json::Value,
        status: u16,
        body: &str,
    ) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock(method, path)
            .match_header("authorization", format!("Key {}", TEST_API_KEY).as_str())
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(expected_body))
            .with_status(status as usize)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock a non-JSON body, as an HTML error page from a proxy would be.
    pub async fn mock_raw(&self, method: &str, path: &str, status: u16, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock(method, path)
            .with_status(status as usize)
            .with_header("content-type", "text/html")
            .with_body(body)
            .create_async()
            .await
    }
}

pub fn client_for(base_url: &str) -> ApiClient {
    ApiClient::builder()
        .config(ClientConfig::default())
        .api_key(TEST_API_KEY)
        .base_url(base_url)
        .timeout(Duration::from_secs(5))
        .build()
        .expect("test client")
}

/// A client whose requests can never connect.
pub fn unreachable_client() -> ApiClient {
    client_for("http://127.0.0.1:1")
}

pub fn status_body(code: u32, description: &str, extra: &str) -> String {
    let status = format!(r#"{{"code":{},"description":"{}"}}"#, code, description);
    if extra.is_empty() {
        format!(r#"{{"status":{}}}"#, status)
    } else {
        format!(r#"{{"status":{},{}}}"#, status, extra)
    }
}
