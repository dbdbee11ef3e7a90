//! API status object carried under the `"status"` key of every response body.

use serde::{Deserialize, Serialize};

/// Status code the API returns for a fully successful call.
pub const STATUS_SUCCESS: u32 = 10000;
/// Status code for a batch call where some items failed.
pub const STATUS_MIXED_SUCCESS: u32 = 10010;

/// Where a status came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusOrigin {
    /// Parsed from the response body.
    #[default]
    Remote,
    /// Synthesized from the HTTP status line because the body had no status object.
    Http,
    /// No usable response was obtained.
    Network,
    /// A 2xx body could not be converted into the expected result type.
    Unmarshal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip)]
    origin: StatusOrigin,
}

impl ApiStatus {
    pub fn new(code: u32, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            details: None,
            origin: StatusOrigin::Remote,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Status used when no valid API response could be obtained.
    pub fn network_error() -> Self {
        Self {
            code: 0,
            description: "Network error".to_string(),
            details: None,
            origin: StatusOrigin::Network,
        }
    }

    /// Status used when a successful body did not match the expected result shape.
    pub fn unmarshal_error(details: impl Into<String>) -> Self {
        Self {
            code: 0,
            description: "Failed to unmarshal response".to_string(),
            details: Some(details.into()),
            origin: StatusOrigin::Unmarshal,
        }
    }

    /// Status synthesized from the HTTP status code.
    pub fn from_http(http_code: u16) -> Self {
        let description = reqwest::StatusCode::from_u16(http_code)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown status")
            .to_string();
        Self {
            code: u32::from(http_code),
            description,
            details: None,
            origin: StatusOrigin::Http,
        }
    }

    pub fn origin(&self) -> StatusOrigin {
        self.origin
    }

    pub fn is_network_error(&self) -> bool {
        self.origin == StatusOrigin::Network
    }

    /// Whether the API itself reported success (`10000`).
    pub fn is_success_code(&self) -> bool {
        self.code == STATUS_SUCCESS
    }

    pub fn is_mixed_success(&self) -> bool {
        self.code == STATUS_MIXED_SUCCESS
    }

    /// Description followed by details, when present.
    pub fn message(&self) -> String {
        match &self.details {
            Some(d) if !d.is_empty() => format!("{}: {}", self.description, d),
            _ => self.description.clone(),
        }
    }
}

impl std::fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message())
    }
}
