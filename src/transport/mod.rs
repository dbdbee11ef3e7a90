//! HTTP transport shared by every request built from one client.

mod http;

pub use http::{Call, HttpTransport, RawResponse, REQUEST_ID_HEADER};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("Transport error: {0}")]
    Other(String),
}
