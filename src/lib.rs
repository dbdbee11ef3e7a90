//! # classify-lib-rust
//!
//! Client SDK for the v2 image classification REST API.
//!
//! ## Overview
//!
//! The crate builds HTTP requests for the API endpoints, dispatches them
//! through a shared connection pool, and unmarshals JSON responses into typed
//! results. Every execution is classified into exactly one of three outcomes:
//!
//! - **Success**: 2xx status and a body that converts into the expected type
//! - **Unsuccessful**: the API answered, but with an error status (or a 2xx
//!   body of the wrong shape)
//! - **Network error**: no response, or a body that is not a JSON object
//!
//! The SDK never retries, caches, or rate-limits on its own.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use classify_lib_rust::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> classify_lib_rust::Result<()> {
//!     let client = ApiClient::new("your-api-key")?;
//!
//!     let response = client
//!         .predict("general-v1.3")
//!         .with_image_url("https://samples.example.com/metro-north.jpg")
//!         .with_max_concepts(5)
//!         .build()?
//!         .execute()
//!         .await;
//!
//!     for output in response.get()? {
//!         for concept in output.concepts() {
//!             println!("{}: {:.3}", concept.label(), concept.value.unwrap_or(0.0));
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder and per-endpoint request builders |
//! | [`request`] | Prepared requests and the three execution modes |
//! | [`response`] | Classified execution results |
//! | [`types`] | Typed API objects (concepts, inputs, models, outputs) |
//! | [`unmarshal`] | Body-to-result converters |
//! | [`config`] | Client configuration and environment overrides |
//! | [`transport`] | Shared HTTP transport |
//! | [`error_code`] | Standard classes for HTTP failures |

pub mod client;
pub mod config;
pub mod error_code;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;
pub mod unmarshal;

// Re-export main types for convenience
pub use client::{ApiClient, ApiClientBuilder};
pub use config::ClientConfig;
pub use request::{ApiRequest, Callback, Handlers};
pub use response::{ApiResponse, Outcome};
pub use types::{ApiStatus, Concept, Image, Input, Model, Output};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
