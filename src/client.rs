//! API client and per-endpoint request builders.
//!
//! Keep the public surface small and predictable: one cloneable client,
//! one builder per endpoint. Implementation is split into submodules under
//! `src/client/`.

mod builder;
mod concepts;
mod core;
mod inputs;
mod list;
mod predict;

pub use builder::ApiClientBuilder;
pub use concepts::SearchConceptsRequestBuilder;
pub use self::core::ApiClient;
pub use inputs::AddInputsRequestBuilder;
pub use list::ListRequestBuilder;
pub use predict::{PredictRequestBuilder, MAX_CONCEPTS_LIMIT, MAX_INPUTS_PER_CALL};

#[cfg(test)]
pub(crate) fn test_client() -> ApiClient {
    ApiClientBuilder::new()
        .config(crate::config::ClientConfig::default())
        .api_key("test-key")
        .base_url("http://127.0.0.1:9")
        .build()
        .expect("test client")
}
