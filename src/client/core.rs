use crate::client::builder::ApiClientBuilder;
use crate::client::concepts::SearchConceptsRequestBuilder;
use crate::client::inputs::AddInputsRequestBuilder;
use crate::client::list::ListRequestBuilder;
use crate::client::predict::PredictRequestBuilder;
use crate::request::ApiRequest;
use crate::transport::HttpTransport;
use crate::types::{Concept, Input, Model};
use crate::unmarshal;
use crate::{Error, ErrorContext, Result};
use reqwest::Method;
use std::sync::Arc;

pub(crate) const API_VERSION: &str = "v2";

/// Entry point for all API calls. Cloning shares the connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    pub(crate) transport: Arc<HttpTransport>,
}

pub(crate) fn segments<const N: usize>(parts: [&str; N]) -> Vec<String> {
    std::iter::once(API_VERSION)
        .chain(parts)
        .map(str::to_string)
        .collect()
}

pub(crate) fn require_id(id: &str, field: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(Error::validation_with_context(
            "id must not be empty",
            ErrorContext::new().with_field_path(field.to_string()),
        ));
    }
    Ok(())
}

impl ApiClient {
    /// Client for `api_key`, other settings from the environment.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ApiClientBuilder::new().api_key(api_key).build()
    }

    /// Client configured entirely from the environment.
    pub fn from_env() -> Result<Self> {
        ApiClientBuilder::new().build()
    }

    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    pub fn base_url(&self) -> &url::Url {
        self.transport.base_url()
    }

    pub(crate) fn request<T>(
        &self,
        method: Method,
        segments: Vec<String>,
        unmarshaler: impl unmarshal::JsonUnmarshaler<T> + 'static,
    ) -> ApiRequest<T> {
        ApiRequest::new(self.transport.clone(), method, segments, unmarshaler)
    }

    /// Classify inputs with a model.
    pub fn predict(&self, model_id: impl Into<String>) -> PredictRequestBuilder<'_> {
        PredictRequestBuilder::new(self, model_id.into())
    }

    pub fn get_models(&self) -> ListRequestBuilder<'_, Model> {
        ListRequestBuilder::new(self, segments(["models"]), "models")
    }

    pub fn get_model(&self, model_id: &str) -> Result<ApiRequest<Model>> {
        require_id(model_id, "model_id")?;
        Ok(self.request(
            Method::GET,
            segments(["models", model_id]),
            unmarshal::field::<Model>("model"),
        ))
    }

    pub fn get_concepts(&self) -> ListRequestBuilder<'_, Concept> {
        ListRequestBuilder::new(self, segments(["concepts"]), "concepts")
    }

    pub fn get_concept(&self, concept_id: &str) -> Result<ApiRequest<Concept>> {
        require_id(concept_id, "concept_id")?;
        Ok(self.request(
            Method::GET,
            segments(["concepts", concept_id]),
            unmarshal::field::<Concept>("concept"),
        ))
    }

    /// Search concepts by name. `*` acts as a wildcard.
    pub fn search_concepts(&self, name: impl Into<String>) -> SearchConceptsRequestBuilder<'_> {
        SearchConceptsRequestBuilder::new(self, name.into())
    }

    pub fn get_inputs(&self) -> ListRequestBuilder<'_, Input> {
        ListRequestBuilder::new(self, segments(["inputs"]), "inputs")
    }

    pub fn get_input(&self, input_id: &str) -> Result<ApiRequest<Input>> {
        require_id(input_id, "input_id")?;
        Ok(self.request(
            Method::GET,
            segments(["inputs", input_id]),
            unmarshal::field::<Input>("input"),
        ))
    }

    pub fn add_inputs(&self) -> AddInputsRequestBuilder<'_> {
        AddInputsRequestBuilder::new(self)
    }

    pub fn delete_input(&self, input_id: &str) -> Result<ApiRequest<()>> {
        require_id(input_id, "input_id")?;
        Ok(self.request(
            Method::DELETE,
            segments(["inputs", input_id]),
            unmarshal::unit(),
        ))
    }

    pub fn delete_all_inputs(&self) -> ApiRequest<()> {
        self.request(Method::DELETE, segments(["inputs"]), unmarshal::unit())
            .with_body(serde_json::json!({ "delete_all": true }))
    }
}
