use crate::client::core::{segments, ApiClient};
use crate::request::ApiRequest;
use crate::types::{Concept, Pagination};
use crate::unmarshal;
use crate::{Error, ErrorContext, Result};
use reqwest::Method;
use serde_json::json;

/// Builder for `POST /v2/concepts/searches`.
pub struct SearchConceptsRequestBuilder<'a> {
    client: &'a ApiClient,
    name: String,
    language: Option<String>,
    pagination: Pagination,
}

impl<'a> SearchConceptsRequestBuilder<'a> {
    pub(crate) fn new(client: &'a ApiClient, name: String) -> Self {
        Self {
            client,
            name,
            language: None,
            pagination: Pagination::default(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.pagination.page = page;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.pagination.per_page = per_page;
        self
    }

    pub fn build(self) -> Result<ApiRequest<Vec<Concept>>> {
        if self.name.trim().is_empty() {
            return Err(Error::validation_with_context(
                "search name must not be empty",
                ErrorContext::new().with_field_path("concept_query.name"),
            ));
        }
        self.pagination.validate()?;

        let mut query = json!({ "name": self.name });
        if let Some(lang) = self.language {
            query["language"] = json!(lang);
        }
        let body = json!({
            "concept_query": query,
            "pagination": {
                "page": self.pagination.page,
                "per_page": self.pagination.per_page,
            },
        });
        Ok(self
            .client
            .request(
                Method::POST,
                segments(["concepts", "searches"]),
                unmarshal::list::<Concept>("concepts"),
            )
            .with_body(body))
    }
}
