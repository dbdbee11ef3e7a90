use crate::client::core::ApiClient;
use crate::request::ApiRequest;
use crate::types::Pagination;
use crate::unmarshal;
use crate::Result;
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Builder for paginated `GET` list endpoints.
pub struct ListRequestBuilder<'a, T> {
    client: &'a ApiClient,
    segments: Vec<String>,
    key: &'static str,
    pagination: Pagination,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T> ListRequestBuilder<'a, T>
where
    T: DeserializeOwned + Send + 'static,
{
    pub(crate) fn new(client: &'a ApiClient, segments: Vec<String>, key: &'static str) -> Self {
        Self {
            client,
            segments,
            key,
            pagination: Pagination::default(),
            _marker: PhantomData,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.pagination.page = page;
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.pagination.per_page = per_page;
        self
    }

    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn build(self) -> Result<ApiRequest<Vec<T>>> {
        self.pagination.validate()?;
        Ok(self
            .client
            .request(Method::GET, self.segments, unmarshal::list::<T>(self.key))
            .with_query(self.pagination.query()))
    }
}
