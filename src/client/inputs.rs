use crate::client::core::{segments, ApiClient};
use crate::client::predict::validate_inputs;
use crate::request::ApiRequest;
use crate::types::Input;
use crate::unmarshal;
use crate::Result;
use reqwest::Method;
use serde_json::json;

/// Builder for `POST /v2/inputs`.
pub struct AddInputsRequestBuilder<'a> {
    client: &'a ApiClient,
    inputs: Vec<Input>,
    allow_duplicate_url: bool,
}

impl<'a> AddInputsRequestBuilder<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
            inputs: Vec::new(),
            allow_duplicate_url: false,
        }
    }

    pub fn plus(mut self, input: Input) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn plus_all(mut self, inputs: impl IntoIterator<Item = Input>) -> Self {
        self.inputs.extend(inputs);
        self
    }

    /// Accept image URLs that already exist in the application.
    pub fn allow_duplicate_url(mut self, allow: bool) -> Self {
        self.allow_duplicate_url = allow;
        self
    }

    pub fn build(mut self) -> Result<ApiRequest<Vec<Input>>> {
        validate_inputs(&self.inputs, "add_inputs")?;
        if self.allow_duplicate_url {
            for image in self.inputs.iter_mut().filter_map(|i| i.data.image.as_mut()) {
                if image.url.is_some() {
                    image.allow_duplicate_url = true;
                }
            }
        }
        let inputs = serde_json::to_value(&self.inputs)?;
        Ok(self
            .client
            .request(Method::POST, segments(["inputs"]), unmarshal::list::<Input>("inputs"))
            .with_body(json!({ "inputs": inputs })))
    }
}
