use crate::client::core::{require_id, segments, ApiClient};
use crate::request::ApiRequest;
use crate::types::{Input, Output};
use crate::unmarshal;
use crate::{Error, ErrorContext, Result};
use reqwest::Method;
use serde_json::{json, Map, Value};

/// Most inputs accepted by a single predict or add-inputs call.
pub const MAX_INPUTS_PER_CALL: usize = 128;
pub const MAX_CONCEPTS_LIMIT: u32 = 200;

/// Builder for `POST /v2/models/{id}[/versions/{version}]/outputs`.
pub struct PredictRequestBuilder<'a> {
    client: &'a ApiClient,
    model_id: String,
    version_id: Option<String>,
    inputs: Vec<Input>,
    min_value: Option<f32>,
    max_concepts: Option<u32>,
    language: Option<String>,
}

impl<'a> PredictRequestBuilder<'a> {
    pub(crate) fn new(client: &'a ApiClient, model_id: String) -> Self {
        Self {
            client,
            model_id,
            version_id: None,
            inputs: Vec::new(),
            min_value: None,
            max_concepts: None,
            language: None,
        }
    }

    pub fn with_inputs(mut self, inputs: impl IntoIterator<Item = Input>) -> Self {
        self.inputs.extend(inputs);
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.inputs.push(Input::from_url(url));
        self
    }

    pub fn with_image_bytes(mut self, bytes: impl AsRef<[u8]>) -> Self {
        self.inputs.push(Input::from_bytes(bytes));
        self
    }

    /// Pin a model version instead of the model's active one.
    pub fn with_version(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }

    /// Drop predicted concepts scoring below `min_value` (`0.0..=1.0`).
    pub fn with_min_value(mut self, min_value: f32) -> Self {
        self.min_value = Some(min_value);
        self
    }

    pub fn with_max_concepts(mut self, max_concepts: u32) -> Self {
        self.max_concepts = Some(max_concepts);
        self
    }

    /// Language for concept names (e.g. `"zh"`).
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    fn output_config(&self) -> Option<Value> {
        let mut cfg = Map::new();
        if let Some(v) = self.min_value {
            cfg.insert("min_value".into(), json!(v));
        }
        if let Some(n) = self.max_concepts {
            cfg.insert("max_concepts".into(), json!(n));
        }
        if let Some(lang) = &self.language {
            cfg.insert("language".into(), json!(lang));
        }
        if cfg.is_empty() {
            None
        } else {
            Some(json!({ "output_info": { "output_config": cfg } }))
        }
    }

    fn validate(&self) -> Result<()> {
        require_id(&self.model_id, "predict.model_id")?;
        if let Some(v) = &self.version_id {
            require_id(v, "predict.version_id")?;
        }
        validate_inputs(&self.inputs, "predict")?;
        if let Some(v) = self.min_value {
            if !(0.0..=1.0).contains(&v) {
                return Err(Error::validation_with_context(
                    "min_value out of range",
                    ErrorContext::new()
                        .with_field_path("predict.min_value")
                        .with_details(format!("expected 0.0..=1.0, got {}", v)),
                ));
            }
        }
        if let Some(n) = self.max_concepts {
            if n == 0 || n > MAX_CONCEPTS_LIMIT {
                return Err(Error::validation_with_context(
                    "max_concepts out of range",
                    ErrorContext::new()
                        .with_field_path("predict.max_concepts")
                        .with_details(format!("expected 1..={}, got {}", MAX_CONCEPTS_LIMIT, n)),
                ));
            }
        }
        if self.language.as_deref().is_some_and(|l| l.trim().is_empty()) {
            return Err(Error::validation_with_context(
                "language must not be empty",
                ErrorContext::new().with_field_path("predict.language"),
            ));
        }
        Ok(())
    }

    pub fn build(self) -> Result<ApiRequest<Vec<Output>>> {
        self.validate()?;
        let path = match &self.version_id {
            Some(v) => segments(["models", &self.model_id, "versions", v, "outputs"]),
            None => segments(["models", &self.model_id, "outputs"]),
        };
        let mut body = json!({ "inputs": serde_json::to_value(&self.inputs)? });
        if let Some(model) = self.output_config() {
            body["model"] = model;
        }
        Ok(self
            .client
            .request(Method::POST, path, unmarshal::list::<Output>("outputs"))
            .with_body(body))
    }
}

pub(crate) fn validate_inputs(inputs: &[Input], source: &str) -> Result<()> {
    if inputs.is_empty() {
        return Err(Error::validation_with_context(
            "at least one input is required",
            ErrorContext::new()
                .with_field_path(format!("{}.inputs", source))
                .with_source(source.to_string()),
        ));
    }
    if inputs.len() > MAX_INPUTS_PER_CALL {
        return Err(Error::validation_with_context(
            "too many inputs",
            ErrorContext::new()
                .with_field_path(format!("{}.inputs", source))
                .with_details(format!(
                    "at most {} per call, got {}",
                    MAX_INPUTS_PER_CALL,
                    inputs.len()
                )),
        ));
    }
    for (i, input) in inputs.iter().enumerate() {
        let field = format!("{}.inputs[{}].data.image", source, i);
        let image = input.image().ok_or_else(|| {
            Error::validation_with_context(
                "input has no image",
                ErrorContext::new().with_field_path(field.clone()),
            )
        })?;
        if !image.has_source() {
            return Err(Error::validation_with_context(
                "image needs a URL or inline bytes",
                ErrorContext::new().with_field_path(field),
            ));
        }
        if !image.crop_is_valid() {
            return Err(Error::validation_with_context(
                "invalid crop box",
                ErrorContext::new().with_field_path(format!("{}.crop", field)),
            ));
        }
    }
    Ok(())
}
