use super::status::ApiStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub concepts_mutually_exclusive: bool,
    #[serde(default)]
    pub closed_environment: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_config: Option<OutputConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelVersion {
    pub id: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub status: Option<ApiStatus>,
}

/// A model hosted by the API (public or owned by the application).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub app_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub output_info: Option<OutputInfo>,
    #[serde(default)]
    pub model_version: Option<ModelVersion>,
}

impl Model {
    /// Output type (e.g. `"concept"`, `"embed"`), when reported.
    pub fn kind(&self) -> Option<&str> {
        self.output_info.as_ref()?.kind.as_deref()
    }

    pub fn version_id(&self) -> Option<&str> {
        self.model_version.as_ref().map(|v| v.id.as_str())
    }
}
