use serde::{Deserialize, Serialize};

/// A labelled concept, either attached to an input or predicted by a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Concept {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Confidence for predictions; `1.0` / `0.0` for positive / negative labels on inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Concept {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_value(mut self, value: f32) -> Self {
        self.value = Some(value);
        self
    }

    /// Label as a positive example.
    pub fn positive(id: impl Into<String>) -> Self {
        Self::new(id).with_value(1.0)
    }

    /// Label as a negative example.
    pub fn negative(id: impl Into<String>) -> Self {
        Self::new(id).with_value(0.0)
    }

    /// Display name, falling back to the id.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
