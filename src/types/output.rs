use super::concept::Concept;
use super::input::Input;
use super::model::Model;
use super::status::ApiStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputData {
    #[serde(default)]
    pub concepts: Vec<Concept>,
}

/// Prediction result for one submitted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<ApiStatus>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub model: Option<Model>,
    #[serde(default)]
    pub input: Option<Input>,
    #[serde(default)]
    pub data: OutputData,
}

impl Output {
    pub fn concepts(&self) -> &[Concept] {
        &self.data.concepts
    }

    /// Highest-scoring concept.
    pub fn top_concept(&self) -> Option<&Concept> {
        self.data.concepts.iter().max_by(|a, b| {
            a.value
                .unwrap_or(0.0)
                .total_cmp(&b.value.unwrap_or(0.0))
        })
    }

    /// Concepts scoring at least `threshold`.
    pub fn concepts_above(&self, threshold: f32) -> impl Iterator<Item = &Concept> {
        self.data
            .concepts
            .iter()
            .filter(move |c| c.value.is_some_and(|v| v >= threshold))
    }
}
