//! Inputs: images plus optional labels and metadata.

use super::concept::Concept;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Image reference, either by URL or inline base64 content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Image {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base64: Option<String>,
    /// Relative crop box `[top, left, bottom, right]`, each in `0.0..=1.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<[f32; 4]>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub allow_duplicate_url: bool,
}

impl Image {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        Self {
            base64: Some(base64::engine::general_purpose::STANDARD.encode(bytes.as_ref())),
            ..Default::default()
        }
    }

    pub fn with_crop(mut self, top: f32, left: f32, bottom: f32, right: f32) -> Self {
        self.crop = Some([top, left, bottom, right]);
        self
    }

    pub fn allow_duplicate_url(mut self, allow: bool) -> Self {
        self.allow_duplicate_url = allow;
        self
    }

    /// Decoded inline content, if the image was given as bytes.
    pub fn bytes(&self) -> Option<Vec<u8>> {
        let encoded = self.base64.as_deref()?;
        base64::engine::general_purpose::STANDARD.decode(encoded).ok()
    }

    pub(crate) fn has_source(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.trim().is_empty())
            || self.base64.as_deref().is_some_and(|b| !b.is_empty())
    }

    pub(crate) fn crop_is_valid(&self) -> bool {
        match self.crop {
            None => true,
            Some([top, left, bottom, right]) => {
                [top, left, bottom, right]
                    .iter()
                    .all(|v| (0.0..=1.0).contains(v))
                    && top < bottom
                    && left < right
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InputData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub concepts: Vec<Concept>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Input {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub data: InputData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Input {
    pub fn from_image(image: Image) -> Self {
        Self {
            data: InputData {
                image: Some(image),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn from_url(url: impl Into<String>) -> Self {
        Self::from_image(Image::from_url(url))
    }

    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        Self::from_image(Image::from_bytes(bytes))
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_concepts(mut self, concepts: impl IntoIterator<Item = Concept>) -> Self {
        self.data.concepts.extend(concepts);
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.data.metadata = Some(metadata);
        self
    }

    pub fn image(&self) -> Option<&Image> {
        self.data.image.as_ref()
    }
}
