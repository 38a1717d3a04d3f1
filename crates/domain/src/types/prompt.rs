//! Prompt-generation collaborator payloads

use serde::{Deserialize, Serialize};

use crate::{ContentPlanError, ContentPreference, PromptServiceConfig, Result};

/// Request sent to the prompt-generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRequest {
    pub content_description: String,
    pub target_audience: String,
    /// e.g. "Reel", "Carousel", "Story", "Single Image"
    pub post_type: String,
    /// e.g. "Informative", "Humorous", "Inspirational"
    pub tone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_keywords: Option<Vec<String>>,
    /// e.g. "Photorealistic", "Cartoonish", "Abstract"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_style: Option<String>,
}

impl PromptRequest {
    /// Build a request from preferences, taking post type, tone, style and
    /// keywords from the service configuration.
    pub fn from_preference(preference: &ContentPreference, defaults: &PromptServiceConfig) -> Self {
        Self {
            content_description: preference.description.clone(),
            target_audience: preference.audience.clone(),
            post_type: defaults.post_type.clone(),
            tone: defaults.tone.clone(),
            brand_keywords: non_empty(&defaults.brand_keywords),
            negative_keywords: non_empty(&defaults.negative_keywords),
            image_style: defaults.image_style.clone().filter(|style| !style.trim().is_empty()),
        }
    }

    pub fn with_post_type(mut self, post_type: impl Into<String>) -> Self {
        self.post_type = post_type.into();
        self
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = tone.into();
        self
    }

    /// The service requires description, audience, post type and tone.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            ("contentDescription", &self.content_description),
            ("targetAudience", &self.target_audience),
            ("postType", &self.post_type),
            ("tone", &self.tone),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ContentPlanError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    let kept: Vec<String> =
        values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()).map(String::from).collect();
    (!kept.is_empty()).then_some(kept)
}

/// A single generated image prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePrompt {
    pub prompt: String,
}

impl ImagePrompt {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into() }
    }
}
