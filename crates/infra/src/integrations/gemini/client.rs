/// Gemini API client for image-prompt generation
use async_trait::async_trait;
use contentplan_core::PromptGenerator;
use contentplan_domain::{
    ContentPlanError, ImagePrompt, PromptRequest, PromptServiceConfig, Result as DomainResult,
};
use reqwest::Method;
use tracing::{debug, info, warn};

use super::types::{GenerateContentRequest, GenerateContentResponse, PromptServiceError};
use crate::http::HttpClient;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-pro";

/// Gemini-backed [`PromptGenerator`].
pub struct GeminiPromptClient {
    http_client: HttpClient,
    api_key: String,
    model: String,
    api_url: String,
}

impl GeminiPromptClient {
    pub fn new(api_key: impl Into<String>, http_client: HttpClient) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            api_url: GEMINI_API_URL.to_string(),
        }
    }

    /// Build a client from configuration. Fails when no API key is set.
    pub fn from_config(config: &PromptServiceConfig) -> DomainResult<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ContentPlanError::from(PromptServiceError::MissingApiKey))?;

        let http_client = HttpClient::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;

        Ok(Self::new(api_key, http_client).with_model(&config.model).with_api_url(&config.api_url))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Base URL up to the API version, e.g. `.../v1beta`.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_url, self.model)
    }

    /// Generate prompts for `request`: one prompt on success.
    pub async fn generate(
        &self,
        request: &PromptRequest,
    ) -> Result<Vec<ImagePrompt>, PromptServiceError> {
        request.validate().map_err(|err| match err {
            ContentPlanError::Validation(message) => PromptServiceError::InvalidRequest(message),
            other => PromptServiceError::InvalidRequest(other.to_string()),
        })?;

        let instruction = build_instruction(request);
        debug!(instruction = %instruction, model = %self.model, "requesting image prompt");

        let builder = self
            .http_client
            .request(Method::POST, self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest::from_text(instruction));

        let response = self
            .http_client
            .send(builder)
            .await
            .map_err(|err| PromptServiceError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            warn!(status = status.as_u16(), body = %message, "prompt service returned an error status");
            return Err(PromptServiceError::Api { status: status.as_u16(), message });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|err| PromptServiceError::InvalidResponse(err.to_string()))?;

        match body.first_text() {
            Some(text) => {
                info!(model = %self.model, chars = text.len(), "image prompt generated");
                Ok(vec![ImagePrompt::new(text)])
            }
            None => match body.block_reason() {
                Some(reason) => {
                    warn!(reason, "prompt generation blocked");
                    Err(PromptServiceError::Blocked(reason.to_string()))
                }
                None => {
                    warn!("could not extract prompt from response");
                    Err(PromptServiceError::EmptyResponse)
                }
            },
        }
    }
}

#[async_trait]
impl PromptGenerator for GeminiPromptClient {
    async fn generate_prompts(&self, request: &PromptRequest) -> DomainResult<Vec<ImagePrompt>> {
        self.generate(request).await.map_err(ContentPlanError::from)
    }
}

/// Natural-language instruction sent to the model.
pub fn build_instruction(request: &PromptRequest) -> String {
    let mut instruction = format!(
        "Generate an Instagram image prompt for a {} targeting {}. The content is about: {}. The desired tone is {}.",
        request.post_type, request.target_audience, request.content_description, request.tone
    );

    if let Some(style) = &request.image_style {
        instruction.push_str(&format!(" The image style should be {style}."));
    }
    if let Some(keywords) = &request.brand_keywords {
        instruction.push_str(&format!(" Include themes like: {}.", keywords.join(", ")));
    }
    if let Some(keywords) = &request.negative_keywords {
        instruction.push_str(&format!(" Avoid themes like: {}.", keywords.join(", ")));
    }

    instruction
}
