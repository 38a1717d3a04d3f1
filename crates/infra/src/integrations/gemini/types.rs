//! Gemini `generateContent` wire types

use contentplan_domain::ContentPlanError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { contents: vec![Content { parts: vec![Part { text: text.into() }] }] }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Trimmed text of the first part of the first candidate, if non-empty.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.first())
            .and_then(|part| part.text.as_deref())
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref().and_then(|feedback| feedback.block_reason.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Failures talking to the prompt service.
#[derive(Debug, Error)]
pub enum PromptServiceError {
    #[error("Gemini API key not configured")]
    MissingApiKey,

    #[error("{0}")]
    InvalidRequest(String),

    /// Network-level error (connection failed, timeout, etc.)
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to generate prompts (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Content generation blocked by API: {0}")]
    Blocked(String),

    #[error("Could not extract prompt from response")]
    EmptyResponse,

    #[error("Invalid response body: {0}")]
    InvalidResponse(String),
}

impl From<PromptServiceError> for ContentPlanError {
    fn from(value: PromptServiceError) -> Self {
        match value {
            PromptServiceError::MissingApiKey => ContentPlanError::Config(value.to_string()),
            PromptServiceError::InvalidRequest(message) => ContentPlanError::Validation(message),
            PromptServiceError::Network(_) => ContentPlanError::Network(value.to_string()),
            PromptServiceError::Api { .. }
            | PromptServiceError::Blocked(_)
            | PromptServiceError::EmptyResponse
            | PromptServiceError::InvalidResponse(_) => {
                ContentPlanError::Collaborator(value.to_string())
            }
        }
    }
}
