/// Gemini integration for image-prompt generation
///
/// Implements the core `PromptGenerator` port by sending a single
/// instruction to the `generateContent` endpoint and returning the first
/// candidate's text as one prompt.
///
/// # Usage
///
/// ```no_run
/// use contentplan_domain::{PromptRequest, PromptServiceConfig};
/// use contentplan_infra::http::HttpClient;
/// use contentplan_infra::integrations::gemini::GeminiPromptClient;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let api_key = std::env::var("GEMINI_API_KEY")?;
/// let client = GeminiPromptClient::new(api_key, HttpClient::new()?);
///
/// let request = PromptRequest {
///     content_description: "eco-friendly yoga mats".into(),
///     target_audience: "millennial women interested in wellness".into(),
///     post_type: "Single Image".into(),
///     tone: "Inspirational".into(),
///     brand_keywords: None,
///     negative_keywords: None,
///     image_style: Some("Minimalist and bright".into()),
/// };
/// let prompts = client.generate(&request).await?;
/// println!("{}", prompts[0].prompt);
/// # Ok(())
/// # }
/// ```
///
/// # Error Handling
///
/// - Non-2xx status: `PromptServiceError::Api` with the response body
/// - Safety block: `PromptServiceError::Blocked` with the block reason
/// - No candidate text: `PromptServiceError::EmptyResponse`
/// - No retries; callers fall back to template prompts
pub mod client;
pub mod types;

pub use client::{build_instruction, GeminiPromptClient};
pub use types::PromptServiceError;
