//! Scripted prompt generator

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use contentplan_core::PromptGenerator;
use contentplan_domain::{ImagePrompt, PromptRequest, Result as DomainResult};

/// Returns a canned answer and records every request it receives.
#[derive(Clone)]
pub struct ScriptedPromptGenerator {
    response: DomainResult<Vec<ImagePrompt>>,
    requests: Arc<Mutex<Vec<PromptRequest>>>,
}

impl ScriptedPromptGenerator {
    pub fn returning<I, S>(prompts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            response: Ok(prompts.into_iter().map(ImagePrompt::new).collect()),
            requests: Arc::default(),
        }
    }

    pub fn failing(error: contentplan_domain::ContentPlanError) -> Self {
        Self { response: Err(error), requests: Arc::default() }
    }

    pub fn requests(&self) -> Vec<PromptRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PromptGenerator for ScriptedPromptGenerator {
    async fn generate_prompts(&self, request: &PromptRequest) -> DomainResult<Vec<ImagePrompt>> {
        self.requests.lock().unwrap().push(request.clone());
        self.response.clone()
    }
}
