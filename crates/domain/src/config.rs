//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_POST_TYPE, DEFAULT_TONE};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub prompts: PromptServiceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: "contentplan.db".to_string(), pool_size: 4 }
    }
}

/// External prompt-generation service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptServiceConfig {
    /// When false the wizard presents template prompts only.
    pub enabled: bool,
    pub api_url: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_secs: u64,
    pub post_type: String,
    pub tone: String,
    pub image_style: Option<String>,
    pub brand_keywords: Vec<String>,
    pub negative_keywords: Vec<String>,
}

impl Default for PromptServiceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: None,
            model: "gemini-pro".to_string(),
            timeout_secs: 30,
            post_type: DEFAULT_POST_TYPE.to_string(),
            tone: DEFAULT_TONE.to_string(),
            image_style: None,
            brand_keywords: Vec::new(),
            negative_keywords: Vec::new(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Fallback filter directive when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}
