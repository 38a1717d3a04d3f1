//! # ContentPlan Infrastructure
//!
//! Implementations of the `contentplan-core` ports plus process setup.
//!
//! This crate contains:
//! - SQLite repositories for preferences and saved calendars
//! - HTTP client and the Gemini prompt-service adapter
//! - Configuration loading (environment, TOML, JSON)
//! - Tracing subscriber installation
//!
//! ## Architecture
//! - Implements traits defined in `contentplan-core`
//! - Contains all "impure" code (I/O, network, process environment)

pub mod config;
pub mod database;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod observability;

// Re-export commonly used items
pub use database::*;
pub use errors::InfraError;
pub use http::*;
pub use integrations::gemini::{GeminiPromptClient, PromptServiceError};
pub use observability::init_tracing;
