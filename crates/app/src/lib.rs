//! # ContentPlan App
//!
//! Command-line application layer.
//!
//! This crate contains:
//! - clap argument definitions
//! - Application context (dependency injection)
//! - Command handlers and plain-text rendering
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the wizard and calendar library to the SQLite and Gemini adapters

pub mod cli;
pub mod commands;
pub mod context;
pub mod render;

pub use cli::{Cli, Command};
pub use commands::dispatch;
pub use context::AppContext;
