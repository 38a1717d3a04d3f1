//! Configuration loading
//!
//! Environment variables first, then a config file, then defaults.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, load_or_default, probe_config_paths};
