//! Configuration loader
//!
//! ## Loading Strategy
//! 1. [`load_from_env`] when `CONTENTPLAN_DB_PATH` is set
//! 2. otherwise the first probed config file (TOML or JSON)
//! 3. [`load_or_default`] falls back to [`Config::default`]
//!
//! `GEMINI_API_KEY` is always read from the environment when the loaded
//! configuration carries no key.
//!
//! ## Environment Variables
//! - `CONTENTPLAN_DB_PATH`: database file path (required for env loading)
//! - `CONTENTPLAN_DB_POOL_SIZE`: connection pool size
//! - `CONTENTPLAN_PROMPTS_ENABLED`: use the prompt service (true/false)
//! - `CONTENTPLAN_PROMPTS_API_URL`: prompt service base URL
//! - `GEMINI_API_KEY`: prompt service API key
//! - `CONTENTPLAN_PROMPTS_MODEL`: model name
//! - `CONTENTPLAN_PROMPTS_TIMEOUT`: request timeout in seconds
//! - `CONTENTPLAN_LOG_LEVEL`: default log filter when `RUST_LOG` is unset
//! - `CONTENTPLAN_LOG_JSON`: JSON log output (true/false)

use std::path::{Path, PathBuf};
use std::str::FromStr;

use contentplan_domain::{Config, ContentPlanError, Result};

const API_KEY_VAR: &str = "GEMINI_API_KEY";
const CONFIG_FILE_NAMES: [&str; 4] =
    ["contentplan.toml", "contentplan.json", "config.toml", "config.json"];

/// Load from the environment, falling back to a probed config file.
///
/// # Errors
/// Returns `ContentPlanError::Config` when neither source is usable.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Environment configuration incomplete, trying file");
            load_from_file(None)
        }
    }
}

/// [`load`], or defaults (plus `GEMINI_API_KEY`) when nothing is found.
///
/// A config file that exists but cannot be parsed is still an error.
pub fn load_or_default() -> Result<Config> {
    match load() {
        Ok(config) => Ok(config),
        Err(_) if probe_config_paths().is_none() => {
            tracing::info!("No configuration found, using defaults");
            let mut config = Config::default();
            apply_api_key_from_env(&mut config);
            Ok(config)
        }
        Err(e) => Err(e),
    }
}

/// Build configuration from environment variables.
///
/// # Errors
/// Returns `ContentPlanError::Config` if `CONTENTPLAN_DB_PATH` is missing or
/// a numeric variable does not parse.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();

    config.database.path = env_var("CONTENTPLAN_DB_PATH")?;
    if let Some(pool_size) = env_parse::<u32>("CONTENTPLAN_DB_POOL_SIZE")? {
        config.database.pool_size = pool_size;
    }

    config.prompts.enabled = env_bool("CONTENTPLAN_PROMPTS_ENABLED", config.prompts.enabled);
    if let Ok(url) = std::env::var("CONTENTPLAN_PROMPTS_API_URL") {
        config.prompts.api_url = url;
    }
    if let Ok(model) = std::env::var("CONTENTPLAN_PROMPTS_MODEL") {
        config.prompts.model = model;
    }
    if let Some(timeout) = env_parse::<u64>("CONTENTPLAN_PROMPTS_TIMEOUT")? {
        config.prompts.timeout_secs = timeout;
    }
    apply_api_key_from_env(&mut config);

    if let Ok(level) = std::env::var("CONTENTPLAN_LOG_LEVEL") {
        config.logging.level = level;
    }
    config.logging.json = env_bool("CONTENTPLAN_LOG_JSON", config.logging.json);

    Ok(config)
}

/// Load configuration from `path`, or from the first probed file.
///
/// Format is chosen by extension (`.toml` or `.json`); sections and fields
/// left out take their defaults.
///
/// # Errors
/// Returns `ContentPlanError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ContentPlanError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ContentPlanError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ContentPlanError::Config(format!("Failed to read config file: {e}")))?;

    let mut config = parse_config(&contents, &config_path)?;
    apply_api_key_from_env(&mut config);
    Ok(config)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ContentPlanError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ContentPlanError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ContentPlanError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// First existing config file in the working directory, its parent, or
/// next to the executable.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.join(".."));
        dirs.insert(0, cwd);
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

fn apply_api_key_from_env(config: &mut Config) {
    if config.prompts.api_key.is_none() {
        config.prompts.api_key = std::env::var(API_KEY_VAR).ok().filter(|key| !key.trim().is_empty());
    }
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        ContentPlanError::Config(format!("Missing required environment variable: {key}"))
    })
}

fn env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ContentPlanError::Config(format!("Invalid value for {key}: {e}"))),
        Err(_) => Ok(None),
    }
}

/// Accepts `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
