//! Environment configuration for Solace.
//!
//! All settings are environment variables with defaults, resolved once at
//! startup and shared read-only afterwards:
//!
//! - `OLLAMA_URL` -- model gateway base URL (default `http://localhost:11434`)
//! - `MODEL` -- model identifier to request (default `llama3.1`)
//! - `ALLOWED_ORIGINS` -- comma-separated CORS allow-list
//!   (default `http://127.0.0.1:8000,http://localhost:8000`)
//! - `SOLACE_WEB_DIR` -- front-end bundle directory (default `site`)

use std::env;

pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3.1";
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://127.0.0.1:8000,http://localhost:8000";
pub const DEFAULT_WEB_DIR: &str = "site";

/// Resolved process-wide configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the model gateway.
    pub gateway_url: String,
    /// Model identifier sent with every gateway request.
    pub model: String,
    /// Origins allowed by the CORS layer.
    pub allowed_origins: Vec<String>,
    /// Directory holding the pre-built front-end bundle.
    pub web_dir: String,
}

impl AppConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for unset or blank variables.
    pub fn from_env() -> Self {
        Self {
            gateway_url: env_or("OLLAMA_URL", DEFAULT_GATEWAY_URL),
            model: env_or("MODEL", DEFAULT_MODEL),
            allowed_origins: parse_origins(&env_or("ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS)),
            web_dir: env_or("SOLACE_WEB_DIR", DEFAULT_WEB_DIR),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            allowed_origins: parse_origins(DEFAULT_ALLOWED_ORIGINS),
            web_dir: DEFAULT_WEB_DIR.to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        Ok(_) => {
            tracing::warn!("{key} is set but blank, using default '{default}'");
            default.to_string()
        }
        Err(_) => default.to_string(),
    }
}

/// Split a comma-separated origin list, trimming entries and skipping
/// empties.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
