//! Configuration management for dealsight.
//!
//! All configuration comes from environment variables (optionally via a `.env`
//! file loaded in `main`), read once at startup into an immutable [`Settings`]
//! value that is shared with each component that needs it.

use std::env;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default session-signing secret used when `SECRET_KEY` is unset.
pub const DEFAULT_SECRET_KEY: &str = "default_secret_key";

/// Default shared login password used when `APP_PASSWORD` is unset.
pub const DEFAULT_APP_PASSWORD: &str = "default_password";

/// Default Anthropic API endpoint.
pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";

/// Default model used for all completions.
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-haiku-latest";

/// Process-wide settings, established once at startup and read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Secret used to sign session cookies.
    pub secret_key: String,
    /// Shared password gating every route.
    pub app_password: String,
    /// Credential for the Anthropic API.
    pub anthropic_api_key: String,
    /// Base URL for the Anthropic API.
    pub anthropic_base_url: String,
    /// Model id used for all completions.
    pub anthropic_model: String,
    /// Tesseract binary name or path.
    pub tesseract_cmd: String,
    /// Tesseract language setting.
    pub tesseract_lang: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            app_password: DEFAULT_APP_PASSWORD.to_string(),
            anthropic_api_key: String::new(),
            anthropic_base_url: DEFAULT_ANTHROPIC_BASE_URL.to_string(),
            anthropic_model: DEFAULT_ANTHROPIC_MODEL.to_string(),
            tesseract_cmd: "tesseract".to_string(),
            tesseract_lang: "eng".to_string(),
        }
    }
}

impl Settings {
    /// Build settings from the process environment, warning about insecure
    /// fallbacks so misconfigured deployments show up in the logs.
    pub fn from_env() -> Self {
        let secret_key = env::var("SECRET_KEY").unwrap_or_else(|_| {
            warn!("SECRET_KEY not set; using insecure default session secret");
            DEFAULT_SECRET_KEY.to_string()
        });

        let app_password = env::var("APP_PASSWORD").unwrap_or_else(|_| {
            warn!("APP_PASSWORD not set; using insecure default password");
            DEFAULT_APP_PASSWORD.to_string()
        });

        let anthropic_api_key = env::var("ANTHROPIC_API_KEY").unwrap_or_else(|_| {
            warn!("ANTHROPIC_API_KEY not set; LLM requests will be rejected upstream");
            String::new()
        });

        Self {
            secret_key,
            app_password,
            anthropic_api_key,
            anthropic_base_url: env::var("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_ANTHROPIC_BASE_URL.to_string()),
            anthropic_model: env::var("ANTHROPIC_MODEL")
                .unwrap_or_else(|_| DEFAULT_ANTHROPIC_MODEL.to_string()),
            tesseract_cmd: env::var("TESSERACT_CMD").unwrap_or_else(|_| "tesseract".to_string()),
            tesseract_lang: env::var("TESSERACT_LANG").unwrap_or_else(|_| "eng".to_string()),
        }
    }
}
