//! Startup configuration loaded from the process environment
//!
//! Both upstream API keys are required up front so a missing credential is a
//! startup failure rather than a silent empty-token call against the remote
//! service.

use crate::error::{AppError, Result};
use std::env;

pub const DEEPGRAM_API_KEY_VAR: &str = "DEEPGRAM_API_KEY";
pub const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the Deepgram speech-to-text service
    pub deepgram_api_key: String,

    /// API key for the Groq LLM service
    pub groq_api_key: String,

    /// Socket address the HTTP server binds to
    pub bind_addr: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            deepgram_api_key: require_var(DEEPGRAM_API_KEY_VAR)?,
            groq_api_key: require_var(GROQ_API_KEY_VAR)?,
            bind_addr: env::var(BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::Config(format!(
            "Missing required environment variable: {}",
            name
        ))),
    }
}
