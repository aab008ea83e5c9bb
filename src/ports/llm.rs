/// LLM service port trait
///
/// Defines the interface for chat-completion LLM services.
/// Implementation: Groq (OpenAI-compatible API)
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Sampling configuration for LLM requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model name (e.g., "llama-3.3-70b-versatile")
    pub model: String,

    /// Temperature for generation (0.0 to 1.0)
    pub temperature: Option<f64>,

    /// Nucleus sampling probability
    pub top_p: Option<f64>,

    /// Maximum tokens in response
    pub max_tokens: Option<u32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: Some(0.3), // Lower temperature for more focused outputs
            top_p: Some(0.9),
            max_tokens: Some(2000),
        }
    }
}

/// Port trait for LLM chat-completion services
#[async_trait]
pub trait LlmPort: Send + Sync {
    /// Run one chat completion and return the generated text
    async fn complete(
        &self,
        system: Option<&str>,
        prompt: &str,
        config: &LlmConfig,
    ) -> Result<String>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is configured (has API key)
    fn is_configured(&self) -> bool;
}
