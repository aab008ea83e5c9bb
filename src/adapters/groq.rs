//! Groq LLM service adapter
//!
//! Implements the LlmPort against Groq's OpenAI-compatible
//! chat-completions API.

use crate::error::{AppError, Result};
use crate::ports::llm::{LlmConfig, LlmPort};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Upper bound on one completion round trip
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Groq service implementation
pub struct GroqClient {
    client: Client,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl GroqClient {
    /// Create a new Groq client with the given API key
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, api_key }
    }
}

#[async_trait]
impl LlmPort for GroqClient {
    async fn complete(
        &self,
        system: Option<&str>,
        prompt: &str,
        config: &LlmConfig,
    ) -> Result<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: system.to_string(),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        });

        let request_body = ChatCompletionRequest {
            model: config.model.clone(),
            messages,
            temperature: config.temperature,
            top_p: config.top_p,
            max_tokens: config.max_tokens,
        };

        log::info!("Calling Groq chat completion with model: {}", config.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", GROQ_API_BASE))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::Analysis(format!("Chat completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Analysis(format!(
                "Groq API error ({}): {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            AppError::Analysis(format!("Failed to parse completion response: {}", e))
        })?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Analysis("No completion choices returned".to_string()))?;

        log::info!(
            "Groq completion successful, generated {} characters",
            choice.message.content.len()
        );

        Ok(choice.message.content)
    }

    fn provider_name(&self) -> &str {
        "groq"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GroqClient::new("test_api_key".to_string());
        assert_eq!(client.provider_name(), "groq");
        assert!(client.is_configured());
    }

    #[test]
    fn test_client_not_configured() {
        let client = GroqClient::new("".to_string());
        assert!(!client.is_configured());
    }

    #[test]
    fn test_request_serialization_skips_unset_sampling_params() {
        let request = ChatCompletionRequest {
            model: "llama-3.3-70b-versatile".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "hello".to_string(),
            }],
            temperature: Some(0.3),
            top_p: None,
            max_tokens: Some(2000),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["temperature"], 0.3);
        assert_eq!(json["max_tokens"], 2000);
        assert!(json.get("top_p").is_none());
    }

    #[test]
    fn test_completion_envelope_path() {
        let json = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "llama-3.3-70b-versatile",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "SUMMARY:\nDone."}, "finish_reason": "stop"}
            ]
        }"#;

        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices[0].message.content, "SUMMARY:\nDone.");
    }
}
