//! Mock implementations for testing

use crate::domain::models::{SpeakerSegment, SpeakerTranscript};
use crate::error::{AppError, Result};
use crate::ports::llm::{LlmConfig, LlmPort};
use crate::ports::transcription::{TranscriptionConfig, TranscriptionPort};
use async_trait::async_trait;
use std::sync::Mutex;

/// Scripted LLM fake: replies with a fixed string or a fixed failure,
/// recording the prompts it was called with.
pub struct MockLlm {
    reply: std::result::Result<String, String>,
    pub prompts: Mutex<Vec<String>>,
}

impl MockLlm {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(detail: &str) -> Self {
        Self {
            reply: Err(detail.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LlmPort for MockLlm {
    async fn complete(
        &self,
        _system: Option<&str>,
        prompt: &str,
        _config: &LlmConfig,
    ) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply
            .clone()
            .map_err(AppError::Analysis)
    }

    fn provider_name(&self) -> &str {
        "mock-llm"
    }

    fn is_configured(&self) -> bool {
        true
    }
}

/// Scripted transcription fake: returns a fixed transcript or failure.
pub struct MockTranscription {
    outcome: std::result::Result<String, String>,
}

impl MockTranscription {
    pub fn transcribing(transcript: &str) -> Self {
        Self {
            outcome: Ok(transcript.to_string()),
        }
    }

    pub fn failing(detail: &str) -> Self {
        Self {
            outcome: Err(detail.to_string()),
        }
    }
}

#[async_trait]
impl TranscriptionPort for MockTranscription {
    async fn transcribe(
        &self,
        _audio: &[u8],
        _format: &str,
        _config: &TranscriptionConfig,
    ) -> Result<String> {
        self.outcome
            .clone()
            .map_err(AppError::Transcription)
    }

    async fn transcribe_with_speakers(
        &self,
        audio: &[u8],
        format: &str,
        config: &TranscriptionConfig,
    ) -> Result<SpeakerTranscript> {
        let full_transcript = self.transcribe(audio, format, config).await?;
        Ok(SpeakerTranscript {
            speakers: vec![SpeakerSegment {
                speaker: "Speaker 0".to_string(),
                text: full_transcript.clone(),
                start: 0.0,
                end: 0.0,
            }],
            full_transcript,
        })
    }

    fn provider_name(&self) -> &str {
        "mock-asr"
    }

    fn is_configured(&self) -> bool {
        true
    }
}
