/// Transcription service port trait
///
/// Defines the interface for ASR (Automatic Speech Recognition) services.
/// Implementation: Deepgram
use crate::domain::models::SpeakerTranscript;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Configuration for a transcription request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionConfig {
    /// Provider model identifier, None for the provider default
    pub model: Option<String>,

    /// Target language hint (e.g., "en", "hi")
    pub language: Option<String>,

    /// Enable speaker diarization
    pub enable_diarization: bool,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            model: None,
            language: Some("en".to_string()),
            enable_diarization: true,
        }
    }
}

/// Port trait for transcription services (ASR)
#[async_trait]
pub trait TranscriptionPort: Send + Sync {
    /// Transcribe raw audio bytes to a plain transcript string
    async fn transcribe(
        &self,
        audio: &[u8],
        format: &str, // "wav", "mp3", etc.
        config: &TranscriptionConfig,
    ) -> Result<String>;

    /// Transcribe raw audio bytes, keeping per-utterance speaker segments
    async fn transcribe_with_speakers(
        &self,
        audio: &[u8],
        format: &str,
        config: &TranscriptionConfig,
    ) -> Result<SpeakerTranscript>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is configured (has API key)
    fn is_configured(&self) -> bool;
}
