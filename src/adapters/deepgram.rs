//! Deepgram transcription service adapter
//!
//! Implements the TranscriptionPort for Deepgram's batch REST API.
//! Single request with the raw audio bytes as the body.

use crate::domain::models::{SpeakerSegment, SpeakerTranscript};
use crate::error::{AppError, Result};
use crate::ports::transcription::{TranscriptionConfig, TranscriptionPort};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const DEEPGRAM_API_BASE: &str = "https://api.deepgram.com/v1";

/// Fallback model when the request config does not pick one
const DEFAULT_MODEL: &str = "nova-2";

/// Upper bound on one transcription round trip
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Deepgram service implementation
pub struct DeepgramClient {
    client: Client,
    api_key: String,
}

impl DeepgramClient {
    /// Create a new Deepgram client with the given API key
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, api_key }
    }

    /// POST audio bytes to /v1/listen with the given query parameters
    async fn listen(
        &self,
        audio: &[u8],
        format: &str,
        params: &[(&str, &str)],
    ) -> Result<DeepgramResponse> {
        let url = format!("{}/listen", DEEPGRAM_API_BASE);

        log::info!(
            "Sending {} bytes to Deepgram (format: {})",
            audio.len(),
            format
        );

        let response = self
            .client
            .post(&url)
            .query(params)
            .header("authorization", format!("Token {}", self.api_key))
            .header("content-type", content_type_for(format))
            .body(audio.to_vec())
            .send()
            .await
            .map_err(|e| AppError::Transcription(format!("Deepgram request failed: {}", e)))?;

        let status = response.status();
        log::info!("Deepgram API response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Transcription(format!(
                "Deepgram API error ({}): {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            AppError::Transcription(format!("Failed to parse Deepgram response: {}", e))
        })
    }
}

#[async_trait]
impl TranscriptionPort for DeepgramClient {
    async fn transcribe(
        &self,
        audio: &[u8],
        format: &str,
        config: &TranscriptionConfig,
    ) -> Result<String> {
        let model = config.model.as_deref().unwrap_or(DEFAULT_MODEL);
        let diarize = if config.enable_diarization { "true" } else { "false" };

        // Parameters tuned for Indian English meeting audio
        let mut params = vec![
            ("model", model),
            ("smart_format", "true"),
            ("punctuate", "true"),
            ("paragraphs", "true"),
            ("diarize", diarize),
            ("filler_words", "false"),
        ];
        if let Some(lang) = &config.language {
            params.push(("language", lang));
        }

        let response = self.listen(audio, format, &params).await?;
        let transcript = response.transcript()?;

        log::info!("Transcription complete: {} chars", transcript.len());
        Ok(transcript.to_string())
    }

    async fn transcribe_with_speakers(
        &self,
        audio: &[u8],
        format: &str,
        config: &TranscriptionConfig,
    ) -> Result<SpeakerTranscript> {
        let model = config.model.as_deref().unwrap_or(DEFAULT_MODEL);

        let mut params = vec![
            ("model", model),
            ("smart_format", "true"),
            ("punctuate", "true"),
            ("diarize", "true"),
            ("utterances", "true"),
        ];
        if let Some(lang) = &config.language {
            params.push(("language", lang));
        }

        let response = self.listen(audio, format, &params).await?;
        let full_transcript = response.transcript()?.to_string();
        let speakers = speaker_segments(response.results.utterances.unwrap_or_default());

        Ok(SpeakerTranscript {
            full_transcript,
            speakers,
        })
    }

    fn provider_name(&self) -> &str {
        "Deepgram"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Map diarized utterances to speaker segments. Deepgram numbers speakers
/// from zero; an utterance without a speaker index gets the Unknown label.
fn speaker_segments(utterances: Vec<Utterance>) -> Vec<SpeakerSegment> {
    utterances
        .into_iter()
        .map(|utt| SpeakerSegment {
            speaker: match utt.speaker {
                Some(n) => format!("Speaker {}", n),
                None => "Speaker Unknown".to_string(),
            },
            text: utt.transcript,
            start: utt.start,
            end: utt.end,
        })
        .collect()
}

fn content_type_for(format: &str) -> &'static str {
    match format {
        "wav" => "audio/wav",
        "mp3" => "audio/mpeg",
        "flac" => "audio/flac",
        "ogg" => "audio/ogg",
        _ => "audio/wav", // Default
    }
}

// ===== API Response Types =====

/// Response from /v1/listen
#[derive(Debug, Deserialize)]
struct DeepgramResponse {
    results: Results,
}

#[derive(Debug, Deserialize)]
struct Results {
    channels: Vec<Channel>,
    utterances: Option<Vec<Utterance>>,
}

#[derive(Debug, Deserialize)]
struct Channel {
    alternatives: Vec<Alternative>,
}

#[derive(Debug, Deserialize)]
struct Alternative {
    transcript: String,
}

#[derive(Debug, Deserialize)]
struct Utterance {
    #[serde(default)]
    transcript: String,
    #[serde(default)]
    start: f64,
    #[serde(default)]
    end: f64,
    speaker: Option<u32>,
}

impl DeepgramResponse {
    /// Transcript text at the envelope's fixed path:
    /// results.channels[0].alternatives[0].transcript
    fn transcript(&self) -> Result<&str> {
        let channel = self.results.channels.first().ok_or_else(|| {
            AppError::Transcription("No channels in Deepgram response".to_string())
        })?;

        let alternative = channel.alternatives.first().ok_or_else(|| {
            AppError::Transcription("No alternatives in Deepgram response".to_string())
        })?;

        Ok(&alternative.transcript)
    }
}
