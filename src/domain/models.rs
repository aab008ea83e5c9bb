/// Domain models for IndianMeet
///
/// These models represent core business entities and carry no transport or
/// provider specifics.
use serde::{Deserialize, Serialize};

/// Structured analysis extracted from one meeting transcript.
///
/// Every field defaults to empty; a section the LLM omitted is
/// indistinguishable from one it reported as "None identified".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Concise prose summary of the meeting
    pub summary: String,

    /// Tasks and to-dos, typically "Name: task - deadline"
    pub action_items: Vec<String>,

    /// Participant names mentioned in the conversation
    pub participants: Vec<String>,

    /// Decisions, conclusions, or agreements reached
    pub key_decisions: Vec<String>,
}

/// One diarized utterance from the transcription service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerSegment {
    /// Speaker label (e.g., "Speaker 0", "Speaker 1")
    pub speaker: String,

    /// The transcribed text for this utterance
    pub text: String,

    /// Start offset in seconds
    pub start: f64,

    /// End offset in seconds
    pub end: f64,
}

/// Transcription result with per-speaker segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerTranscript {
    /// Full transcript text across all speakers
    pub full_transcript: String,

    /// Individual utterances with speaker labels and timing
    pub speakers: Vec<SpeakerSegment>,
}
