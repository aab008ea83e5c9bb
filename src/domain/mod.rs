/// Domain logic: models, prompt templates, reply parsing, and the analyzer
/// that ties them together. No transport concerns live here.
pub mod analyzer;
pub mod models;
pub mod parser;
pub mod prompts;

pub use analyzer::MeetingAnalyzer;
pub use models::{AnalysisResult, SpeakerSegment, SpeakerTranscript};
pub use parser::parse_reply;
