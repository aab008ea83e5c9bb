//! External service adapters
//!
//! Concrete implementations of the port traits against remote APIs:
//! - Deepgram for speech-to-text
//! - Groq for chat completions

pub mod deepgram;
pub mod groq;

pub use deepgram::DeepgramClient;
pub use groq::GroqClient;
