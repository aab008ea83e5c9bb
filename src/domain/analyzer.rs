//! Meeting analyzer: prompt construction, LLM invocation, reply parsing
//!
//! A failed LLM call has no useful partial result, so it propagates to the
//! caller; a reply that merely parses badly degrades to empty fields via
//! [`parse_reply`] instead.

use crate::domain::models::AnalysisResult;
use crate::domain::parser::parse_reply;
use crate::domain::prompts;
use crate::error::Result;
use crate::ports::llm::{LlmConfig, LlmPort};
use std::sync::Arc;

/// Character cap on the transcript excerpt fed to `quick_summary`
const QUICK_SUMMARY_EXCERPT_CHARS: usize = 2000;

/// Drives the transcript -> structured insights pipeline against an
/// injected LLM service.
pub struct MeetingAnalyzer {
    llm: Arc<dyn LlmPort>,
    config: LlmConfig,
}

impl MeetingAnalyzer {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self {
            llm,
            config: LlmConfig::default(),
        }
    }

    pub fn with_config(llm: Arc<dyn LlmPort>, config: LlmConfig) -> Self {
        Self { llm, config }
    }

    /// Analyze a meeting transcript into summary, action items,
    /// participants, and key decisions.
    pub async fn analyze(&self, transcript: &str) -> Result<AnalysisResult> {
        let prompt = prompts::render(prompts::ANALYSIS_PROMPT, transcript);

        log::info!(
            "Analyzing transcript ({} chars) with model {}",
            transcript.len(),
            self.config.model
        );

        let reply = self
            .llm
            .complete(Some(prompts::SYSTEM_PROMPT), &prompt, &self.config)
            .await?;

        log::info!("Analysis reply received ({} chars)", reply.len());

        Ok(parse_reply(&reply))
    }

    /// Generate a one-sentence summary of the transcript's opening excerpt.
    pub async fn quick_summary(&self, transcript: &str) -> Result<String> {
        let excerpt: String = transcript.chars().take(QUICK_SUMMARY_EXCERPT_CHARS).collect();
        let prompt = prompts::render(prompts::QUICK_SUMMARY_PROMPT, &excerpt);

        let config = LlmConfig {
            temperature: Some(0.5),
            top_p: None,
            max_tokens: Some(100),
            ..self.config.clone()
        };

        self.llm.complete(None, &prompt, &config).await
    }
}
