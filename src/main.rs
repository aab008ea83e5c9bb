mod adapters;
mod config;
mod domain;
mod error;
mod ports;
mod server;

use adapters::{DeepgramClient, GroqClient};
use config::Config;
use domain::MeetingAnalyzer;
use error::Result;
use ports::llm::LlmPort;
use ports::transcription::TranscriptionPort;
use server::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_env()?;

    let transcription: Arc<dyn TranscriptionPort> =
        Arc::new(DeepgramClient::new(config.deepgram_api_key.clone()));
    let llm: Arc<dyn LlmPort> = Arc::new(GroqClient::new(config.groq_api_key.clone()));

    log::info!(
        "Transcription provider: {} (configured: {})",
        transcription.provider_name(),
        transcription.is_configured()
    );
    log::info!(
        "LLM provider: {} (configured: {})",
        llm.provider_name(),
        llm.is_configured()
    );

    let state = AppState {
        transcription,
        analyzer: Arc::new(MeetingAnalyzer::new(llm)),
    };

    let app = server::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    log::info!("IndianMeet AI listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
