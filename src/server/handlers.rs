//! Request handlers
//!
//! Each request is one sequential chain: upload -> transcription ->
//! analysis -> JSON. Upstream failures propagate out through `AppError`'s
//! `IntoResponse`; nothing is retried.

use crate::error::{AppError, Result};
use crate::ports::transcription::TranscriptionConfig;
use crate::server::AppState;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::Path;
use tempfile::NamedTempFile;

/// Response for an audio upload: transcript plus extracted insights
#[derive(Debug, Serialize)]
pub struct UploadAudioResponse {
    pub success: bool,
    pub transcript: String,
    pub summary: String,
    pub action_items: Vec<String>,
    pub participants: Vec<String>,
}

/// Request carrying pre-transcribed text
#[derive(Debug, Deserialize)]
pub struct ProcessTextRequest {
    #[serde(default)]
    pub transcript: String,
}

/// Response for pre-transcribed text: extracted insights only
#[derive(Debug, Serialize)]
pub struct ProcessTextResponse {
    pub success: bool,
    pub summary: String,
    pub action_items: Vec<String>,
    pub participants: Vec<String>,
}

/// GET / - liveness and identity
pub async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "IndianMeet AI - Meeting Assistant for Indians" }))
}

/// POST /upload-audio - transcribe an uploaded recording and analyze it
pub async fn upload_audio(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadAudioResponse>> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Malformed multipart upload: {}", e)))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("upload.wav").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read upload: {}", e)))?;
            upload = Some((filename, data));
            break;
        }
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::InvalidInput("Missing 'file' field".to_string()))?;
    if data.is_empty() {
        return Err(AppError::InvalidInput("Uploaded file is empty".to_string()));
    }

    // Spool the upload to disk for the duration of processing. Dropping the
    // NamedTempFile removes it on success and on every error path. Creation
    // is sync IO, so it runs on the blocking pool.
    let temp = tokio::task::spawn_blocking(NamedTempFile::new)
        .await
        .map_err(std::io::Error::from)??;
    tokio::fs::write(temp.path(), &data).await?;
    log::info!("File saved: {}", temp.path().display());

    log::info!("Starting transcription...");
    let audio = tokio::fs::read(temp.path()).await?;
    let transcript = state
        .transcription
        .transcribe(&audio, audio_format(&filename), &TranscriptionConfig::default())
        .await?;

    log::info!("Processing transcript...");
    let result = state.analyzer.analyze(&transcript).await?;

    Ok(Json(UploadAudioResponse {
        success: true,
        transcript,
        summary: result.summary,
        action_items: result.action_items,
        participants: result.participants,
    }))
}

/// POST /process-text - analyze pre-transcribed text
pub async fn process_text(
    State(state): State<AppState>,
    Json(request): Json<ProcessTextRequest>,
) -> Result<Json<ProcessTextResponse>> {
    let result = state.analyzer.analyze(&request.transcript).await?;

    Ok(Json(ProcessTextResponse {
        success: true,
        summary: result.summary,
        action_items: result.action_items,
        participants: result.participants,
    }))
}

/// Audio format hint from the uploaded filename's extension
fn audio_format(filename: &str) -> &str {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("wav")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MeetingAnalyzer;
    use crate::ports::mocks::{MockLlm, MockTranscription};
    use crate::server::{router, AppState};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    const TEMPLATE_REPLY: &str = "\
SUMMARY:
Priya will send the weekly report and Amit owns the bug fixes.

ACTION ITEMS:
- Priya: send report by Friday
- Amit: fix bugs

PARTICIPANTS:
- Priya
- Amit

KEY DECISIONS:
None identified
";

    fn state_with(llm: MockLlm, transcription: MockTranscription) -> AppState {
        AppState {
            transcription: Arc::new(transcription),
            analyzer: Arc::new(MeetingAnalyzer::new(Arc::new(llm))),
        }
    }

    fn multipart_upload(field_name: &str) -> Request<Body> {
        let boundary = "test-boundary-7f3a";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"{field_name}\"; filename=\"meeting.wav\"\r\n\
             Content-Type: audio/wav\r\n\r\n\
             RIFFfakewavbytes\r\n\
             --{boundary}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/upload-audio")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_is_alive() {
        let app = router(state_with(
            MockLlm::replying(""),
            MockTranscription::transcribing(""),
        ));
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_process_text_happy_path() {
        let app = router(state_with(
            MockLlm::replying(TEMPLATE_REPLY),
            MockTranscription::transcribing("unused"),
        ));

        let request = Request::builder()
            .method("POST")
            .uri("/process-text")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"transcript": "Priya: send report by Friday. Amit: fix bugs."}"#,
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(
            body["action_items"],
            json!(["Priya: send report by Friday", "Amit: fix bugs"])
        );
        assert_eq!(body["participants"], json!(["Priya", "Amit"]));
        // key_decisions and transcript are not part of this wire contract
        assert!(body.get("key_decisions").is_none());
        assert!(body.get("transcript").is_none());
    }

    #[tokio::test]
    async fn test_upload_audio_happy_path() {
        let app = router(state_with(
            MockLlm::replying(TEMPLATE_REPLY),
            MockTranscription::transcribing("Priya: send report by Friday. Amit: fix bugs."),
        ));

        let response = app.oneshot(multipart_upload("file")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(
            body["transcript"],
            "Priya: send report by Friday. Amit: fix bugs."
        );
        assert!(!body["summary"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_audio_transcription_failure_surfaces_upstream_status() {
        let app = router(state_with(
            MockLlm::replying(TEMPLATE_REPLY),
            MockTranscription::failing("Deepgram API error (500 Internal Server Error): boom"),
        ));

        let response = app.oneshot(multipart_upload("file")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = json_body(response).await;
        assert!(body["detail"].as_str().unwrap().contains("500"));
        assert!(body.get("transcript").is_none());
        assert!(body.get("summary").is_none());
    }

    #[tokio::test]
    async fn test_upload_audio_missing_file_field() {
        let app = router(state_with(
            MockLlm::replying(TEMPLATE_REPLY),
            MockTranscription::transcribing("unused"),
        ));

        let response = app.oneshot(multipart_upload("attachment")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = json_body(response).await;
        assert!(body["detail"].as_str().unwrap().contains("file"));
    }

    #[tokio::test]
    async fn test_analysis_failure_surfaces_as_bad_gateway() {
        let app = router(state_with(
            MockLlm::failing("Groq API error (503 Service Unavailable): overloaded"),
            MockTranscription::transcribing("short meeting"),
        ));

        let request = Request::builder()
            .method("POST")
            .uri("/process-text")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"transcript": "short meeting"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let body = json_body(response).await;
        assert!(body["detail"].as_str().unwrap().contains("503"));
    }

    #[test]
    fn test_audio_format_from_filename() {
        assert_eq!(audio_format("meeting.mp3"), "mp3");
        assert_eq!(audio_format("standup.recording.flac"), "flac");
        assert_eq!(audio_format("no_extension"), "wav");
    }
}
