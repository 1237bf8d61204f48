//! Remote speech recognition over a whole WAV buffer.

use std::path::Path;

use serde::Deserialize;

use super::{SpeechTranscriber, Transcription};

#[derive(Debug, thiserror::Error)]
pub enum TranscribeError {
    #[error("Audio file not found.")]
    MissingFile,
    #[error("Could not connect to the transcription service. Error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Transcription service error: {status} - {message}")]
    Service { status: u16, message: String },
    #[error("An unexpected error occurred: {0}")]
    Io(#[from] std::io::Error),
}

/// Client for an OpenAI-compatible `/audio/transcriptions` endpoint.
pub struct SpeechApiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct SpeechResponse {
    text: String,
}

impl SpeechApiClient {
    pub const DEFAULT_MODEL: &'static str = "whisper-1";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".into(),
            model: Self::DEFAULT_MODEL.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl SpeechTranscriber for SpeechApiClient {
    #[tracing::instrument(skip(self))]
    async fn transcribe(&self, wav_path: &Path) -> Result<Transcription, TranscribeError> {
        if !wav_path.exists() {
            return Err(TranscribeError::MissingFile);
        }

        // The whole recording goes up as a single buffer; long files block
        // here until the service answers.
        let bytes = tokio::fs::read(wav_path).await?;
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name("audio.wav")
            .mime_str("audio/wav")?;
        let form = reqwest::multipart::Form::new()
            .text("model", self.model.clone())
            .part("file", part);

        let resp = self
            .client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to reach speech service"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(TranscribeError::Service { status, message });
        }

        let body = resp.json::<SpeechResponse>().await?;
        if body.text.trim().is_empty() {
            return Ok(Transcription::Unintelligible);
        }
        Ok(Transcription::Text(body.text))
    }
}
