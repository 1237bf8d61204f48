use serde::{Deserialize, Serialize};

use super::ChunkSummarizer;

#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("model returned no summary")]
    EmptyResponse,
}

/// Client for the Hugging Face inference API summarization task.
pub struct HfInferenceClient {
    client: reqwest::Client,
    api_token: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: SummarizationParameters,
}

#[derive(Debug, Serialize)]
struct SummarizationParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
}

#[derive(Debug, Deserialize)]
struct SummarizationResponse {
    summary_text: String,
}

impl HfInferenceClient {
    pub const DEFAULT_MODEL: &'static str = "facebook/bart-large-cnn";

    /// Output-length bounds per chunk, in model tokens.
    const MAX_LENGTH: u32 = 300;
    const MIN_LENGTH: u32 = 100;

    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_token: api_token.into(),
            base_url: "https://api-inference.huggingface.co".into(),
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

impl ChunkSummarizer for HfInferenceClient {
    async fn summarize_chunk(&self, chunk: &str) -> Result<String, SummarizeError> {
        let body = SummarizationRequest {
            inputs: chunk,
            parameters: SummarizationParameters {
                max_length: Self::MAX_LENGTH,
                min_length: Self::MIN_LENGTH,
                // greedy decoding; identical input yields identical output
                do_sample: false,
            },
        };

        let resp = self
            .client
            .post(format!("{}/models/{}", self.base_url, self.model))
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to reach summarization model"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(SummarizeError::Api { status, message });
        }

        let summaries = resp.json::<Vec<SummarizationResponse>>().await?;
        summaries
            .into_iter()
            .next()
            .map(|s| s.summary_text)
            .ok_or(SummarizeError::EmptyResponse)
    }
}
