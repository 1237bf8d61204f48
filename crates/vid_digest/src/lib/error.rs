use crate::media::{AudioError, TranscribeError};
use crate::summarize::SummarizeError;

/// Failure of a single pipeline run. Each variant maps to exactly one HTTP
/// response; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Invalid YouTube URL")]
    InvalidUrl,

    /// Captions disabled, video not found, network failure: all collapse to
    /// this one outcome. Callers cannot tell the causes apart.
    #[error("Unable to fetch transcript")]
    TranscriptUnavailable,

    #[error(transparent)]
    AudioExtraction(#[from] AudioError),

    #[error(transparent)]
    Transcription(#[from] TranscribeError),

    #[error("Failed to summarize text: {0}")]
    Summarization(#[from] SummarizeError),

    #[error("An unexpected error occurred: {0}")]
    Io(#[from] std::io::Error),
}
