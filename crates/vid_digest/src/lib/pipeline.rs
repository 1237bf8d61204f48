use std::path::{Path, PathBuf};

use crate::{
    media::{AudioExtractor, SpeechTranscriber, Transcription},
    summarize::{summarize_generative, ChunkSummarizer, LsaSummarizer},
    yt::{extract_video_id, join_captions, CaptionFetcher},
    PipelineError,
};

pub mod builder;

/// Fixed reply when speech-to-text hears nothing usable. Not an error: the
/// caller still gets a 200 with this text as the summary.
pub const UNINTELLIGIBLE_MESSAGE: &str = "Audio is not clear enough to transcribe.";

/// Both summarization pipelines behind one set of injected collaborators.
///
/// Collaborators are constructed once at startup and reused for every
/// request; the generative model client in particular is never re-created
/// per call.
pub struct SummaryPipeline<C, G, A, T>
where
    C: CaptionFetcher + Send + Sync + 'static,
    G: ChunkSummarizer + Send + Sync + 'static,
    A: AudioExtractor + Send + Sync + 'static,
    T: SpeechTranscriber + Send + Sync + 'static,
{
    pub(crate) captions: C,
    pub(crate) generative: G,
    pub(crate) audio: A,
    pub(crate) speech: T,
    pub(crate) extractive: LsaSummarizer,
    pub(crate) workdir: PathBuf,
}

impl<C, G, A, T> SummaryPipeline<C, G, A, T>
where
    C: CaptionFetcher + Send + Sync + 'static,
    G: ChunkSummarizer + Send + Sync + 'static,
    A: AudioExtractor + Send + Sync + 'static,
    T: SpeechTranscriber + Send + Sync + 'static,
{
    /// URL pipeline: video id -> caption transcript -> generative summary.
    #[tracing::instrument(skip(self))]
    pub async fn summarize_url(&self, youtube_url: &str) -> Result<String, PipelineError> {
        let video_id = extract_video_id(youtube_url).ok_or(PipelineError::InvalidUrl)?;

        let segments = self
            .captions
            .fetch_captions(&video_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, video_id, "Failed to fetch captions");
                // distinct upstream causes deliberately collapse to one outcome
                PipelineError::TranscriptUnavailable
            })?;
        if segments.is_empty() {
            return Err(PipelineError::TranscriptUnavailable);
        }

        let text = join_captions(&segments);
        let summary = summarize_generative(&text, &self.generative).await?;
        Ok(summary)
    }

    /// Upload pipeline: ffmpeg WAV -> speech-to-text -> extractive summary.
    ///
    /// The WAV artifact is request-scoped: a uniquely named temp file under
    /// the workdir, removed on every exit path when the guard drops.
    #[tracing::instrument(skip(self))]
    pub async fn summarize_upload(&self, video_path: &Path) -> Result<String, PipelineError> {
        let wav = tempfile::Builder::new()
            .prefix("audio-")
            .suffix(".wav")
            .tempfile_in(&self.workdir)?;

        self.audio
            .extract_wav(video_path, wav.path())
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to extract audio"))?;

        let text = match self.speech.transcribe(wav.path()).await? {
            Transcription::Text(text) => text,
            Transcription::Unintelligible => return Ok(UNINTELLIGIBLE_MESSAGE.to_string()),
        };

        Ok(self.extractive.summarize(&text))
    }
}
