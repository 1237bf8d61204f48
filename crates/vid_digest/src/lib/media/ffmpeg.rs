use std::path::Path;

use tokio::process::Command;

use super::{AudioError, AudioExtractor};

/// Audio extractor that shells out to ffmpeg.
#[derive(Debug, Clone)]
pub struct FfmpegExtractor {
    ffmpeg_path: String,
}

impl FfmpegExtractor {
    pub fn new() -> Self {
        Self {
            ffmpeg_path: "ffmpeg".into(),
        }
    }

    pub fn with_ffmpeg_path(mut self, path: impl Into<String>) -> Self {
        self.ffmpeg_path = path.into();
        self
    }
}

impl Default for FfmpegExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioExtractor for FfmpegExtractor {
    async fn extract_wav(&self, video_path: &Path, wav_path: &Path) -> Result<(), AudioError> {
        tracing::debug!(
            input = %video_path.display(),
            output = %wav_path.display(),
            "Extracting audio track"
        );

        let input = video_path.to_string_lossy();
        let output_path = wav_path.to_string_lossy();

        let output = Command::new(&self.ffmpeg_path)
            .args([
                "-i",
                input.as_ref(),
                "-vn",
                "-ac",
                "1",
                "-ar",
                "16000",
                "-f",
                "wav",
                "-y",
                output_path.as_ref(),
            ])
            .output()
            .await
            .map_err(|e| AudioError(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(error = %stderr, "ffmpeg failed");
            return Err(AudioError(stderr.trim().to_string()));
        }

        Ok(())
    }
}
