//! Uploaded-media handling: WAV extraction and speech-to-text.

pub mod ffmpeg;
pub mod speech;

use std::{future::Future, path::Path};

pub use ffmpeg::FfmpegExtractor;
pub use speech::{SpeechApiClient, TranscribeError};

/// Upload container formats accepted before any processing happens.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["mp4", "avi", "mkv", "mov"];

pub fn extension_allowed(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Outcome of a speech-to-text call that reached the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transcription {
    Text(String),
    /// The audio was processed but nothing intelligible came back.
    Unintelligible,
}

#[derive(Debug, thiserror::Error)]
#[error("Error extracting audio: {0}")]
pub struct AudioError(pub String);

/// Produces a mono 16kHz WAV track from a video container.
pub trait AudioExtractor {
    fn extract_wav(
        &self,
        video_path: &Path,
        wav_path: &Path,
    ) -> impl Future<Output = Result<(), AudioError>> + Send;
}

/// Sends a whole WAV file to a recognition service in one call.
pub trait SpeechTranscriber {
    fn transcribe(
        &self,
        wav_path: &Path,
    ) -> impl Future<Output = Result<Transcription, TranscribeError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions() {
        assert!(extension_allowed("clip.mp4"));
        assert!(extension_allowed("clip.avi"));
        assert!(extension_allowed("clip.mkv"));
        assert!(extension_allowed("clip.mov"));
        assert!(extension_allowed("CLIP.MP4"));
    }

    #[test]
    fn test_rejected_extensions() {
        assert!(!extension_allowed("notes.txt"));
        assert!(!extension_allowed("clip.webm"));
        assert!(!extension_allowed("clip.gif"));
        assert!(!extension_allowed("no_extension"));
        assert!(!extension_allowed(""));
    }
}
