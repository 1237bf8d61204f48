use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use vid_digest::media::{SpeechTranscriber, TranscribeError, Transcription};

#[derive(Clone)]
pub struct MockTranscriber {
    pub outcome: Transcription,
    pub calls: Arc<Mutex<Vec<PathBuf>>>,
    pub fail_with: Option<String>,
}

impl MockTranscriber {
    pub fn new(text: &str) -> Self {
        Self {
            outcome: Transcription::Text(text.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn unintelligible() -> Self {
        Self {
            outcome: Transcription::Unintelligible,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Transcription::Unintelligible,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(message.to_string()),
        }
    }
}

impl SpeechTranscriber for MockTranscriber {
    async fn transcribe(&self, wav_path: &Path) -> Result<Transcription, TranscribeError> {
        self.calls.lock().unwrap().push(wav_path.to_path_buf());
        if let Some(ref message) = self.fail_with {
            return Err(TranscribeError::Service {
                status: 502,
                message: message.clone(),
            });
        }
        Ok(self.outcome.clone())
    }
}
