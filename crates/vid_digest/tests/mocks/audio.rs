use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use vid_digest::media::{AudioError, AudioExtractor};

#[derive(Clone)]
pub struct MockAudioExtractor {
    pub calls: Arc<Mutex<Vec<(PathBuf, PathBuf)>>>,
    pub fail_with: Option<String>,
}

impl Default for MockAudioExtractor {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }
}

impl MockAudioExtractor {
    pub fn failing(message: &str) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(message.to_string()),
        }
    }
}

impl AudioExtractor for MockAudioExtractor {
    async fn extract_wav(&self, video_path: &Path, wav_path: &Path) -> Result<(), AudioError> {
        self.calls
            .lock()
            .unwrap()
            .push((video_path.to_path_buf(), wav_path.to_path_buf()));
        if let Some(ref message) = self.fail_with {
            return Err(AudioError(message.clone()));
        }
        Ok(())
    }
}
