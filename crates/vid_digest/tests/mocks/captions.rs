use std::sync::{Arc, Mutex};

use vid_digest::yt::{CaptionError, CaptionFetcher, CaptionSegment};

#[derive(Clone, Copy)]
pub enum CaptionFailure {
    /// Captions disabled for the video.
    Disabled,
    /// Any other fetch failure (stands in for network errors and bad ids).
    Fetch,
}

#[derive(Clone)]
pub struct MockCaptionFetcher {
    pub segments: Vec<CaptionSegment>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<CaptionFailure>,
}

impl MockCaptionFetcher {
    pub fn new(texts: &[&str]) -> Self {
        let segments = texts
            .iter()
            .enumerate()
            .map(|(i, text)| CaptionSegment {
                text: text.to_string(),
                start: i as f64 * 2.0,
                duration: 2.0,
            })
            .collect();
        Self {
            segments,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(failure: CaptionFailure) -> Self {
        Self {
            segments: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(failure),
        }
    }
}

impl CaptionFetcher for MockCaptionFetcher {
    async fn fetch_captions(&self, video_id: &str) -> Result<Vec<CaptionSegment>, CaptionError> {
        self.calls.lock().unwrap().push(video_id.to_string());
        match self.fail_with {
            Some(CaptionFailure::Disabled) => Err(CaptionError::Disabled),
            Some(CaptionFailure::Fetch) => Err(serde_json::from_str::<serde_json::Value>("{")
                .unwrap_err()
                .into()),
            None => Ok(self.segments.clone()),
        }
    }
}
