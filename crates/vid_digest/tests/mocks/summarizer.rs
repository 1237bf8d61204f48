use std::sync::{Arc, Mutex};

use vid_digest::summarize::{ChunkSummarizer, SummarizeError};

#[derive(Clone)]
pub struct MockChunkSummarizer {
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockChunkSummarizer {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(message.to_string()),
        }
    }
}

impl ChunkSummarizer for MockChunkSummarizer {
    async fn summarize_chunk(&self, chunk: &str) -> Result<String, SummarizeError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(chunk.to_string());
        if let Some(ref message) = self.fail_with {
            return Err(SummarizeError::Api {
                status: 503,
                message: message.clone(),
            });
        }
        Ok(format!("summary-{}", calls.len()))
    }
}
