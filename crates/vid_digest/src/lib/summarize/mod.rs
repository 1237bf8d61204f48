//! Summarization: a remote generative model for caption transcripts, a local
//! LSA sentence ranker for speech-to-text output.

pub mod hf;
pub mod lsa;

use std::future::Future;

pub use hf::{HfInferenceClient, SummarizeError};
pub use lsa::LsaSummarizer;

/// Reply when there is nothing to feed the generative model.
pub const EMPTY_TEXT_SUMMARY: &str = "No text to summarize.";

/// Input-length ceiling of the generative model, in characters per call.
pub const CHUNK_CHARS: usize = 1000;

/// Summarizes one bounded chunk of text with a generative model.
pub trait ChunkSummarizer {
    fn summarize_chunk(
        &self,
        chunk: &str,
    ) -> impl Future<Output = Result<String, SummarizeError>> + Send;
}

/// Splits `text` into consecutive chunks of at most `size` characters.
///
/// Boundaries are character counts, not sentence breaks; a sentence straddling
/// a boundary gets summarized as two halves.
pub fn chunk_text(text: &str, size: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == size {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}

/// Chunked generative summarization: one model call per chunk, per-chunk
/// summaries joined with single spaces in chunk order.
pub async fn summarize_generative<S: ChunkSummarizer>(
    text: &str,
    summarizer: &S,
) -> Result<String, SummarizeError> {
    if text.is_empty() {
        return Ok(EMPTY_TEXT_SUMMARY.to_string());
    }

    let mut parts = Vec::new();
    for chunk in chunk_text(text, CHUNK_CHARS) {
        parts.push(summarizer.summarize_chunk(chunk).await?);
    }
    Ok(parts.join(" "))
}
