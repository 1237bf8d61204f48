//! YouTube helpers: video id extraction and caption track retrieval.

pub mod captions;

use std::{future::Future, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

pub use captions::{CaptionClient, CaptionError};

/// Matches an 11-character video id after `v=` or a path separator.
static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").unwrap());

/// A single timed caption record, kept in document order.
#[derive(Debug, Clone, Serialize)]
pub struct CaptionSegment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Fetches the platform-provided caption track for a video id.
pub trait CaptionFetcher {
    fn fetch_captions(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<Vec<CaptionSegment>, CaptionError>> + Send;
}

/// Extracts the canonical 11-character video id from a YouTube URL.
///
/// No validation that the id corresponds to an existing video happens here;
/// that is deferred to the caption fetch.
pub fn extract_video_id(youtube_url: &str) -> Option<String> {
    VIDEO_ID_RE
        .captures(youtube_url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Joins segment texts with single spaces, in order.
pub fn join_captions(segments: &[CaptionSegment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
