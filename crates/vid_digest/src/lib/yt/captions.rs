//! Caption track retrieval via the watch page and the timedtext endpoint.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::{CaptionFetcher, CaptionSegment};

static CAPTION_TRACKS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)"captionTracks":(\[.*?\])"#).unwrap());

#[derive(Debug, thiserror::Error)]
pub enum CaptionError {
    #[error("captions are disabled for this video")]
    Disabled,
    #[error("no usable caption track")]
    NoTracks,
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed caption payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    #[serde(default)]
    language_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TimedTextDocument {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Debug, Deserialize)]
struct TimedTextEvent {
    #[serde(rename = "tStartMs")]
    start_ms: Option<u64>,
    #[serde(rename = "dDurationMs")]
    duration_ms: Option<u64>,
    #[serde(default)]
    segs: Option<Vec<TimedTextSeg>>,
}

#[derive(Debug, Deserialize)]
struct TimedTextSeg {
    #[serde(default)]
    utf8: String,
}

/// Caption fetcher backed by the public watch page: scrapes the
/// `captionTracks` player data, then pulls the track as `json3`.
pub struct CaptionClient {
    client: reqwest::Client,
    base_url: String,
}

impl CaptionClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: "https://www.youtube.com".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for CaptionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CaptionFetcher for CaptionClient {
    #[tracing::instrument(skip(self))]
    async fn fetch_captions(&self, video_id: &str) -> Result<Vec<CaptionSegment>, CaptionError> {
        let watch_page = self
            .client
            .get(format!("{}/watch", self.base_url))
            .query(&[("v", video_id)])
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let tracks = parse_caption_tracks(&watch_page)?;
        let track = tracks
            .iter()
            .find(|t| t.language_code.as_deref() == Some("en"))
            .or_else(|| tracks.first())
            .ok_or(CaptionError::NoTracks)?;

        let timedtext = self
            .client
            .get(format!("{}&fmt=json3", track.base_url))
            .send()
            .await?
            .error_for_status()?
            .json::<TimedTextDocument>()
            .await?;

        Ok(segments_from_events(timedtext.events))
    }
}

fn parse_caption_tracks(watch_page: &str) -> Result<Vec<CaptionTrack>, CaptionError> {
    let raw = CAPTION_TRACKS_RE
        .captures(watch_page)
        .and_then(|caps| caps.get(1))
        .ok_or(CaptionError::Disabled)?;
    Ok(serde_json::from_str(raw.as_str())?)
}

fn segments_from_events(events: Vec<TimedTextEvent>) -> Vec<CaptionSegment> {
    events
        .into_iter()
        .filter_map(|event| {
            let segs = event.segs?;
            let joined = segs.iter().map(|s| s.utf8.as_str()).collect::<String>();
            let text = joined.trim().to_string();
            if text.is_empty() {
                return None;
            }
            Some(CaptionSegment {
                text,
                start: event.start_ms.unwrap_or(0) as f64 / 1000.0,
                duration: event.duration_ms.unwrap_or(0) as f64 / 1000.0,
            })
        })
        .collect()
}
