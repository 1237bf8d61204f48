//! HTTP surface: one JSON route per pipeline plus a static landing page.

use std::{path::PathBuf, sync::Arc};

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::{
    media::{extension_allowed, AudioExtractor, SpeechTranscriber, ALLOWED_EXTENSIONS},
    summarize::ChunkSummarizer,
    yt::CaptionFetcher,
    PipelineError, SummaryPipeline,
};

pub struct AppState<C, G, A, T>
where
    C: CaptionFetcher + Send + Sync + 'static,
    G: ChunkSummarizer + Send + Sync + 'static,
    A: AudioExtractor + Send + Sync + 'static,
    T: SpeechTranscriber + Send + Sync + 'static,
{
    pub pipeline: SummaryPipeline<C, G, A, T>,
    pub upload_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeYoutubeRequest {
    #[serde(default)]
    pub youtube_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryBody {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

pub fn router<C, G, A, T>(state: Arc<AppState<C, G, A, T>>) -> Router
where
    C: CaptionFetcher + Send + Sync + 'static,
    G: ChunkSummarizer + Send + Sync + 'static,
    A: AudioExtractor + Send + Sync + 'static,
    T: SpeechTranscriber + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/summarize_youtube", post(summarize_youtube::<C, G, A, T>))
        .route("/summarize_offline", post(summarize_offline::<C, G, A, T>))
        .layer(DefaultBodyLimit::disable())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[tracing::instrument(skip_all)]
async fn summarize_youtube<C, G, A, T>(
    State(state): State<Arc<AppState<C, G, A, T>>>,
    Json(request): Json<SummarizeYoutubeRequest>,
) -> Result<Json<SummaryBody>, ApiError>
where
    C: CaptionFetcher + Send + Sync + 'static,
    G: ChunkSummarizer + Send + Sync + 'static,
    A: AudioExtractor + Send + Sync + 'static,
    T: SpeechTranscriber + Send + Sync + 'static,
{
    let youtube_url = match request.youtube_url.as_deref().filter(|u| !u.is_empty()) {
        Some(url) => url,
        None => return Err(bad_request("No URL provided")),
    };

    let summary = state
        .pipeline
        .summarize_url(youtube_url)
        .await
        .map_err(error_response)?;
    Ok(Json(SummaryBody { summary }))
}

#[tracing::instrument(skip_all)]
async fn summarize_offline<C, G, A, T>(
    State(state): State<Arc<AppState<C, G, A, T>>>,
    mut multipart: Multipart,
) -> Result<Json<SummaryBody>, ApiError>
where
    C: CaptionFetcher + Send + Sync + 'static,
    G: ChunkSummarizer + Send + Sync + 'static,
    A: AudioExtractor + Send + Sync + 'static,
    T: SpeechTranscriber + Send + Sync + 'static,
{
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some("video") => break field,
            Ok(Some(_)) => continue,
            Ok(None) | Err(_) => return Err(bad_request("No file uploaded")),
        }
    };

    let file_name = field.file_name().map(str::to_owned).unwrap_or_default();
    if file_name.is_empty() {
        return Err(bad_request("No file selected"));
    }
    if !extension_allowed(&file_name) {
        return Err(bad_request(&format!(
            "Invalid file format. Allowed formats: {}",
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }

    let data = field
        .bytes()
        .await
        .map_err(|e| internal_error(e.to_string()))?;
    let video_path = state.upload_dir.join(sanitize_filename(&file_name));
    tokio::fs::write(&video_path, &data)
        .await
        .map_err(|e| internal_error(e.to_string()))?;

    let summary = state
        .pipeline
        .summarize_upload(&video_path)
        .await
        .map_err(error_response)?;
    Ok(Json(SummaryBody { summary }))
}

fn error_response(err: PipelineError) -> ApiError {
    match err {
        PipelineError::InvalidUrl => bad_request("Invalid YouTube URL"),
        PipelineError::TranscriptUnavailable => internal_error("Unable to fetch transcript".into()),
        other => internal_error(other.to_string()),
    }
}

fn bad_request(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}

fn internal_error(message: String) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody { error: message }),
    )
}

/// Strips path components and hostile characters from an uploaded filename.
fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    base.chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '.' | '-' | '_' | ' ') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

const INDEX_HTML: &str = r#"<!doctype html>
<html>
    <head>
        <title>Video Digest</title>
    </head>
    <body>
        <h1>Video Digest</h1>
        <p>POST a JSON body to <code>/summarize_youtube</code> or upload a video below.</p>
        <form action="/summarize_offline" method="post" enctype="multipart/form-data">
            <div>
                <label>
                    Video file (mp4, avi, mkv, mov):
                    <input type="file" name="video">
                </label>
            </div>
            <div>
                <input type="submit" value="Summarize">
            </div>
        </form>
    </body>
</html>
"#;
