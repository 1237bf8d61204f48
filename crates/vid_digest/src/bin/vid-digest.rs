use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use vid_digest::{
    http::{router, AppState},
    media::{FfmpegExtractor, SpeechApiClient},
    summarize::HfInferenceClient,
    tracing::init_tracing_subscriber,
    yt::CaptionClient,
    SummaryPipelineBuilder,
};

#[derive(Parser)]
#[command(name = "vid-digest", about = "Video transcript summarization service")]
struct Cli {
    /// HTTP bind address
    #[arg(long, env = "ADDR", default_value = "127.0.0.1")]
    addr: String,

    /// HTTP port
    #[arg(long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Hugging Face inference API token
    #[arg(long, env = "HF_API_TOKEN")]
    hf_token: String,

    /// Speech recognition API key
    #[arg(long, env = "SPEECH_API_KEY")]
    speech_key: String,

    /// Directory for uploaded files and scratch audio
    #[arg(long, env = "UPLOAD_DIR", default_value = "uploads")]
    upload_dir: PathBuf,

    /// Path to the ffmpeg binary
    #[arg(long, env = "FFMPEG_PATH", default_value = "ffmpeg")]
    ffmpeg_path: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing_subscriber()?;

    tokio::fs::create_dir_all(&cli.upload_dir).await?;

    let pipeline = SummaryPipelineBuilder::new(&cli.upload_dir)
        .captions(CaptionClient::new())
        .generative(HfInferenceClient::new(&cli.hf_token))
        .audio(FfmpegExtractor::new().with_ffmpeg_path(&cli.ffmpeg_path))
        .speech(SpeechApiClient::new(&cli.speech_key))
        .build();

    let state = Arc::new(AppState {
        pipeline,
        upload_dir: cli.upload_dir,
    });

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", cli.addr, cli.port)).await?;
    tracing::info!(addr = %cli.addr, port = cli.port, "Listening");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
