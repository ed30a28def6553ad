use std::path::PathBuf;

use clap::Parser;
use council_notes::{
    openai::OpenAIClient, tracing::init_tracing_subscriber, types::MeetingSource, CleanupPolicy,
    FfmpegTranscoder, MeetingPipelineBuilder, PipelineConfig, YtDlpFetcher,
};
use media_bindings::{Ffmpeg, YtDlp};

#[derive(Parser)]
#[command(name = "council-notes", about = "City council meeting summarizer")]
struct Cli {
    /// URL of the recorded council meeting
    url: String,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_key: String,

    /// Path to yt-dlp cookies file
    #[arg(long, env = "YTDLP_COOKIES_PATH")]
    cookies_path: Option<PathBuf>,

    /// Working directory for intermediate audio files
    #[arg(long, default_value = "/var/tmp/council-notes")]
    workdir: PathBuf,

    /// Segment duration in seconds when splitting oversized audio
    #[arg(long, default_value = "1800")]
    segment_duration: u16,

    /// Constant bitrate applied to each segment before transcription
    #[arg(long, default_value = "64k")]
    bitrate: String,

    /// Largest audio payload sent to the transcription API in one request
    #[arg(long, default_value = "26214400")]
    max_payload_bytes: u64,

    /// Pin transcription to a spoken language (ISO 639-1 code)
    #[arg(long)]
    language: Option<String>,

    /// Keep intermediate audio files after a successful run
    #[arg(long)]
    keep_artifacts: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let config = PipelineConfig {
        max_payload_bytes: cli.max_payload_bytes,
        segment_duration_seconds: cli.segment_duration,
        compress_bitrate: cli.bitrate,
        cleanup: if cli.keep_artifacts {
            CleanupPolicy::KeepArtifacts
        } else {
            CleanupPolicy::RemoveArtifacts
        },
    };

    let yt_dlp = YtDlp::new_with_cookies(cli.cookies_path);

    //XXX: handles both transcription and summarization; hence will need to be cloned
    let mut openai_client = OpenAIClient::new(&cli.openai_key);
    if let Some(language) = cli.language {
        openai_client = openai_client.with_language(language);
    }

    let pipeline = MeetingPipelineBuilder::new(&cli.workdir)
        .fetcher(YtDlpFetcher(yt_dlp))
        .transcoder(FfmpegTranscoder(Ffmpeg::default()))
        .transcriber(openai_client.clone())
        .summarizer(openai_client)
        .config(config)
        .build();

    let source = MeetingSource::new(cli.url);
    tracing::info!(source = %source, "Running pipeline...");

    let notes = pipeline.run(&source).await?;

    println!("Transcript:\n{}\n", notes.transcript);
    println!("Summary:\n{}", notes.summary);

    Ok(())
}
