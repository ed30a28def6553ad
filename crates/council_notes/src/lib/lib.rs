mod config;
mod llm;
mod media;
mod pipeline;
pub mod tracing;
pub mod types;

pub use config::{CleanupPolicy, PipelineConfig};
pub use llm::openai;
pub use llm::{
    summarizer::{Summarizer, SummaryResponse},
    transcriber::{TranscribeResponse, Transcriber},
};
pub use media::{
    ffmpeg::FfmpegTranscoder, yt_dlp::YtDlpFetcher, AudioTranscoder, MediaFetcher,
};
pub use pipeline::{builder::MeetingPipelineBuilder, MeetingPipeline};
