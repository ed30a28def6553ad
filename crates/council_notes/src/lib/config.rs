/// Largest audio payload the transcription endpoint accepts in one request
/// (25 MiB).
pub const DEFAULT_MAX_PAYLOAD_BYTES: u64 = 26_214_400;

/// Duration of each audio segment when an oversized file is split (30 min).
pub const DEFAULT_SEGMENT_DURATION_SECONDS: u16 = 1800;

/// Constant bitrate applied to each segment before transcription.
pub const DEFAULT_COMPRESS_BITRATE: &str = "64k";

/// What happens to intermediate audio files after a successful run.
///
/// Failed runs always leave whatever was already written on disk; the fetch
/// step skips its download when the audio file is already present. Segments
/// are always cut afresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPolicy {
    #[default]
    RemoveArtifacts,
    KeepArtifacts,
}

/// Tuning knobs for one pipeline run.
///
/// Language pinning for transcription is not configured here; it lives on
/// the transcriber client (see `OpenAIClient::with_language`).
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Files at or under this size are transcribed in a single request;
    /// larger files go through the split-and-compress path.
    pub max_payload_bytes: u64,
    pub segment_duration_seconds: u16,
    pub compress_bitrate: String,
    pub cleanup: CleanupPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
            segment_duration_seconds: DEFAULT_SEGMENT_DURATION_SECONDS,
            compress_bitrate: DEFAULT_COMPRESS_BITRATE.to_string(),
            cleanup: CleanupPolicy::default(),
        }
    }
}
