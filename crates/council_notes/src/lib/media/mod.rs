pub mod ffmpeg;
pub mod yt_dlp;

use std::{fmt::Debug, path::Path};

use crate::types::{AudioAsset, MeetingSource};

/// Materializes the audio track of a remote recording as a local file.
pub trait MediaFetcher {
    type Error: Debug;

    fn fetch_audio(&self, source: &MeetingSource, workdir: &Path)
        -> Result<AudioAsset, Self::Error>;
}

/// Local audio transcoding operations used by the splitting strategy.
pub trait AudioTranscoder {
    type Error: Debug;

    /// Re-encodes `input` at a constant `bitrate` into `output`.
    fn compress(&self, input: &Path, output: &Path, bitrate: &str) -> Result<(), Self::Error>;

    /// Cuts `input` into fixed-duration chunks named after `output_pattern`,
    /// which must carry a zero-padded index field so lexicographic filename
    /// order equals chronological order.
    fn split(
        &self,
        input: &Path,
        segment_duration_seconds: u16,
        output_pattern: &Path,
    ) -> Result<(), Self::Error>;
}
