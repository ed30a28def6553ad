use std::{ops::Deref, path::Path};

use media_bindings::{AudioProcessor, Ffmpeg, TranscodeError};

use crate::media::AudioTranscoder;

pub struct FfmpegTranscoder(pub Ffmpeg);

impl Deref for FfmpegTranscoder {
    type Target = Ffmpeg;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AudioTranscoder for FfmpegTranscoder {
    type Error = TranscodeError;

    fn compress(&self, input: &Path, output: &Path, bitrate: &str) -> Result<(), TranscodeError> {
        self.compress_audio(input, output, bitrate)
            .inspect_err(|e| tracing::error!(error = %e, "Failed to compress audio"))
    }

    fn split(
        &self,
        input: &Path,
        segment_duration_seconds: u16,
        output_pattern: &Path,
    ) -> Result<(), TranscodeError> {
        self.split_audio_to_chunks(input, segment_duration_seconds, output_pattern)
            .inspect_err(|e| tracing::error!(error = %e, "Failed to split audio to chunks"))
    }
}
