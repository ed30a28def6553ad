use std::{path::Path, process::Command};

#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("failed to run ffmpeg: {0}")]
    Io(#[from] std::io::Error),
    #[error("ffmpeg exited with status {status}: {stderr}")]
    NonZeroExit { status: i32, stderr: String },
}

/// Audio transcoding operations backed by an external processor.
pub trait AudioProcessor {
    /// Re-encodes `input` at a constant `bitrate` (e.g. "64k") to shrink it
    /// under an upstream payload limit. Lossy.
    fn compress_audio(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        bitrate: &str,
    ) -> Result<(), TranscodeError>;

    /// Cuts `input` into fixed-duration chunks without re-encoding.
    ///
    /// `output_pattern` must contain a zero-padded index field (e.g.
    /// `segment_%03d.mp3`) so that lexicographic filename order equals
    /// chronological order. Callers recover chunk order by sorting names.
    fn split_audio_to_chunks(
        &self,
        input: impl AsRef<Path>,
        chunk_duration_seconds: u16,
        output_pattern: impl AsRef<Path>,
    ) -> Result<(), TranscodeError>;
}

#[derive(Debug, Clone, Default)]
pub struct Ffmpeg;

impl Ffmpeg {
    fn run(&self, args: &[String]) -> Result<(), TranscodeError> {
        tracing::debug!(?args, "Invoking ffmpeg");

        let output = Command::new("ffmpeg").args(args).output()?;
        if !output.status.success() {
            return Err(TranscodeError::NonZeroExit {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(())
    }

    fn compress_args(input: &Path, output: &Path, bitrate: &str) -> Vec<String> {
        vec![
            "-y".to_string(),
            "-i".to_string(),
            input.display().to_string(),
            "-b:a".to_string(),
            bitrate.to_string(),
            output.display().to_string(),
        ]
    }

    fn split_args(input: &Path, chunk_duration_seconds: u16, output_pattern: &Path) -> Vec<String> {
        vec![
            "-y".to_string(),
            "-i".to_string(),
            input.display().to_string(),
            "-f".to_string(),
            "segment".to_string(),
            "-segment_time".to_string(),
            chunk_duration_seconds.to_string(),
            "-c".to_string(),
            "copy".to_string(),
            output_pattern.display().to_string(),
        ]
    }
}

impl AudioProcessor for Ffmpeg {
    fn compress_audio(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        bitrate: &str,
    ) -> Result<(), TranscodeError> {
        self.run(&Self::compress_args(input.as_ref(), output.as_ref(), bitrate))
    }

    fn split_audio_to_chunks(
        &self,
        input: impl AsRef<Path>,
        chunk_duration_seconds: u16,
        output_pattern: impl AsRef<Path>,
    ) -> Result<(), TranscodeError> {
        self.run(&Self::split_args(
            input.as_ref(),
            chunk_duration_seconds,
            output_pattern.as_ref(),
        ))
    }
}
