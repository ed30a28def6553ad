use std::{
    path::{Path, PathBuf},
    process::Command,
};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to run yt-dlp: {0}")]
    Io(#[from] std::io::Error),
    #[error("yt-dlp exited with status {status}: {stderr}")]
    NonZeroExit { status: i32, stderr: String },
}

/// Handle to the `yt-dlp` binary, optionally carrying a cookies file for
/// age-gated or members-only recordings.
#[derive(Debug, Clone, Default)]
pub struct YtDlp {
    cookies_path: Option<PathBuf>,
}

impl YtDlp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_cookies(cookies_path: Option<PathBuf>) -> Self {
        YtDlp { cookies_path }
    }

    /// Downloads the audio track of a single video, post-processed to `codec`.
    ///
    /// `output_template` is handed to yt-dlp verbatim, so it may contain
    /// template fields such as `%(ext)s`. Only the target item is fetched,
    /// never the playlist it may belong to.
    pub fn download_audio(
        &self,
        url: &str,
        codec: &str,
        output_template: impl AsRef<Path>,
    ) -> Result<(), FetchError> {
        let args = self.download_audio_args(url, codec, output_template.as_ref());
        tracing::debug!(?args, "Invoking yt-dlp");

        let output = Command::new("yt-dlp").args(&args).output()?;
        if !output.status.success() {
            return Err(FetchError::NonZeroExit {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(())
    }

    fn download_audio_args(&self, url: &str, codec: &str, output_template: &Path) -> Vec<String> {
        let mut args = vec![
            "--extract-audio".to_string(),
            "--audio-format".to_string(),
            codec.to_string(),
            "--audio-quality".to_string(),
            "192K".to_string(),
            // a watch URL may carry a playlist parameter; only the single
            // target item is wanted
            "--no-playlist".to_string(),
            "--output".to_string(),
            output_template.display().to_string(),
        ];
        if let Some(cookies_path) = &self.cookies_path {
            args.push("--cookies".to_string());
            args.push(cookies_path.display().to_string());
        }
        args.push(url.to_string());
        args
    }
}
