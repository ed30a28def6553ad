//! # Media Bindings
//!
//! Thin wrappers around the `yt-dlp` and `ffmpeg` binaries used to fetch and
//! transcode meeting audio. Both tools are invoked as subprocesses; a non-zero
//! exit surfaces as a typed error carrying the captured stderr.

mod ffmpeg;
mod yt_dlp;

pub use ffmpeg::{AudioProcessor, Ffmpeg, TranscodeError};
pub use yt_dlp::{FetchError, YtDlp};
