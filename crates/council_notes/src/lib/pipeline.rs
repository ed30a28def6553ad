pub mod builder;

use std::{fs, path::PathBuf};

use anyhow::Context;
use itertools::Itertools;

use crate::{
    config::{CleanupPolicy, PipelineConfig},
    media::{AudioTranscoder, MediaFetcher},
    types::{AudioAsset, MeetingNotes, MeetingSource},
    Summarizer, Transcriber,
};

/// ffmpeg segment pattern; the zero-padded index keeps lexicographic
/// filename order equal to chronological order.
const SEGMENT_FILE_PATTERN: &str = "segment_%03d.mp3";

// The core meeting recording processor: fetch, transcribe, summarize.
pub struct MeetingPipeline<F, X, T, S>
where
    F: MediaFetcher + Send + Sync + 'static,
    X: AudioTranscoder + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    workdir: PathBuf,
    fetcher: F,
    transcoder: X,
    transcriber: T,
    summarizer: S,
    config: PipelineConfig,
}

impl<F, X, T, S> MeetingPipeline<F, X, T, S>
where
    F: MediaFetcher + Send + Sync + 'static,
    X: AudioTranscoder + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    /// Runs the full pipeline for one meeting recording.
    ///
    /// Every stage blocks until complete and any failure aborts the run,
    /// leaving already-written files on disk.
    #[tracing::instrument(skip(self))]
    pub async fn run(&self, source: &MeetingSource) -> anyhow::Result<MeetingNotes> {
        fs::create_dir_all(&self.workdir)
            .with_context(|| format!("Failed to create workdir {}", self.workdir.display()))?;

        let asset = self
            .fetcher
            .fetch_audio(source, &self.workdir)
            .map_err(|e| anyhow::anyhow!("Failed to fetch audio: {e:?}"))?;
        tracing::info!(size_bytes = asset.size_bytes, path = ?asset.path, "Fetched audio");

        let transcript = if asset.size_bytes <= self.config.max_payload_bytes {
            self.transcribe_whole(&asset).await?
        } else {
            self.transcribe_in_segments(&asset).await?
        };

        let summary_resp = self
            .summarizer
            .summarize(&transcript)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to summarize transcript: {e:?}"))?;

        if self.config.cleanup == CleanupPolicy::RemoveArtifacts {
            self.remove_artifacts(&asset);
        }

        Ok(MeetingNotes {
            transcript,
            summary: summary_resp.summary,
        })
    }

    /// Single-request path for audio at or under the payload limit.
    #[tracing::instrument(skip_all)]
    async fn transcribe_whole(&self, asset: &AudioAsset) -> anyhow::Result<String> {
        tracing::info!("Transcribing audio in a single request");

        let response = self
            .transcriber
            .transcribe(&asset.path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to transcribe audio: {e:?}"))?;

        Ok(response.text)
    }

    /// Splitting strategy for audio over the payload limit: cut into
    /// fixed-duration segments, compress each, transcribe each in
    /// chronological order and concatenate the fragments in that order.
    #[tracing::instrument(skip_all)]
    async fn transcribe_in_segments(&self, asset: &AudioAsset) -> anyhow::Result<String> {
        tracing::info!(
            size_bytes = asset.size_bytes,
            max_payload_bytes = self.config.max_payload_bytes,
            "Audio exceeds the transcription payload limit, splitting into segments"
        );

        // an aborted run may have left segments behind; a fresh split can
        // produce fewer files, and any stale leftover would be transcribed
        // into the transcript
        let segments_dir = self.workdir.join("segments");
        if segments_dir.exists() {
            fs::remove_dir_all(&segments_dir)?;
        }
        fs::create_dir_all(&segments_dir)?;

        self.transcoder
            .split(
                &asset.path,
                self.config.segment_duration_seconds,
                &segments_dir.join(SEGMENT_FILE_PATTERN),
            )
            .map_err(|e| anyhow::anyhow!("Failed to split audio: {e:?}"))?;

        // collect and sort segment files; name order is chronological order
        let segment_paths: Vec<PathBuf> = fs::read_dir(&segments_dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("segment_"))
            })
            .sorted()
            .collect();

        anyhow::ensure!(
            !segment_paths.is_empty(),
            "Splitting produced no segments in {}",
            segments_dir.display()
        );
        tracing::info!(count = segment_paths.len(), "Transcribing segments");

        let mut transcript = String::new();
        for segment_path in &segment_paths {
            let file_name = segment_path
                .file_name()
                .and_then(|n| n.to_str())
                .context("Invalid segment file name")?;
            let compressed_path = segments_dir.join(format!("compressed_{file_name}"));

            self.transcoder
                .compress(segment_path, &compressed_path, &self.config.compress_bitrate)
                .map_err(|e| {
                    anyhow::anyhow!(
                        "Failed to compress segment {}: {e:?}",
                        segment_path.display()
                    )
                })?;

            let response = self
                .transcriber
                .transcribe(&compressed_path)
                .await
                .map_err(|e| {
                    anyhow::anyhow!(
                        "Failed to transcribe segment {}: {e:?}",
                        compressed_path.display()
                    )
                })?;

            transcript.push_str(&response.text);
            transcript.push('\n');
        }

        Ok(transcript)
    }

    /// Removes the staging files of a successful run. Failures here are
    /// logged, not propagated.
    fn remove_artifacts(&self, asset: &AudioAsset) {
        if asset.path.exists() {
            if let Err(e) = fs::remove_file(&asset.path) {
                tracing::warn!(error = ?e, path = ?asset.path, "Failed to clean up audio file");
            }
        }

        let segments_dir = self.workdir.join("segments");
        if segments_dir.exists() {
            if let Err(e) = fs::remove_dir_all(&segments_dir) {
                tracing::warn!(error = ?e, path = ?segments_dir, "Failed to clean up segments directory");
            } else {
                tracing::info!(path = ?segments_dir, "Cleaned up segments directory");
            }
        }
    }
}
