use std::{ops::Deref, path::Path};

use media_bindings::YtDlp;

use crate::{
    media::MediaFetcher,
    types::{AudioAsset, MeetingSource},
};

pub struct YtDlpFetcher(pub YtDlp);

impl Deref for YtDlpFetcher {
    type Target = YtDlp;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl MediaFetcher for YtDlpFetcher {
    type Error = anyhow::Error;

    fn fetch_audio(
        &self,
        source: &MeetingSource,
        workdir: &Path,
    ) -> anyhow::Result<AudioAsset> {
        let audio_output_template = workdir.join("audio.%(ext)s");
        let audio_mp3_path = workdir.join("audio.mp3");

        // download audio if needed
        if !audio_mp3_path.exists() {
            std::fs::create_dir_all(workdir)?;

            if let Err(e) = self
                .download_audio(source.url(), "mp3", &audio_output_template)
                .inspect_err(|e| tracing::error!(error = ?e, "Failed to download audio"))
            {
                anyhow::bail!("Failed to download audio: {:?}", e);
            }

            if !audio_mp3_path.exists() {
                anyhow::bail!(
                    "yt-dlp did not produce expected file: {}",
                    audio_mp3_path.display()
                );
            }
        } else {
            tracing::debug!("Audio already exists at {}", audio_mp3_path.display());
        }

        Ok(AudioAsset::from_path(audio_mp3_path)?)
    }
}
