use std::{
    fs,
    path::Path,
    sync::{Arc, Mutex},
};

use council_notes::{
    types::{AudioAsset, MeetingSource},
    MediaFetcher,
};

/// Writes a zero-filled `audio.mp3` of the configured size into the workdir,
/// standing in for a yt-dlp download.
#[derive(Clone)]
pub struct MockFetcher {
    pub size_bytes: u64,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockFetcher {
    pub fn new(size_bytes: u64) -> Self {
        Self {
            size_bytes,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            size_bytes: 0,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl MediaFetcher for MockFetcher {
    type Error = anyhow::Error;

    fn fetch_audio(&self, source: &MeetingSource, workdir: &Path) -> anyhow::Result<AudioAsset> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.calls.lock().unwrap().push(source.url().to_string());

        fs::create_dir_all(workdir)?;
        let path = workdir.join("audio.mp3");
        fs::write(&path, vec![0u8; self.size_bytes as usize])?;

        Ok(AudioAsset::from_path(path)?)
    }
}
