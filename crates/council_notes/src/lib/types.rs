use std::path::PathBuf;

/// Locator for the remote meeting recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingSource(String);

impl MeetingSource {
    pub fn new(url: impl Into<String>) -> Self {
        MeetingSource(url.into())
    }

    pub fn url(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MeetingSource {
    fn from(value: &str) -> Self {
        MeetingSource(value.to_string())
    }
}

impl std::fmt::Display for MeetingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A local audio file plus its size metadata.
#[derive(Debug, Clone)]
pub struct AudioAsset {
    pub path: PathBuf,
    pub size_bytes: u64,
}

impl AudioAsset {
    /// Stats `path` and captures its current byte size.
    pub fn from_path(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        let size_bytes = std::fs::metadata(&path)?.len();
        Ok(AudioAsset { path, size_bytes })
    }
}

/// Final output of a pipeline run.
#[derive(Debug, Clone)]
pub struct MeetingNotes {
    pub transcript: String,
    pub summary: String,
}
