use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use council_notes::AudioTranscoder;

/// Materializes the configured number of segment files on `split` and copies
/// bytes on `compress`, recording every call.
#[derive(Clone)]
pub struct MockTranscoder {
    pub segment_count: usize,
    pub split_calls: Arc<Mutex<Vec<(PathBuf, u16)>>>,
    pub compress_calls: Arc<Mutex<Vec<PathBuf>>>,
    pub fail_with: Option<String>,
}

impl MockTranscoder {
    pub fn with_segments(segment_count: usize) -> Self {
        Self {
            segment_count,
            split_calls: Arc::new(Mutex::new(Vec::new())),
            compress_calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::with_segments(0)
        }
    }
}

impl AudioTranscoder for MockTranscoder {
    type Error = anyhow::Error;

    fn compress(&self, input: &Path, output: &Path, _bitrate: &str) -> anyhow::Result<()> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.compress_calls.lock().unwrap().push(input.to_path_buf());
        fs::copy(input, output)?;
        Ok(())
    }

    fn split(
        &self,
        input: &Path,
        segment_duration_seconds: u16,
        output_pattern: &Path,
    ) -> anyhow::Result<()> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.split_calls
            .lock()
            .unwrap()
            .push((input.to_path_buf(), segment_duration_seconds));

        let dir = output_pattern.parent().expect("pattern should have a parent");
        let pattern = output_pattern
            .file_name()
            .and_then(|n| n.to_str())
            .expect("pattern should be valid UTF-8");

        for i in 0..self.segment_count {
            let name = pattern.replace("%03d", &format!("{i:03}"));
            fs::write(dir.join(name), b"segment bytes")?;
        }
        Ok(())
    }
}
