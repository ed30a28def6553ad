use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use council_notes::{TranscribeResponse, Transcriber};

#[derive(Clone)]
pub struct MockTranscriber {
    pub response_texts: Vec<String>,
    pub calls: Arc<Mutex<Vec<PathBuf>>>,
    pub fail_with: Option<String>,
    pub fail_on_call: Option<(usize, String)>,
}

impl MockTranscriber {
    pub fn new(response_text: &str) -> Self {
        Self::with_fragments(&[response_text])
    }

    pub fn with_fragments(texts: &[&str]) -> Self {
        Self {
            response_texts: texts.iter().map(|t| t.to_string()).collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
            fail_on_call: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::with_fragments(&[])
        }
    }

    /// Succeeds until the zero-based `index`-th call, which fails.
    pub fn failing_on_call(index: usize, msg: &str) -> Self {
        Self {
            fail_on_call: Some((index, msg.to_string())),
            ..Self::with_fragments(&["fragment"])
        }
    }
}

impl Transcriber for MockTranscriber {
    const TRANSCRIBER_MODEL: &'static str = "mock-whisper";
    type Error = anyhow::Error;

    async fn transcribe(&self, audio_path: &Path) -> Result<TranscribeResponse, Self::Error> {
        let call_index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(audio_path.to_path_buf());
            calls.len() - 1
        };

        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        if let Some((index, ref msg)) = self.fail_on_call {
            if index == call_index {
                return Err(anyhow::anyhow!("{}", msg));
            }
        }

        let text = self
            .response_texts
            .get(call_index)
            .or_else(|| self.response_texts.last())
            .cloned()
            .unwrap_or_default();

        Ok(TranscribeResponse {
            duration: 120.0,
            text,
        })
    }
}
