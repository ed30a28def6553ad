use std::{fmt::Debug, future::Future, path::Path};

use serde::Deserialize;

pub trait Transcriber {
    const TRANSCRIBER_MODEL: &'static str;

    type Error: Debug;

    fn transcribe(
        &self,
        audio_path: &Path,
    ) -> impl Future<Output = Result<TranscribeResponse, Self::Error>> + Send;
}

#[derive(Debug, Deserialize)]
pub struct TranscribeResponse {
    pub duration: f64,
    pub text: String,
}
