use std::path::{Path, PathBuf};

use reqwest::Client;
use serde::Deserialize;

use crate::{Summarizer, SummaryResponse, TranscribeResponse, Transcriber};

/// Client for the OpenAI REST API, wearing both the transcriber and the
/// summarizer hat. Constructed per pipeline run; clone it when both roles
/// are needed.
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
    language: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizationError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("transcript of {tokens} tokens exceeds the {limit} token context window")]
    ContextOverflow { tokens: usize, limit: usize },
    #[error("tokenizer error: {0}")]
    Tokenizer(String),
}

impl OpenAIClient {
    const SYSTEM_PROMPT: &'static str = include_str!("./prompts/system_0.txt");
    const USER_PROMPT: &'static str = include_str!("./prompts/user_0.txt");

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".into(),
            language: None,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Pins transcription to a spoken language (ISO 639-1 code). Without a
    /// pin, short ambiguous audio such as pre-meeting hold music is
    /// occasionally misdetected as another language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub async fn send_transcribe_request(
        &self,
        file: impl Into<PathBuf>,
        model_name: impl Into<String>,
    ) -> Result<TranscribeResponse, TranscriptionError> {
        let audio_path = file.into();

        let bytes = tokio::fs::read(&audio_path).await?;
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name("audio.mp3")
            .mime_str("audio/mpeg")
            .unwrap();

        let mut form = reqwest::multipart::Form::new()
            .text("model", model_name.into())
            .text("response_format", "verbose_json")
            .part("file", part);

        if let Some(language) = &self.language {
            form = form.text("language", language.clone());
        }

        let resp = self
            .client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(TranscriptionError::Api { status, message });
        }

        Ok(resp.json::<TranscribeResponse>().await?)
    }

    pub async fn send_completion_request(
        &self,
        model_name: impl Into<String>,
        user_content: impl Into<String>,
    ) -> Result<CompletionResponse, SummarizationError> {
        let body = serde_json::json!({
            "model": model_name.into(),
            "messages": [
                {
                    "role": "system",
                    "content": Self::SYSTEM_PROMPT
                },
                {
                    "role": "user",
                    "content": user_content.into()
                }
            ]
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(SummarizationError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: CompletionMessage,
    pub finish_reason: String,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}

impl Transcriber for OpenAIClient {
    const TRANSCRIBER_MODEL: &'static str = "whisper-1";
    type Error = TranscriptionError;

    async fn transcribe(&self, audio_path: &Path) -> Result<TranscribeResponse, Self::Error> {
        self.send_transcribe_request(audio_path, Self::TRANSCRIBER_MODEL)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to transcribe audio"))
    }
}

impl Summarizer for OpenAIClient {
    const SUMMARIZER_MODEL: &'static str = "gpt-4o";
    type Error = SummarizationError;

    async fn summarize(&self, transcript: &str) -> Result<SummaryResponse, Self::Error> {
        let bpe = another_tiktoken_rs::cl100k_base()
            .map_err(|e| SummarizationError::Tokenizer(e.to_string()))?;
        let tokens = bpe.encode_with_special_tokens(transcript).len();
        if tokens > Self::CONTEXT_WINDOW_LIMIT {
            return Err(SummarizationError::ContextOverflow {
                tokens,
                limit: Self::CONTEXT_WINDOW_LIMIT,
            });
        }

        let user_content = format!("{}\nTranscript:\n\n{}", Self::USER_PROMPT, transcript);

        let response = self
            .send_completion_request(Self::SUMMARIZER_MODEL, user_content)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))?;

        let summary = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| SummarizationError::Api {
                status: 0,
                message: "No content in response".into(),
            })?;

        Ok(SummaryResponse { summary })
    }
}
