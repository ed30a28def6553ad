use std::path::PathBuf;

use crate::{
    config::PipelineConfig,
    media::{AudioTranscoder, MediaFetcher},
    MeetingPipeline, Summarizer, Transcriber,
};

pub struct MeetingPipelineBuilder<F = (), X = (), T = (), S = ()> {
    workdir: PathBuf,
    fetcher: F,
    transcoder: X,
    transcriber: T,
    summarizer: S,
    config: PipelineConfig,
}

impl MeetingPipelineBuilder {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            fetcher: (),
            transcoder: (),
            transcriber: (),
            summarizer: (),
            config: PipelineConfig::default(),
        }
    }
}

impl<F, X, T, S> MeetingPipelineBuilder<F, X, T, S> {
    pub fn fetcher<F2: MediaFetcher + Send + Sync + 'static>(
        self,
        fetcher: F2,
    ) -> MeetingPipelineBuilder<F2, X, T, S> {
        MeetingPipelineBuilder {
            workdir: self.workdir,
            fetcher,
            transcoder: self.transcoder,
            transcriber: self.transcriber,
            summarizer: self.summarizer,
            config: self.config,
        }
    }

    pub fn transcoder<X2: AudioTranscoder + Send + Sync + 'static>(
        self,
        transcoder: X2,
    ) -> MeetingPipelineBuilder<F, X2, T, S> {
        MeetingPipelineBuilder {
            workdir: self.workdir,
            fetcher: self.fetcher,
            transcoder,
            transcriber: self.transcriber,
            summarizer: self.summarizer,
            config: self.config,
        }
    }

    pub fn transcriber<T2: Transcriber + Send + Sync + 'static>(
        self,
        transcriber: T2,
    ) -> MeetingPipelineBuilder<F, X, T2, S> {
        MeetingPipelineBuilder {
            workdir: self.workdir,
            fetcher: self.fetcher,
            transcoder: self.transcoder,
            transcriber,
            summarizer: self.summarizer,
            config: self.config,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> MeetingPipelineBuilder<F, X, T, S2> {
        MeetingPipelineBuilder {
            workdir: self.workdir,
            fetcher: self.fetcher,
            transcoder: self.transcoder,
            transcriber: self.transcriber,
            summarizer,
            config: self.config,
        }
    }

    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }
}

impl<F, X, T, S> MeetingPipelineBuilder<F, X, T, S>
where
    F: MediaFetcher + Send + Sync + 'static,
    X: AudioTranscoder + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub fn build(self) -> MeetingPipeline<F, X, T, S> {
        MeetingPipeline {
            workdir: self.workdir,
            fetcher: self.fetcher,
            transcoder: self.transcoder,
            transcriber: self.transcriber,
            summarizer: self.summarizer,
            config: self.config,
        }
    }
}
