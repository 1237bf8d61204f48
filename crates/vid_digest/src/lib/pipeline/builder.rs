use std::path::PathBuf;

use crate::{
    media::{AudioExtractor, SpeechTranscriber},
    summarize::{ChunkSummarizer, LsaSummarizer},
    yt::CaptionFetcher,
    SummaryPipeline,
};

/// Typestate builder: `build()` only exists once all four collaborators are
/// provided.
pub struct SummaryPipelineBuilder<C = (), G = (), A = (), T = ()> {
    workdir: PathBuf,
    captions: C,
    generative: G,
    audio: A,
    speech: T,
    extractive: LsaSummarizer,
}

impl SummaryPipelineBuilder {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            captions: (),
            generative: (),
            audio: (),
            speech: (),
            extractive: LsaSummarizer::new(),
        }
    }
}

impl<C, G, A, T> SummaryPipelineBuilder<C, G, A, T> {
    pub fn captions<C2: CaptionFetcher + Send + Sync + 'static>(
        self,
        captions: C2,
    ) -> SummaryPipelineBuilder<C2, G, A, T> {
        SummaryPipelineBuilder {
            workdir: self.workdir,
            captions,
            generative: self.generative,
            audio: self.audio,
            speech: self.speech,
            extractive: self.extractive,
        }
    }

    pub fn generative<G2: ChunkSummarizer + Send + Sync + 'static>(
        self,
        generative: G2,
    ) -> SummaryPipelineBuilder<C, G2, A, T> {
        SummaryPipelineBuilder {
            workdir: self.workdir,
            captions: self.captions,
            generative,
            audio: self.audio,
            speech: self.speech,
            extractive: self.extractive,
        }
    }

    pub fn audio<A2: AudioExtractor + Send + Sync + 'static>(
        self,
        audio: A2,
    ) -> SummaryPipelineBuilder<C, G, A2, T> {
        SummaryPipelineBuilder {
            workdir: self.workdir,
            captions: self.captions,
            generative: self.generative,
            audio,
            speech: self.speech,
            extractive: self.extractive,
        }
    }

    pub fn speech<T2: SpeechTranscriber + Send + Sync + 'static>(
        self,
        speech: T2,
    ) -> SummaryPipelineBuilder<C, G, A, T2> {
        SummaryPipelineBuilder {
            workdir: self.workdir,
            captions: self.captions,
            generative: self.generative,
            audio: self.audio,
            speech,
            extractive: self.extractive,
        }
    }

    pub fn extractive(mut self, extractive: LsaSummarizer) -> Self {
        self.extractive = extractive;
        self
    }
}

impl<C, G, A, T> SummaryPipelineBuilder<C, G, A, T>
where
    C: CaptionFetcher + Send + Sync + 'static,
    G: ChunkSummarizer + Send + Sync + 'static,
    A: AudioExtractor + Send + Sync + 'static,
    T: SpeechTranscriber + Send + Sync + 'static,
{
    pub fn build(self) -> SummaryPipeline<C, G, A, T> {
        SummaryPipeline {
            captions: self.captions,
            generative: self.generative,
            audio: self.audio,
            speech: self.speech,
            extractive: self.extractive,
            workdir: self.workdir,
        }
    }
}
