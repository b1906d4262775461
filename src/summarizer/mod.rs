//! Summarization strategies
//!
//! Provides extractive summarization through the [`Summarizer`] trait and its
//! two implementations: graph-based TextRank ranking and a lead-k baseline.
//! [`SummarizerEngine`] picks one of them from a [`SummarizerConfig`].

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a summarizer stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarizer_stage", stage = $name).entered();
    };
}

pub mod lead;
pub mod selector;
pub mod textrank;

use crate::errors::Result;
use crate::nlp::segmenter::SentenceSegmenter;
use crate::types::{Sentence, SummarizerConfig, SummarizerKind, Summary, SummaryRequest};
use lead::LeadSummarizer;
use rayon::prelude::*;
use textrank::TextRankSummarizer;

/// An extractive summarization strategy
pub trait Summarizer {
    /// Which strategy this is
    fn kind(&self) -> SummarizerKind;

    /// The segmenter used to split input text
    fn segmenter(&self) -> &SentenceSegmenter;

    /// Summarize already segmented sentences
    fn summarize_sentences(&self, sentences: &[Sentence]) -> Summary;

    /// Segment and summarize plain text
    fn summarize(&self, text: &str) -> Summary {
        let sentences = {
            trace_stage!("segment");
            self.segmenter().segment(text)
        };
        self.summarize_sentences(&sentences)
    }
}

/// A summarizer selected by configuration
#[derive(Debug, Clone)]
pub enum SummarizerEngine {
    /// Graph-based sentence ranking
    TextRank(TextRankSummarizer),
    /// First k sentences
    Lead(LeadSummarizer),
}

impl SummarizerEngine {
    /// Build the strategy named by `config.strategy`
    pub fn from_config(config: &SummarizerConfig) -> Self {
        match config.strategy {
            SummarizerKind::TextRank => Self::TextRank(TextRankSummarizer::with_config(config)),
            SummarizerKind::Lead => Self::Lead(LeadSummarizer::with_config(config)),
        }
    }
}

impl Default for SummarizerEngine {
    fn default() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }
}

impl Summarizer for SummarizerEngine {
    fn kind(&self) -> SummarizerKind {
        match self {
            Self::TextRank(s) => s.kind(),
            Self::Lead(s) => s.kind(),
        }
    }

    fn segmenter(&self) -> &SentenceSegmenter {
        match self {
            Self::TextRank(s) => s.segmenter(),
            Self::Lead(s) => s.segmenter(),
        }
    }

    fn summarize_sentences(&self, sentences: &[Sentence]) -> Summary {
        match self {
            Self::TextRank(s) => s.summarize_sentences(sentences),
            Self::Lead(s) => s.summarize_sentences(sentences),
        }
    }
}

/// Summarize many documents with one configuration.
///
/// Documents are processed in parallel; the output keeps input order and each
/// summary equals what a single call would return.
pub fn summarize_batch<S>(texts: &[S], config: &SummarizerConfig) -> Vec<Summary>
where
    S: AsRef<str> + Sync,
{
    let engine = SummarizerEngine::from_config(config);
    texts
        .par_iter()
        .map(|text| engine.summarize(text.as_ref()))
        .collect()
}

/// Validate a request's configuration and summarize its text
pub fn process_request(request: &SummaryRequest) -> Result<Summary> {
    let config = request.effective_config();
    config.validate()?;
    Ok(SummarizerEngine::from_config(&config).summarize(&request.text))
}

/// Summarize a JSON request `{"text": ..., "config": {...}}`.
///
/// Returns the summary serialized as JSON.
pub fn process_request_json(json: &str) -> Result<String> {
    let request: SummaryRequest = serde_json::from_str(json)?;
    let summary = process_request(&request)?;
    Ok(serde_json::to_string(&summary)?)
}

/// Summarize a JSON array of requests, returning a JSON array of summaries.
///
/// Fails as a whole if any request carries an invalid configuration.
pub fn process_batch_json(json: &str) -> Result<String> {
    let requests: Vec<SummaryRequest> = serde_json::from_str(json)?;
    let summaries = requests
        .par_iter()
        .map(process_request)
        .collect::<Result<Vec<_>>>()?;
    Ok(serde_json::to_string(&summaries)?)
}
