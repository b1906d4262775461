//! Lead-k summarizer: the first k sentences of the document.

use super::Summarizer;
use crate::nlp::segmenter::SentenceSegmenter;
use crate::types::{Sentence, SummarizerConfig, SummarizerKind, Summary};

/// Extractive summarizer that keeps the opening sentences
#[derive(Debug, Clone)]
pub struct LeadSummarizer {
    segmenter: SentenceSegmenter,
    sentences_k: usize,
}

impl Default for LeadSummarizer {
    fn default() -> Self {
        Self::with_config(&SummarizerConfig::default())
    }
}

impl LeadSummarizer {
    /// Create a summarizer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: &SummarizerConfig) -> Self {
        Self {
            segmenter: SentenceSegmenter::new(),
            sentences_k: config.sentences_k,
        }
    }

    /// Set number of sentences to select
    pub fn with_sentences_k(mut self, k: usize) -> Self {
        self.sentences_k = k;
        self
    }
}

impl Summarizer for LeadSummarizer {
    fn kind(&self) -> SummarizerKind {
        SummarizerKind::Lead
    }

    fn segmenter(&self) -> &SentenceSegmenter {
        &self.segmenter
    }

    fn summarize_sentences(&self, sentences: &[Sentence]) -> Summary {
        let n = sentences.len().min(self.sentences_k);
        Summary::from_indices(sentences, (0..n).collect(), SummarizerKind::Lead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_k_sentences() {
        let summary = LeadSummarizer::new()
            .with_sentences_k(2)
            .summarize("Alpha. Beta. Gamma. Delta.");

        assert_eq!(summary.text, "Alpha. Beta.");
        assert_eq!(summary.indices, vec![0, 1]);
        assert_eq!(summary.source, SummarizerKind::Lead);
    }

    #[test]
    fn test_short_document() {
        let summary = LeadSummarizer::new().summarize("Only one sentence here");
        assert_eq!(summary.text, "Only one sentence here");
    }

    #[test]
    fn test_empty() {
        assert!(LeadSummarizer::new().summarize("").is_empty());
    }
}
