//! TextRank sentence summarizer
//!
//! segment → similarity graph → power iteration → top-k selection.

use super::selector::TopKSelector;
use super::Summarizer;
use crate::graph::builder::GraphBuilder;
use crate::nlp::segmenter::SentenceSegmenter;
use crate::nlp::tokenizer::Tokenizer;
use crate::pagerank::power_iteration::PowerIterationRanker;
use crate::pagerank::RankResult;
use crate::types::{Sentence, SummarizerConfig, SummarizerKind, Summary};

/// Graph-based extractive summarizer
#[derive(Debug, Clone)]
pub struct TextRankSummarizer {
    segmenter: SentenceSegmenter,
    graph_builder: GraphBuilder,
    ranker: PowerIterationRanker,
    selector: TopKSelector,
}

impl Default for TextRankSummarizer {
    fn default() -> Self {
        Self::with_config(&SummarizerConfig::default())
    }
}

impl TextRankSummarizer {
    /// Create a summarizer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: &SummarizerConfig) -> Self {
        Self {
            segmenter: SentenceSegmenter::with_tokenizer(
                Tokenizer::new().with_min_length(config.min_token_length),
            ),
            graph_builder: GraphBuilder::new().with_parallel(config.parallel),
            ranker: PowerIterationRanker::new()
                .with_damping(config.damping)
                .with_max_iterations(config.max_iterations)
                .with_convergence_threshold(config.convergence_threshold)
                .with_parallel(config.parallel),
            selector: TopKSelector::new(config.sentences_k).with_source(SummarizerKind::TextRank),
        }
    }

    /// Set number of sentences to select
    pub fn with_sentences_k(mut self, k: usize) -> Self {
        self.selector = TopKSelector::new(k).with_source(SummarizerKind::TextRank);
        self
    }

    /// Score every sentence without selecting.
    ///
    /// Unlike [`summarize_sentences`](Summarizer::summarize_sentences), this
    /// always runs the ranker, even for short documents.
    pub fn rank_sentences(&self, sentences: &[Sentence]) -> RankResult {
        let graph = {
            trace_stage!("build_graph");
            self.graph_builder.build(sentences)
        };
        trace_stage!("rank");
        self.ranker.run(&graph)
    }
}

impl Summarizer for TextRankSummarizer {
    fn kind(&self) -> SummarizerKind {
        SummarizerKind::TextRank
    }

    fn segmenter(&self) -> &SentenceSegmenter {
        &self.segmenter
    }

    fn summarize_sentences(&self, sentences: &[Sentence]) -> Summary {
        if self.selector.bypasses(sentences.len()) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                sentences = sentences.len(),
                k = self.selector.k(),
                "document too short to rank, returning it whole"
            );
            return self.selector.select(sentences, &[]);
        }

        let ranking = self.rank_sentences(sentences);

        trace_stage!("select");
        self.selector.select(sentences, &ranking.scores)
    }
}
