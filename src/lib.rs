//! # textrank_summarizer
//!
//! Extractive text summarization with a TextRank sentence graph.
//!
//! Text is split into sentences, every pair of sentences is weighted by
//! normalized token overlap, a fixed number of PageRank iterations scores the
//! sentences, and the best `k` are returned in document order.
//!
//! ## Features
//!
//! - **Total**: every input string yields a summary; nothing panics or errors
//! - **Deterministic**: identical input and configuration give identical output
//! - **Parallel**: optional rayon graph building, ranking and batch processing
//!   with bit-identical results
//! - **Python bindings**: behind the `python` feature via PyO3
//!
//! ```
//! let summary = textrank_summarizer::summarize("One sentence only", 3);
//! assert_eq!(summary, "One sentence only");
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod summarizer;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use errors::{Result, TextRankError};
pub use types::{Sentence, SummarizerConfig, SummarizerKind, Summary, SummaryRequest, TokenSet};

// Re-export main functionality
pub use graph::{builder::GraphBuilder, matrix::SimilarityGraph};
pub use nlp::{segmenter::SentenceSegmenter, tokenizer::Tokenizer};
pub use pagerank::{power_iteration::PowerIterationRanker, RankResult};
pub use summarizer::{
    lead::LeadSummarizer, selector::TopKSelector, summarize_batch, textrank::TextRankSummarizer,
    Summarizer, SummarizerEngine,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarize `text` down to `sentences_k` sentences with default settings
pub fn summarize(text: &str, sentences_k: usize) -> String {
    let config = SummarizerConfig::default().with_sentences_k(sentences_k);
    summarize_with_config(text, &config).text
}

/// Summarize `text` with an explicit configuration.
///
/// The configuration is used as given; call
/// [`SummarizerConfig::validate`] first when it comes from an untrusted
/// source.
pub fn summarize_with_config(text: &str, config: &SummarizerConfig) -> Summary {
    SummarizerEngine::from_config(config).summarize(text)
}

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
