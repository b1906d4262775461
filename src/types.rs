//! Core types for textrank_summarizer
//!
//! This module defines the fundamental data structures used throughout the library,
//! including token sets, sentences, summaries, and configuration.

use crate::errors::{Result, TextRankError};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Token Set
// ============================================================================

/// The set of lowercase word tokens of one sentence.
///
/// Duplicates collapse on insertion. Only membership and size are observable,
/// so iteration order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: FxHashSet<String>,
}

impl TokenSet {
    /// Create an empty token set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token, returning `false` if it was already present
    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        self.tokens.insert(token.into())
    }

    /// Check whether the set contains a token
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the tokens (arbitrary order)
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(|s| s.as_str())
    }

    /// Size of the intersection with another set.
    ///
    /// Probes the larger set with the members of the smaller one.
    pub fn intersection_len(&self, other: &TokenSet) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .tokens
            .iter()
            .filter(|t| large.tokens.contains(t.as_str()))
            .count()
    }
}

impl<S: Into<String>> FromIterator<S> for TokenSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TokenSet::new();
        for token in iter {
            set.insert(token);
        }
        set
    }
}

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input text
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// The trimmed sentence text
    pub text: String,
    /// Start byte offset of the trimmed text in the original input
    pub start: usize,
    /// End byte offset (exclusive) of the trimmed text in the original input
    pub end: usize,
    /// Sentence index within the document
    pub index: usize,
    /// Tokens derived from the sentence text
    pub tokens: TokenSet,
}

impl Sentence {
    /// Create a new sentence with an empty token set
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
            tokens: TokenSet::new(),
        }
    }

    /// Builder method: attach the sentence's token set
    pub fn with_tokens(mut self, tokens: TokenSet) -> Self {
        self.tokens = tokens;
        self
    }
}

// ============================================================================
// Summarizer Kind
// ============================================================================

/// Which summarization strategy produces a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SummarizerKind {
    /// Graph-based sentence ranking
    #[default]
    #[serde(rename = "textrank")]
    TextRank,
    /// The first k sentences of the document
    #[serde(rename = "lead")]
    Lead,
}

impl SummarizerKind {
    /// Stable lowercase name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            SummarizerKind::TextRank => "textrank",
            SummarizerKind::Lead => "lead",
        }
    }
}

impl fmt::Display for SummarizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SummarizerKind {
    type Err = TextRankError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "textrank" | "text_rank" => Ok(SummarizerKind::TextRank),
            "lead" | "first" => Ok(SummarizerKind::Lead),
            other => Err(TextRankError::invalid_config(format!(
                "unknown summarizer strategy '{}', use 'textrank' or 'lead'",
                other
            ))),
        }
    }
}

// ============================================================================
// Summary
// ============================================================================

/// An extractive summary: selected sentences in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentence texts joined by single spaces
    pub text: String,
    /// Indices of the selected sentences, ascending
    pub indices: Vec<usize>,
    /// Strategy that produced the summary
    pub source: SummarizerKind,
}

impl Summary {
    /// An empty summary
    pub fn empty(source: SummarizerKind) -> Self {
        Self {
            text: String::new(),
            indices: Vec::new(),
            source,
        }
    }

    /// Build a summary from ascending sentence indices
    pub fn from_indices(sentences: &[Sentence], indices: Vec<usize>, source: SummarizerKind) -> Self {
        let text = indices
            .iter()
            .filter_map(|&i| sentences.get(i))
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            text,
            indices,
            source,
        }
    }

    /// Number of selected sentences
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Check if nothing was selected
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for summarization
///
/// Every field has a default, so partial JSON documents deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Number of sentences in the summary
    pub sentences_k: usize,
    /// Number of power iterations
    pub max_iterations: usize,
    /// Damping factor for PageRank (typically 0.85)
    pub damping: f64,
    /// Stop early once the L1 delta drops to this value (None = always run
    /// `max_iterations`)
    pub convergence_threshold: Option<f64>,
    /// Summarization strategy
    pub strategy: SummarizerKind,
    /// Use rayon for the graph build and score updates
    pub parallel: bool,
    /// Minimum token length in characters
    pub min_token_length: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            sentences_k: 3,
            max_iterations: 50,
            damping: 0.85,
            convergence_threshold: None,
            strategy: SummarizerKind::TextRank,
            parallel: false,
            min_token_length: 1,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SummarizerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(TextRankError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(TextRankError::invalid_config("max_iterations must be > 0"));
        }

        if let Some(threshold) = self.convergence_threshold {
            if !threshold.is_finite() || threshold <= 0.0 {
                return Err(TextRankError::invalid_config(format!(
                    "convergence_threshold must be a positive number, got {}",
                    threshold
                )));
            }
        }

        if self.min_token_length == 0 {
            return Err(TextRankError::invalid_config(
                "min_token_length must be > 0",
            ));
        }

        Ok(())
    }

    /// Builder method: set the number of summary sentences
    pub fn with_sentences_k(mut self, sentences_k: usize) -> Self {
        self.sentences_k = sentences_k;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: enable early stopping at the given L1 delta
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = Some(threshold);
        self
    }

    /// Builder method: set the summarization strategy
    pub fn with_strategy(mut self, strategy: SummarizerKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builder method: toggle rayon parallelism
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builder method: set minimum token length
    pub fn with_min_token_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }
}

// ============================================================================
// Request
// ============================================================================

/// A JSON summarization request: the text plus an optional config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Plain text to summarize
    pub text: String,
    /// Per-request configuration (defaults when absent)
    #[serde(default)]
    pub config: Option<SummarizerConfig>,
}

impl SummaryRequest {
    /// The effective configuration of this request
    pub fn effective_config(&self) -> SummarizerConfig {
        self.config.clone().unwrap_or_default()
    }
}
