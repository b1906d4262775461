//! Top-k sentence selection
//!
//! Picks the k best-scoring sentences and emits them in document order.

use crate::pagerank::ranked_indices;
use crate::types::{Sentence, Summary, SummarizerKind};

/// Selects the highest-scoring sentences for a summary
#[derive(Debug, Clone)]
pub struct TopKSelector {
    /// Number of sentences to select
    k: usize,
    /// Strategy recorded on the produced summary
    source: SummarizerKind,
}

impl TopKSelector {
    /// Create a selector for `k` sentences
    pub fn new(k: usize) -> Self {
        Self {
            k,
            source: SummarizerKind::TextRank,
        }
    }

    /// Set the strategy recorded on produced summaries
    pub fn with_source(mut self, source: SummarizerKind) -> Self {
        self.source = source;
        self
    }

    /// Number of sentences this selector picks
    pub fn k(&self) -> usize {
        self.k
    }

    /// Whether a document of `n` sentences is returned whole
    pub fn bypasses(&self, n: usize) -> bool {
        n <= self.k
    }

    /// Select sentences by score.
    ///
    /// Documents with at most k sentences are returned whole and `scores`
    /// is not consulted. Otherwise the k highest scores win, equal scores
    /// going to the earlier sentence, and a missing score counts as 0.
    pub fn select(&self, sentences: &[Sentence], scores: &[f64]) -> Summary {
        let n = sentences.len();
        if n == 0 {
            return Summary::empty(self.source);
        }
        if self.bypasses(n) {
            return Summary::from_indices(sentences, (0..n).collect(), self.source);
        }

        let scores: Vec<f64> = (0..n)
            .map(|i| scores.get(i).copied().unwrap_or(0.0))
            .collect();

        let mut chosen: Vec<usize> = ranked_indices(&scores).into_iter().take(self.k).collect();
        chosen.sort_unstable();

        Summary::from_indices(sentences, chosen, self.source)
    }
}

/// Select the top `k` sentences by score, in document order
pub fn select(sentences: &[Sentence], scores: &[f64], k: usize) -> Summary {
    TopKSelector::new(k).select(sentences, scores)
}
