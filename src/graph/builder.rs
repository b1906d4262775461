//! Similarity graph construction
//!
//! Every unordered sentence pair gets the normalized token overlap
//!
//! ```text
//! |A ∩ B| / (sqrt(|A|) * sqrt(|B|))
//! ```
//!
//! computed once and written to both `(i, j)` and `(j, i)`.

use super::matrix::SimilarityGraph;
use crate::types::{Sentence, TokenSet};
use rayon::prelude::*;

/// Normalized token overlap between two token sets.
///
/// Zero when either set is empty or they share no token.
pub fn similarity(a: &TokenSet, b: &TokenSet) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let common = a.intersection_len(b);
    if common == 0 {
        return 0.0;
    }
    let weight = common as f64 / ((a.len() as f64).sqrt() * (b.len() as f64).sqrt());
    // sqrt(n) * sqrt(n) can round below n for identical sets
    weight.min(1.0)
}

/// Builds a [`SimilarityGraph`] from tokenized sentences
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    /// Compute rows on the rayon pool
    parallel: bool,
}

impl GraphBuilder {
    /// Create a sequential graph builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle rayon parallelism
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Build the graph over the sentences' token sets
    pub fn build(&self, sentences: &[Sentence]) -> SimilarityGraph {
        let token_sets: Vec<&TokenSet> = sentences.iter().map(|s| &s.tokens).collect();
        self.build_from_token_sets(&token_sets)
    }

    /// Build the graph directly from token sets
    pub fn build_from_token_sets(&self, token_sets: &[&TokenSet]) -> SimilarityGraph {
        if self.parallel {
            build_parallel(token_sets)
        } else {
            build_sequential(token_sets)
        }
    }
}

/// Build a similarity graph on the current thread
pub fn build_graph(sentences: &[Sentence]) -> SimilarityGraph {
    GraphBuilder::new().build(sentences)
}

/// Build a similarity graph with rows computed in parallel.
///
/// Produces exactly the same graph as [`build_graph`].
pub fn build_graph_parallel(sentences: &[Sentence]) -> SimilarityGraph {
    GraphBuilder::new().with_parallel(true).build(sentences)
}

fn build_sequential(token_sets: &[&TokenSet]) -> SimilarityGraph {
    let n = token_sets.len();
    let mut graph = SimilarityGraph::zeros(n);

    for i in 0..n {
        for j in (i + 1)..n {
            graph.set_symmetric(i, j, similarity(token_sets[i], token_sets[j]));
        }
    }

    graph.compute_out_sums();
    graph
}

fn build_parallel(token_sets: &[&TokenSet]) -> SimilarityGraph {
    let n = token_sets.len();

    // Upper triangle, one row per task
    let upper: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|i| {
            ((i + 1)..n)
                .map(|j| similarity(token_sets[i], token_sets[j]))
                .collect()
        })
        .collect();

    let mut graph = SimilarityGraph::zeros(n);
    for (i, row) in upper.into_iter().enumerate() {
        for (offset, weight) in row.into_iter().enumerate() {
            graph.set_symmetric(i, i + 1 + offset, weight);
        }
    }

    graph.compute_out_sums_parallel();
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::segmenter::segment;

    fn set(tokens: &[&str]) -> TokenSet {
        tokens.iter().copied().collect()
    }

    #[test]
    fn test_similarity_values() {
        let a = set(&["machine", "learning", "is", "fun"]);
        let b = set(&["deep", "learning", "is", "hard"]);

        // 2 shared tokens over sqrt(4) * sqrt(4)
        assert!((similarity(&a, &b) - 0.5).abs() < 1e-12);
        assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    #[test]
    fn test_similarity_disjoint_and_empty() {
        let a = set(&["alpha", "beta"]);
        let b = set(&["gamma"]);
        let empty = TokenSet::new();

        assert_eq!(similarity(&a, &b), 0.0);
        assert_eq!(similarity(&a, &empty), 0.0);
        assert_eq!(similarity(&empty, &empty), 0.0);
    }

    #[test]
    fn test_similarity_identical_sets_capped() {
        for size in 1..50 {
            let tokens: Vec<String> = (0..size).map(|i| format!("t{}", i)).collect();
            let a: TokenSet = tokens.iter().cloned().collect();
            let w = similarity(&a, &a);
            assert!(w <= 1.0);
            assert!((w - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_build_graph_invariants() {
        let sentences = segment(
            "The cat sat on the mat. The dog sat on the log. Birds fly south. \
             A cat and a dog met.",
        );
        let graph = build_graph(&sentences);

        assert_eq!(graph.num_nodes(), 4);
        assert!(graph.is_symmetric());
        for i in 0..4 {
            assert_eq!(graph.weight(i, i), 0.0);
            for j in 0..4 {
                let w = graph.weight(i, j);
                assert!((0.0..=1.0).contains(&w));
            }
        }

        // "Birds fly south." shares nothing with the rest
        assert!(graph.is_isolated(2));
        assert!(graph.weight(0, 1) > 0.0);
    }

    #[test]
    fn test_out_sum_matches_column_sum() {
        let sentences = segment("a b c. b c d. c d e. x y z.");
        let graph = build_graph(&sentences);

        for j in 0..graph.num_nodes() {
            let column: f64 = (0..graph.num_nodes()).map(|i| graph.weight(i, j)).sum();
            assert!((graph.out_sum(j) - column).abs() < 1e-12);
        }
    }

    #[test]
    fn test_empty_sentence_has_zero_weights() {
        let sentences = vec![
            Sentence::new("!!!", 0, 3, 0),
            Sentence::new("cat", 4, 7, 1).with_tokens(set(&["cat"])),
        ];
        let graph = build_graph(&sentences);

        assert_eq!(graph.weight(0, 1), 0.0);
        assert_eq!(graph.isolated_nodes(), vec![0, 1]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let text = "Rust is fast. Rust is safe. Memory safety matters. \
                    Safety and speed are goals. Fast code is good code. \
                    The borrow checker enforces safety.";
        let sentences = segment(text);

        let sequential = build_graph(&sentences);
        let parallel = build_graph_parallel(&sentences);

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_no_sentences() {
        let graph = build_graph(&[]);
        assert!(graph.is_empty());
        assert!(build_graph_parallel(&[]).is_empty());
    }
}
