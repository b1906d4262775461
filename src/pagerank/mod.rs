//! PageRank over the sentence similarity graph
//!
//! This module provides the fixed-iteration power method used to score
//! sentences, and the deterministic ordering of the resulting scores.

pub mod power_iteration;

use std::cmp::Ordering;

/// Result of a ranking run
#[derive(Debug, Clone, PartialEq)]
pub struct RankResult {
    /// Scores for each node (indexed by sentence index)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// L1 distance between the last two score vectors
    pub delta: f64,
    /// Whether an early-stop threshold was reached
    pub converged: bool,
}

impl RankResult {
    /// Create a new rank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Get top N nodes by score, ties broken by ascending index
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        ranked_indices(&self.scores)
            .into_iter()
            .take(n)
            .map(|i| (i, self.scores[i]))
            .collect()
    }

    /// Get the score for a specific node
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }

    /// Sum of all scores
    pub fn total_mass(&self) -> f64 {
        self.scores.iter().sum()
    }
}

/// Order two `(index, score)` pairs: higher score first, then lower index.
pub fn rank_cmp(a: (usize, f64), b: (usize, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Indices of `scores` from highest to lowest score.
///
/// Equal scores keep ascending index order, so the ranking is total and
/// reproducible.
pub fn ranked_indices(scores: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| rank_cmp((a, scores[a]), (b, scores[b])));
    indices
}
