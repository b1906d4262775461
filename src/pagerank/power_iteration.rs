//! Fixed-iteration PageRank power method
//!
//! Each iteration computes, for every sentence `i`,
//!
//! ```text
//! new[i] = (1 - d) / n + d * Σ_j (w[i][j] / out_sum[j]) * score[j]
//! ```
//!
//! over all `j != i` with `out_sum[j] != 0`. Isolated sentences contribute
//! nothing. The whole vector is replaced at once (Jacobi update).

use super::RankResult;
use crate::graph::matrix::SimilarityGraph;
use rayon::prelude::*;

/// Power-iteration ranker for the sentence graph
#[derive(Debug, Clone)]
pub struct PowerIterationRanker {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Number of iterations to run
    pub max_iterations: usize,
    /// Optional early stop once the L1 delta falls to this value
    pub convergence_threshold: Option<f64>,
    /// Update rows on the rayon pool
    pub parallel: bool,
}

impl Default for PowerIterationRanker {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 50,
            convergence_threshold: None,
            parallel: false,
        }
    }
}

impl PowerIterationRanker {
    /// Create a new ranker with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the number of iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Stop early once the L1 delta is at most `threshold`
    pub fn with_convergence_threshold(mut self, threshold: Option<f64>) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Toggle row-parallel updates
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The uniform starting vector `1/n`
    pub fn initial_scores(n: usize) -> Vec<f64> {
        if n == 0 {
            return Vec::new();
        }
        vec![1.0 / n as f64; n]
    }

    /// Run the ranking.
    ///
    /// Without a convergence threshold this always performs exactly
    /// `max_iterations` iterations.
    pub fn run(&self, graph: &SimilarityGraph) -> RankResult {
        let n = graph.num_nodes();
        if n == 0 {
            return RankResult::new(Vec::new(), 0, 0.0, true);
        }

        let mut scores = Self::initial_scores(n);
        let mut new_scores = vec![0.0; n];
        let mut iterations = 0;
        let mut delta = f64::INFINITY;
        let mut converged = false;

        while iterations < self.max_iterations {
            iterations += 1;
            self.step_into(graph, &scores, &mut new_scores);

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);

            if let Some(threshold) = self.convergence_threshold {
                if delta <= threshold {
                    converged = true;
                    #[cfg(feature = "tracing")]
                    tracing::debug!(iterations, delta, "power iteration stopped early");
                    break;
                }
            }
        }

        RankResult::new(scores, iterations, delta, converged)
    }

    /// Perform a single iteration, returning the new score vector
    pub fn step(&self, graph: &SimilarityGraph, scores: &[f64]) -> Vec<f64> {
        let mut new_scores = vec![0.0; graph.num_nodes()];
        self.step_into(graph, scores, &mut new_scores);
        new_scores
    }

    fn step_into(&self, graph: &SimilarityGraph, scores: &[f64], new_scores: &mut [f64]) {
        let n = graph.num_nodes();
        let teleport = (1.0 - self.damping) / n as f64;
        let out_sum = graph.out_sums();

        // Each row sums over ascending j, sequentially, in both modes
        let row_score = |i: usize| -> f64 {
            let row = graph.row(i);
            let mut acc = teleport;
            for j in 0..n {
                if j == i || out_sum[j] == 0.0 {
                    continue;
                }
                acc += self.damping * (row[j] / out_sum[j]) * scores[j];
            }
            acc
        };

        if self.parallel {
            new_scores
                .par_iter_mut()
                .enumerate()
                .for_each(|(i, score)| *score = row_score(i));
        } else {
            for (i, score) in new_scores.iter_mut().enumerate() {
                *score = row_score(i);
            }
        }
    }
}
