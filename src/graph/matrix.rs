//! Dense similarity matrix
//!
//! The sentence graph is complete (every pair has a weight, possibly zero), so
//! it is stored as one row-major `n * n` buffer allocated once. Row sums are
//! cached because the ranker divides by them on every iteration.

use rayon::prelude::*;

/// A symmetric weighted sentence graph in row-major layout
///
/// `weight(i, j) == weight(j, i)` holds exactly and the diagonal stays zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimilarityGraph {
    /// Number of nodes (sentences)
    num_nodes: usize,
    /// Edge weights, `weights[i * num_nodes + j]`
    weights: Vec<f64>,
    /// Total outgoing weight for each node
    out_sum: Vec<f64>,
}

impl SimilarityGraph {
    /// Create an `n`-node graph with every weight zero
    pub fn zeros(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            weights: vec![0.0; num_nodes * num_nodes],
            out_sum: vec![0.0; num_nodes],
        }
    }

    /// Assign one weight to both `(i, j)` and `(j, i)`.
    ///
    /// Self-loops are ignored; the diagonal stays zero.
    pub(crate) fn set_symmetric(&mut self, i: usize, j: usize, weight: f64) {
        if i == j {
            return;
        }
        let n = self.num_nodes;
        self.weights[i * n + j] = weight;
        self.weights[j * n + i] = weight;
    }

    /// Recompute the cached row sums
    pub(crate) fn compute_out_sums(&mut self) {
        let n = self.num_nodes;
        if n == 0 {
            return;
        }
        self.out_sum = self.weights.chunks(n).map(|row| row.iter().sum::<f64>()).collect();
    }

    /// Recompute the cached row sums, one rayon task per row.
    ///
    /// Each row is still summed sequentially, so the result is identical to
    /// [`compute_out_sums`](Self::compute_out_sums).
    pub(crate) fn compute_out_sums_parallel(&mut self) {
        let n = self.num_nodes;
        if n == 0 {
            return;
        }
        self.out_sum = self
            .weights
            .par_chunks(n)
            .map(|row| row.iter().sum::<f64>())
            .collect();
    }

    /// Number of nodes
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Weight of the edge between `i` and `j`
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.num_nodes + j]
    }

    /// All weights of row `i`
    pub fn row(&self, i: usize) -> &[f64] {
        let n = self.num_nodes;
        &self.weights[i * n..(i + 1) * n]
    }

    /// Total outgoing weight of node `j`
    pub fn out_sum(&self, j: usize) -> f64 {
        self.out_sum[j]
    }

    /// Total outgoing weight of every node
    pub fn out_sums(&self) -> &[f64] {
        &self.out_sum
    }

    /// A node with no similarity to any other node
    pub fn is_isolated(&self, j: usize) -> bool {
        self.out_sum[j] == 0.0
    }

    /// Indices of all isolated nodes
    pub fn isolated_nodes(&self) -> Vec<usize> {
        (0..self.num_nodes).filter(|&j| self.is_isolated(j)).collect()
    }

    /// Number of undirected edges with a non-zero weight
    pub fn num_edges(&self) -> usize {
        (0..self.num_nodes)
            .map(|i| self.row(i)[i + 1..].iter().filter(|&&w| w != 0.0).count())
            .sum()
    }

    /// Exact (bitwise) symmetry check
    pub fn is_symmetric(&self) -> bool {
        let n = self.num_nodes;
        (0..n).all(|i| {
            (i + 1..n).all(|j| self.weight(i, j).to_bits() == self.weight(j, i).to_bits())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let graph = SimilarityGraph::zeros(3);
        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_edges(), 0);
        assert!(graph.is_symmetric());
    }

    #[test]
    fn test_set_symmetric() {
        let mut graph = SimilarityGraph::zeros(3);
        graph.set_symmetric(0, 2, 0.5);
        graph.compute_out_sums();

        assert_eq!(graph.weight(0, 2), 0.5);
        assert_eq!(graph.weight(2, 0), 0.5);
        assert_eq!(graph.num_edges(), 1);
        assert_eq!(graph.row(2), &[0.5, 0.0, 0.0]);
    }

    #[test]
    fn test_self_loops_ignored() {
        let mut graph = SimilarityGraph::zeros(2);
        graph.set_symmetric(1, 1, 0.9);
        assert_eq!(graph.weight(1, 1), 0.0);
    }

    #[test]
    fn test_out_sums_and_isolation() {
        let mut graph = SimilarityGraph::zeros(4);
        graph.set_symmetric(0, 1, 0.25);
        graph.set_symmetric(0, 2, 0.5);
        graph.compute_out_sums();

        assert_eq!(graph.out_sum(0), 0.75);
        assert_eq!(graph.out_sum(1), 0.25);
        assert_eq!(graph.out_sum(2), 0.5);
        assert!(graph.is_isolated(3));
        assert_eq!(graph.isolated_nodes(), vec![3]);
    }

    #[test]
    fn test_parallel_out_sums_match() {
        let mut graph = SimilarityGraph::zeros(5);
        for i in 0..5 {
            for j in (i + 1)..5 {
                graph.set_symmetric(i, j, 1.0 / (1 + i + j) as f64);
            }
        }
        let mut parallel = graph.clone();
        graph.compute_out_sums();
        parallel.compute_out_sums_parallel();

        assert_eq!(graph, parallel);
    }

    #[test]
    fn test_empty_graph() {
        let mut graph = SimilarityGraph::default();
        graph.compute_out_sums();
        assert!(graph.is_empty());
        assert!(graph.out_sums().is_empty());
        assert!(graph.isolated_nodes().is_empty());
    }
}
