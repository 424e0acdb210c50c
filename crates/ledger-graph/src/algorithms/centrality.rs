//! Degree centrality ranking
//!
//! Degree centrality = degree / (n - 1), where degree counts both incoming
//! and outgoing edges. Graphs with at most one participant score 0.

use crate::domain::entities::TransactionGraph;
use crate::domain::value_objects::CentralityScore;

/// Default number of participants reported
pub const DEFAULT_TOP_N: usize = 5;

/// Ranks participants by degree centrality
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CentralityRanker {
    top_n: usize,
}

impl CentralityRanker {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Top participants by score, at most `self.top_n()` of them
    pub fn rank(&self, graph: &TransactionGraph) -> Vec<CentralityScore> {
        top_n(graph, self.top_n)
    }
}

impl Default for CentralityRanker {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}

/// Degree centrality of every participant, in first-appearance order.
pub fn degree_centrality(graph: &TransactionGraph) -> Vec<CentralityScore> {
    let n = graph.node_count();
    let scale = if n > 1 { 1.0 / (n - 1) as f64 } else { 0.0 };

    graph
        .nodes()
        .iter()
        .map(|node| {
            let degree = graph.degree(node);
            CentralityScore::new(node.clone(), degree, degree as f64 * scale)
        })
        .collect()
}

/// The `min(n, node_count)` highest-scoring participants, score descending.
///
/// Ties keep first-appearance order (stable sort).
pub fn top_n(graph: &TransactionGraph, n: usize) -> Vec<CentralityScore> {
    if n == 0 {
        return Vec::new();
    }

    let mut scores = degree_centrality(graph);
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores.truncate(n);
    scores
}
