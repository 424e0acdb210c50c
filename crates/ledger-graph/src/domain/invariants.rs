//! Domain invariants for the ledger graph

use super::entities::{TransactionGraph, Transfer};
use super::value_objects::{CentralityScore, EdgeKey};
use std::collections::HashSet;

/// INVARIANT-1: Edge Uniqueness
/// At most one edge per ordered `(sender, receiver)` pair.
pub fn invariant_edge_uniqueness(graph: &TransactionGraph) -> bool {
    let mut seen: HashSet<EdgeKey> = HashSet::new();
    graph.edges().iter().all(|edge| seen.insert(edge.key()))
}

/// INVARIANT-2: Degree Consistency
/// Every edge contributes exactly one out-degree and one in-degree.
pub fn invariant_degree_consistency(graph: &TransactionGraph) -> bool {
    let total: usize = graph.nodes().iter().map(|n| graph.degree(n)).sum();
    total == 2 * graph.edge_count()
}

/// INVARIANT-3: Threshold Strictness
/// Every flagged edge strictly exceeds the threshold, and every edge that
/// strictly exceeds it is flagged, in graph order.
pub fn invariant_fraud_strictness(
    graph: &TransactionGraph,
    flagged: &[Transfer],
    threshold: f64,
) -> bool {
    let expected: Vec<&Transfer> = graph
        .edges()
        .iter()
        .filter(|edge| edge.amount > threshold)
        .collect();

    expected.len() == flagged.len() && expected.iter().zip(flagged).all(|(e, f)| *e == f)
}

/// INVARIANT-4: Ranking Order
/// Scores are non-increasing.
pub fn invariant_ranking_sorted(ranking: &[CentralityScore]) -> bool {
    ranking.windows(2).all(|pair| pair[0].score >= pair[1].score)
}
