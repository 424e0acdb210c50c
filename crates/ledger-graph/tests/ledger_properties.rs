//! # Ledger Graph Property Tests
//!
//! ## Test Categories
//!
//! 1. **Scenarios** - Reference ledger, empty ledger, CSV end-to-end
//! 2. **Graph Laws** - Overwrite, uniqueness, degree bookkeeping
//! 3. **Analysis Laws** - Threshold strictness, ranking order, top-N prefix, determinism

use ledger_graph::algorithms::{degree_centrality, detect, top_n};
use ledger_graph::domain::invariants::{
    invariant_degree_consistency, invariant_edge_uniqueness, invariant_fraud_strictness,
    invariant_ranking_sorted,
};
use ledger_graph::{
    CsvTransferSource, DotPresenter, LedgerAnalysisApi, LedgerAnalysisService, TransactionGraph,
    Transfer, TransferRecord,
};
use proptest::prelude::*;
use std::io::Write;

// =============================================================================
// TEST HELPERS
// =============================================================================

const PARTICIPANTS: [&str; 6] = ["alice", "bob", "carol", "dave", "erin", "frank"];

fn build(records: &[TransferRecord]) -> TransactionGraph {
    TransactionGraph::from_records(records).unwrap()
}

fn record_strategy() -> impl Strategy<Value = TransferRecord> {
    (0usize..PARTICIPANTS.len(), 0usize..PARTICIPANTS.len(), 0u32..100_000).prop_map(
        |(s, r, cents)| TransferRecord::new(PARTICIPANTS[s], PARTICIPANTS[r], cents as f64 / 100.0),
    )
}

/// Records whose edges never form reciprocal pairs or self-loops
fn forward_record_strategy() -> impl Strategy<Value = TransferRecord> {
    (0usize..PARTICIPANTS.len() - 1, 1usize..PARTICIPANTS.len(), 0u32..100_000).prop_map(
        |(a, b, cents)| {
            let (s, r) = if a < b { (a, b) } else { (b - 1, a + 1) };
            TransferRecord::new(PARTICIPANTS[s], PARTICIPANTS[r], cents as f64 / 100.0)
        },
    )
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_reference_scenario() {
    let records = vec![
        TransferRecord::from_row(100.0, "A", "B"),
        TransferRecord::from_row(600.0, "B", "C"),
        TransferRecord::from_row(50.0, "C", "A"),
    ];
    let graph = build(&records);

    assert_eq!(
        graph.edges(),
        &[
            Transfer::new("A", "B", 100.0),
            Transfer::new("B", "C", 600.0),
            Transfer::new("C", "A", 50.0),
        ]
    );

    let flagged = detect(&graph, 500.0);
    assert_eq!(flagged, vec![Transfer::new("B", "C", 600.0)]);

    let ranking = top_n(&graph, 3);
    let names: Vec<&str> = ranking.iter().map(|s| s.participant.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert!(ranking.iter().all(|s| s.degree == 2 && s.score == 1.0));
}

#[test]
fn test_empty_ledger() {
    let graph = build(&[]);

    assert!(graph.edges().is_empty());
    assert!(detect(&graph, 500.0).is_empty());
    for n in [0, 1, 5, 100] {
        assert!(top_n(&graph, n).is_empty());
    }
}

#[test]
fn test_overwrite_law() {
    let graph = build(&[
        TransferRecord::from_row(10.0, "A", "B"),
        TransferRecord::from_row(20.0, "A", "B"),
    ]);

    assert_eq!(graph.edges(), &[Transfer::new("A", "B", 20.0)]);
}

#[test]
fn test_threshold_boundary() {
    let graph = build(&[
        TransferRecord::from_row(500.0, "A", "B"),
        TransferRecord::from_row(500.01, "C", "D"),
    ]);

    let flagged = detect(&graph, 500.0);

    assert_eq!(flagged, vec![Transfer::new("C", "D", 500.01)]);
}

#[test]
fn test_csv_to_dot_end_to_end() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "amount,sender,receiver").unwrap();
    writeln!(file, "100.00,A,B").unwrap();
    writeln!(file, "600.00,B,C").unwrap();
    writeln!(file, "50.00,C,A").unwrap();
    file.flush().unwrap();

    let service = LedgerAnalysisService::new();
    let mut source = CsvTransferSource::from_path(file.path());
    let mut presenter = DotPresenter::new(Vec::new());

    let report = service.run(&mut source, &mut presenter).unwrap();

    assert_eq!(report.fraud_edges, vec![Transfer::new("B", "C", 600.0)]);
    let dot = String::from_utf8(presenter.into_inner()).unwrap();
    assert!(dot.contains("\"B\" -> \"C\" [label=\"$600.00\", color=\"red\""));
}

#[test]
fn test_csv_parse_error_is_fatal() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "amount,sender,receiver").unwrap();
    writeln!(file, "100.00,A,B").unwrap();
    writeln!(file, "lots,B,C").unwrap();
    file.flush().unwrap();

    let service = LedgerAnalysisService::new();
    let mut source = CsvTransferSource::from_path(file.path());
    let mut presenter = DotPresenter::new(Vec::new());

    let result = service.run(&mut source, &mut presenter);

    assert!(result.is_err());
    assert!(presenter.into_inner().is_empty());
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_graph_invariants_hold(records in prop::collection::vec(record_strategy(), 0..40)) {
        let graph = build(&records);

        prop_assert!(invariant_edge_uniqueness(&graph));
        prop_assert!(invariant_degree_consistency(&graph));
    }

    #[test]
    fn prop_last_write_wins(records in prop::collection::vec(record_strategy(), 1..40)) {
        let graph = build(&records);

        for edge in graph.edges() {
            let last = records
                .iter()
                .rev()
                .find(|r| r.sender == edge.sender && r.receiver == edge.receiver)
                .unwrap();
            prop_assert_eq!(edge.amount, last.amount);
        }
    }

    #[test]
    fn prop_fraud_strictness(
        records in prop::collection::vec(record_strategy(), 0..40),
        threshold in 0u32..1000,
    ) {
        let graph = build(&records);
        let threshold = threshold as f64;

        let flagged = detect(&graph, threshold);

        prop_assert!(invariant_fraud_strictness(&graph, &flagged, threshold));
    }

    #[test]
    fn prop_ranking_sorted_and_prefix(records in prop::collection::vec(record_strategy(), 0..40)) {
        let graph = build(&records);

        for n in 0..graph.node_count() {
            let shorter = top_n(&graph, n);
            let longer = top_n(&graph, n + 1);

            prop_assert!(invariant_ranking_sorted(&longer));
            prop_assert_eq!(longer.len(), n + 1);
            prop_assert_eq!(&longer[..n], &shorter[..]);
        }
        prop_assert_eq!(top_n(&graph, graph.node_count() + 3).len(), graph.node_count());
    }

    #[test]
    fn prop_centrality_bounded(records in prop::collection::vec(forward_record_strategy(), 0..40)) {
        let graph = build(&records);

        for score in degree_centrality(&graph) {
            prop_assert!(score.score >= 0.0 && score.score <= 1.0);
            if graph.node_count() <= 1 {
                prop_assert_eq!(score.score, 0.0);
            }
        }
    }

    #[test]
    fn prop_deterministic(records in prop::collection::vec(record_strategy(), 0..40)) {
        let service = LedgerAnalysisService::new();

        let first = service.analyze(&records).unwrap();
        let second = service.analyze(&records).unwrap();

        prop_assert_eq!(first.edges, second.edges);
        prop_assert_eq!(first.fraud_edges, second.fraud_edges);
        prop_assert_eq!(first.ranking, second.ranking);
    }
}
