//! Ledger Analysis Service
//!
//! Main service implementing LedgerAnalysisApi.

use crate::algorithms::{CentralityRanker, FraudDetector};
use crate::config::AuditConfig;
use crate::domain::entities::{TransactionGraph, Transfer};
use crate::domain::errors::{AnalysisError, GraphError};
use crate::domain::invariants::{invariant_degree_consistency, invariant_edge_uniqueness};
use crate::domain::value_objects::{CentralityScore, TransferRecord};
use crate::ports::inbound::LedgerAnalysisApi;
use crate::ports::outbound::{GraphPresenter, TransferSource};
use serde::Serialize;
use tracing::{debug, info};

/// Result of one analysis session
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    #[serde(skip)]
    pub graph: TransactionGraph,
    /// Full edge set in construction order
    pub edges: Vec<Transfer>,
    /// Over-threshold subset, in graph order
    pub fraud_edges: Vec<Transfer>,
    /// Top participants by degree centrality
    pub ranking: Vec<CentralityScore>,
    pub threshold: f64,
    pub participant_count: usize,
}

/// Ledger Analysis Service
///
/// Orchestrates the audit pipeline:
/// 1. Build the transfer graph
/// 2. Flag over-threshold transfers
/// 3. Rank participants by degree centrality
/// 4. Hand the results to the presentation layer
pub struct LedgerAnalysisService {
    detector: FraudDetector,
    ranker: CentralityRanker,
}

impl LedgerAnalysisService {
    /// Create a new service with default threshold and ranking size
    pub fn new() -> Self {
        Self {
            detector: FraudDetector::default(),
            ranker: CentralityRanker::default(),
        }
    }

    /// Create a new service from an audit configuration
    pub fn with_config(config: &AuditConfig) -> Self {
        Self {
            detector: FraudDetector::new(config.fraud_threshold),
            ranker: CentralityRanker::new(config.top_n),
        }
    }

    /// Load, analyse and present in one pass. Any error aborts the session.
    pub fn run<S, P>(&self, source: &mut S, presenter: &mut P) -> Result<AnalysisReport, AnalysisError>
    where
        S: TransferSource + ?Sized,
        P: GraphPresenter + ?Sized,
    {
        let records = source.load()?;
        debug!(record_count = records.len(), "Loaded transfer records");

        let report = self.analyze(&records)?;
        presenter.present(&report.graph, &report.fraud_edges)?;

        Ok(report)
    }
}

impl Default for LedgerAnalysisService {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerAnalysisApi for LedgerAnalysisService {
    fn analyze(&self, records: &[TransferRecord]) -> Result<AnalysisReport, GraphError> {
        let graph = self.build_graph(records)?;
        let fraud_edges = self.detect_fraud(&graph);
        let ranking = self.rank_participants(&graph);

        info!(
            fraud_count = fraud_edges.len(),
            threshold = self.detector.threshold(),
            ranked = ranking.len(),
            "Ledger analysis complete"
        );

        Ok(AnalysisReport {
            edges: graph.edges().to_vec(),
            participant_count: graph.node_count(),
            threshold: self.detector.threshold(),
            graph,
            fraud_edges,
            ranking,
        })
    }

    fn build_graph(&self, records: &[TransferRecord]) -> Result<TransactionGraph, GraphError> {
        let graph = TransactionGraph::from_records(records)?;

        debug_assert!(invariant_edge_uniqueness(&graph));
        debug_assert!(invariant_degree_consistency(&graph));

        info!(
            records = records.len(),
            participants = graph.node_count(),
            transfers = graph.edge_count(),
            overwrites = graph.overwrite_count(),
            "Transfer graph built"
        );

        Ok(graph)
    }

    fn detect_fraud(&self, graph: &TransactionGraph) -> Vec<Transfer> {
        self.detector.detect(graph)
    }

    fn rank_participants(&self, graph: &TransactionGraph) -> Vec<CentralityScore> {
        self.ranker.rank(graph)
    }
}
