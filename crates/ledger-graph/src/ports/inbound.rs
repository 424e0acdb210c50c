//! Inbound Ports (Driving Ports / API)

use crate::application::service::AnalysisReport;
use crate::domain::entities::{TransactionGraph, Transfer};
use crate::domain::errors::GraphError;
use crate::domain::value_objects::{CentralityScore, TransferRecord};

/// Primary ledger analysis API
pub trait LedgerAnalysisApi {
    /// Build the transfer graph and run both analyses over it.
    ///
    /// This is the main entry point. It:
    /// 1. Folds the records into a graph in record order
    /// 2. Flags over-threshold transfers
    /// 3. Ranks participants by degree centrality
    fn analyze(&self, records: &[TransferRecord]) -> Result<AnalysisReport, GraphError>;

    /// Fold records into a graph via repeated `add_edge` calls.
    fn build_graph(&self, records: &[TransferRecord]) -> Result<TransactionGraph, GraphError>;

    /// Transfers strictly above the configured threshold, in graph order.
    fn detect_fraud(&self, graph: &TransactionGraph) -> Vec<Transfer>;

    /// Top participants by degree centrality.
    fn rank_participants(&self, graph: &TransactionGraph) -> Vec<CentralityScore>;
}
