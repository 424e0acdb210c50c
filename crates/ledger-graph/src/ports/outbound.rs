//! Outbound Ports (Driven Ports / SPI)

use crate::domain::entities::{TransactionGraph, Transfer};
use crate::domain::errors::{LoadError, PresentError};
use crate::domain::value_objects::TransferRecord;

/// Source of transfer records
///
/// Implementations own the underlying resource for the duration of `load`
/// and release it on every exit path.
pub trait TransferSource {
    /// Load all records in ledger order, header excluded.
    fn load(&mut self) -> Result<Vec<TransferRecord>, LoadError>;
}

/// Presentation layer for the analysed graph
pub trait GraphPresenter {
    /// Render `graph`, distinguishing `fraud_edges` from normal edges.
    fn present(&mut self, graph: &TransactionGraph, fraud_edges: &[Transfer])
        -> Result<(), PresentError>;
}
