//! Ports module for the ledger graph
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::LedgerAnalysisApi;
pub use outbound::{GraphPresenter, TransferSource};
