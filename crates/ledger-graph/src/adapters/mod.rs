//! Adapters for the ledger graph ports
//!
//! - CSV loader (TransferSource)
//! - Graphviz DOT renderer (GraphPresenter)
//! - Text / JSON report

pub mod csv_loader;
pub mod dot;
pub mod text_report;

pub use csv_loader::CsvTransferSource;
pub use dot::DotPresenter;
pub use text_report::TextReport;
