//! Application layer for the ledger graph

pub mod service;

pub use service::{AnalysisReport, LedgerAnalysisService};
