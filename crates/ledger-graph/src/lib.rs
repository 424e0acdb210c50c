//! # Ledger Graph
//!
//! Directed transfer graph built from a payment ledger, with threshold-based
//! fraud flagging and degree-centrality ranking.
//!
//! ## Architecture
//!
//! - **Domain**: Core entities (TransferRecord, Transfer, TransactionGraph, CentralityScore)
//! - **Algorithms**: Fraud threshold detection, degree centrality ranking
//! - **Ports**: Inbound (LedgerAnalysisApi) and Outbound (TransferSource, GraphPresenter)
//! - **Application**: Service orchestration
//! - **Adapters**: CSV loader, Graphviz DOT renderer, plain-text report

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::{CsvTransferSource, DotPresenter, TextReport};
pub use algorithms::{CentralityRanker, FraudDetector, FraudNotice};
pub use application::service::{AnalysisReport, LedgerAnalysisService};
pub use config::{AuditConfig, ConfigError};
pub use domain::entities::*;
pub use domain::errors::{AnalysisError, GraphError, LoadError, PresentError};
pub use domain::value_objects::*;
pub use ports::inbound::LedgerAnalysisApi;
pub use ports::outbound::{GraphPresenter, TransferSource};
