//! Algorithms module for the ledger graph
//!
//! Contains:
//! - Threshold fraud detection
//! - Degree centrality ranking

pub mod centrality;
pub mod fraud_detector;

pub use centrality::{degree_centrality, top_n, CentralityRanker, DEFAULT_TOP_N};
pub use fraud_detector::{detect, partition, FraudDetector, FraudNotice, DEFAULT_FRAUD_THRESHOLD};
