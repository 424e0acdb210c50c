//! Threshold-based fraud detection
//!
//! Flags every edge whose amount strictly exceeds the threshold. Output keeps
//! the graph's edge order; it is not sorted by amount.

use crate::domain::entities::{TransactionGraph, Transfer};
use crate::domain::value_objects::EdgeKey;
use std::collections::HashSet;
use std::fmt;
use tracing::warn;

/// Default fraud threshold in currency units
pub const DEFAULT_FRAUD_THRESHOLD: f64 = 500.00;

/// Flags over-threshold transfers
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FraudDetector {
    threshold: f64,
}

impl FraudDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Edges with `amount > threshold`, in graph order.
    ///
    /// Emits one audit notice per flagged edge.
    pub fn detect(&self, graph: &TransactionGraph) -> Vec<Transfer> {
        detect(graph, self.threshold)
    }

    /// Human-readable notices for `flagged`
    pub fn notices<'a>(&self, flagged: &'a [Transfer]) -> Vec<FraudNotice<'a>> {
        flagged
            .iter()
            .map(|edge| FraudNotice::new(edge, self.threshold))
            .collect()
    }
}

impl Default for FraudDetector {
    fn default() -> Self {
        Self::new(DEFAULT_FRAUD_THRESHOLD)
    }
}

/// Edges of `graph` whose amount strictly exceeds `threshold`, in graph order.
pub fn detect(graph: &TransactionGraph, threshold: f64) -> Vec<Transfer> {
    let flagged: Vec<Transfer> = graph
        .edges()
        .iter()
        .filter(|edge| edge.amount > threshold)
        .cloned()
        .collect();

    for edge in &flagged {
        warn!(
            sender = %edge.sender,
            receiver = %edge.receiver,
            amount = edge.amount,
            threshold,
            "{}",
            FraudNotice::new(edge, threshold)
        );
    }

    flagged
}

/// Split the graph's edges into `(normal, fraud)`, both in graph order.
pub fn partition<'g>(
    graph: &'g TransactionGraph,
    flagged: &[Transfer],
) -> (Vec<&'g Transfer>, Vec<&'g Transfer>) {
    let flagged: HashSet<EdgeKey> = flagged.iter().map(Transfer::key).collect();

    graph
        .edges()
        .iter()
        .partition(|edge| !flagged.contains(&edge.key()))
}

/// Audit notice for a single flagged transfer
#[derive(Clone, Copy, Debug)]
pub struct FraudNotice<'a> {
    pub transfer: &'a Transfer,
    pub threshold: f64,
}

impl<'a> FraudNotice<'a> {
    pub fn new(transfer: &'a Transfer, threshold: f64) -> Self {
        Self {
            transfer,
            threshold,
        }
    }
}

impl fmt::Display for FraudNotice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Potential Fraud Detected (Amount Exceeds ${:.2}): {} -> {}, Amount: ${:.2}",
            self.threshold, self.transfer.sender, self.transfer.receiver, self.transfer.amount
        )
    }
}
