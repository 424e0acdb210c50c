//! Value objects for the ledger graph

use super::errors::GraphError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Participant identifier. Compared by exact, case-sensitive string equality.
pub type ParticipantId = String;

/// One row of the transfer ledger, in file order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransferRecord {
    /// Paying participant
    pub sender: ParticipantId,
    /// Receiving participant
    pub receiver: ParticipantId,
    /// Transferred amount in currency units
    pub amount: f64,
}

impl TransferRecord {
    pub fn new(sender: impl Into<String>, receiver: impl Into<String>, amount: f64) -> Self {
        Self {
            sender: sender.into(),
            receiver: receiver.into(),
            amount,
        }
    }

    /// Build a record from the ledger's `(amount, sender, receiver)` column order.
    pub fn from_row(amount: f64, sender: impl Into<String>, receiver: impl Into<String>) -> Self {
        Self::new(sender, receiver, amount)
    }

    /// Check the record can become a graph edge
    pub fn validate(&self) -> Result<(), GraphError> {
        validate_transfer(&self.sender, &self.receiver, self.amount)
    }
}

/// Identifiers must be non-empty; amount must be finite and non-negative.
pub fn validate_transfer(sender: &str, receiver: &str, amount: f64) -> Result<(), GraphError> {
    if sender.is_empty() {
        return Err(GraphError::EmptyParticipant { role: "sender" });
    }
    if receiver.is_empty() {
        return Err(GraphError::EmptyParticipant { role: "receiver" });
    }
    if !amount.is_finite() {
        return Err(GraphError::NonFiniteAmount(amount));
    }
    if amount < 0.0 {
        return Err(GraphError::NegativeAmount(amount));
    }
    Ok(())
}

/// Ordered `(sender, receiver)` pair identifying an edge.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    pub sender: ParticipantId,
    pub receiver: ParticipantId,
}

impl EdgeKey {
    pub fn new(sender: impl Into<String>, receiver: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            receiver: receiver.into(),
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.sender, self.receiver)
    }
}

/// Degree centrality of a single participant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CentralityScore {
    pub participant: ParticipantId,
    /// Combined in-degree + out-degree
    pub degree: usize,
    /// `degree / (node_count - 1)`, or 0 when the graph has at most one node
    pub score: f64,
}

impl CentralityScore {
    pub fn new(participant: impl Into<String>, degree: usize, score: f64) -> Self {
        Self {
            participant: participant.into(),
            degree,
            score,
        }
    }
}
