//! Core entities for the ledger graph

use super::errors::GraphError;
use super::value_objects::{validate_transfer, EdgeKey, ParticipantId, TransferRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Directed, weighted edge of the transfer graph
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    /// Paying participant
    pub sender: ParticipantId,
    /// Receiving participant
    pub receiver: ParticipantId,
    /// Amount of the most recent record for this pair
    pub amount: f64,
}

impl Transfer {
    pub fn new(sender: impl Into<String>, receiver: impl Into<String>, amount: f64) -> Self {
        Self {
            sender: sender.into(),
            receiver: receiver.into(),
            amount,
        }
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.sender.clone(), self.receiver.clone())
    }
}

/// Directed weighted graph of participants and transfers.
///
/// Nodes are created implicitly by `add_edge` and kept in first-appearance
/// order. At most one edge exists per ordered `(sender, receiver)` pair; a
/// later amount overwrites the earlier one without moving the edge.
#[derive(Debug, Clone, Default)]
pub struct TransactionGraph {
    /// Participants in first-appearance order
    nodes: Vec<ParticipantId>,
    /// Participant -> position in `nodes`
    node_index: HashMap<ParticipantId, usize>,
    /// In-degree per node, parallel to `nodes`
    in_degree: Vec<usize>,
    /// Out-degree per node, parallel to `nodes`
    out_degree: Vec<usize>,
    /// Edges in first-insertion order
    edges: Vec<Transfer>,
    /// Ordered pair -> position in `edges`
    edge_index: HashMap<EdgeKey, usize>,
    /// Records that replaced an existing edge's amount
    overwrites: usize,
}

impl TransactionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold records into a new graph in record order.
    ///
    /// Stops at the first record the graph rejects.
    pub fn from_records<'a, I>(records: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = &'a TransferRecord>,
    {
        let mut graph = Self::new();
        for record in records {
            graph.add_edge(&record.sender, &record.receiver, record.amount)?;
        }
        Ok(graph)
    }

    /// Insert the edge `sender -> receiver`, or overwrite its amount if the
    /// pair already exists.
    pub fn add_edge(&mut self, sender: &str, receiver: &str, amount: f64) -> Result<(), GraphError> {
        validate_transfer(sender, receiver, amount)?;

        let key = EdgeKey::new(sender, receiver);
        if let Some(&idx) = self.edge_index.get(&key) {
            let edge = &mut self.edges[idx];
            debug!(
                sender,
                receiver,
                previous = edge.amount,
                amount,
                "Overwriting existing transfer amount"
            );
            edge.amount = amount;
            self.overwrites += 1;
            return Ok(());
        }

        let from = self.intern(sender);
        let to = self.intern(receiver);
        self.out_degree[from] += 1;
        self.in_degree[to] += 1;

        self.edge_index.insert(key, self.edges.len());
        self.edges.push(Transfer::new(sender, receiver, amount));

        Ok(())
    }

    /// Position of `participant`, registering it on first sight
    fn intern(&mut self, participant: &str) -> usize {
        if let Some(&idx) = self.node_index.get(participant) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(participant.to_string());
        self.node_index.insert(participant.to_string(), idx);
        self.in_degree.push(0);
        self.out_degree.push(0);
        idx
    }

    /// All edges in construction order
    pub fn edges(&self) -> &[Transfer] {
        &self.edges
    }

    /// Participants in first-appearance order
    pub fn nodes(&self) -> &[ParticipantId] {
        &self.nodes
    }

    /// In-degree + out-degree. Unknown participants have degree 0.
    pub fn degree(&self, node: &str) -> usize {
        self.in_degree(node) + self.out_degree(node)
    }

    pub fn in_degree(&self, node: &str) -> usize {
        self.node_index
            .get(node)
            .map(|&idx| self.in_degree[idx])
            .unwrap_or(0)
    }

    pub fn out_degree(&self, node: &str) -> usize {
        self.node_index
            .get(node)
            .map(|&idx| self.out_degree[idx])
            .unwrap_or(0)
    }

    pub fn contains(&self, node: &str) -> bool {
        self.node_index.contains_key(node)
    }

    /// Amount on the edge `sender -> receiver`, if present
    pub fn amount(&self, sender: &str, receiver: &str) -> Option<f64> {
        self.edge_index
            .get(&EdgeKey::new(sender, receiver))
            .map(|&idx| self.edges[idx].amount)
    }

    /// Number of distinct participants
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct ordered pairs
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of records whose amount replaced an existing edge's amount
    pub fn overwrite_count(&self) -> usize {
        self.overwrites
    }
}
