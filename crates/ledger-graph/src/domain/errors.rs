//! Error types for the ledger graph

use thiserror::Error;

/// Rejected graph mutation. The graph is unchanged when one of these is returned.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    /// Sender or receiver identifier is empty
    #[error("Empty participant identifier ({role})")]
    EmptyParticipant { role: &'static str },

    /// Amount is NaN or infinite
    #[error("Amount is not finite: {0}")]
    NonFiniteAmount(f64),

    /// Amount below zero
    #[error("Amount is negative: {0}")]
    NegativeAmount(f64),
}

/// Failure while loading transfer records at the source boundary
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source file missing or unreadable
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV framing error (unterminated quote, bad UTF-8, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Amount column is not a number
    #[error("Line {line}: cannot parse amount {value:?}")]
    Parse { line: u64, value: String },

    /// Row does not have the amount, sender and receiver columns
    #[error("Line {line}: expected 3 columns, found {found}")]
    MalformedRow { line: u64, found: usize },

    /// Record rejected by the graph
    #[error("Line {line}: {source}")]
    InvalidRecord {
        line: u64,
        #[source]
        source: GraphError,
    },
}

/// Failure while handing results to the presentation layer
#[derive(Debug, Error)]
pub enum PresentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Top-level error of an analysis session
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Load failed: {0}")]
    Load(#[from] LoadError),

    #[error("Graph construction failed: {0}")]
    Graph(#[from] GraphError),

    #[error("Presentation failed: {0}")]
    Present(#[from] PresentError),
}
