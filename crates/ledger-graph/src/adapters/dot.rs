//! Graphviz DOT rendering of the transfer graph
//!
//! Fraud edges are drawn red and thicker than the blue normal edges. Every
//! edge is labelled with its amount; node width grows with degree.

use crate::algorithms::partition;
use crate::domain::entities::{TransactionGraph, Transfer};
use crate::domain::errors::PresentError;
use crate::ports::outbound::GraphPresenter;
use std::fmt;
use std::io::Write;
use tracing::info;

const NORMAL_EDGE_STYLE: &str = "color=\"blue\", fontcolor=\"blue\", penwidth=1.0";
const FRAUD_EDGE_STYLE: &str = "color=\"red\", fontcolor=\"red\", penwidth=2.0";

/// Writes the graph as a DOT document
pub struct DotPresenter<W: Write> {
    writer: W,
}

impl<W: Write> DotPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> GraphPresenter for DotPresenter<W> {
    fn present(
        &mut self,
        graph: &TransactionGraph,
        fraud_edges: &[Transfer],
    ) -> Result<(), PresentError> {
        let dot = render_dot(graph, fraud_edges);
        self.writer.write_all(dot.as_bytes())?;
        self.writer.flush()?;

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            fraud_edges = fraud_edges.len(),
            "Rendered transfer graph"
        );
        Ok(())
    }
}

/// Render `graph` as DOT, highlighting `fraud_edges`.
pub fn render_dot(graph: &TransactionGraph, fraud_edges: &[Transfer]) -> String {
    let mut out = String::new();
    write_dot(&mut out, graph, fraud_edges).expect("formatting into a String");
    out
}

/// Stream the DOT document into any `fmt::Write` sink.
fn write_dot<O: fmt::Write>(
    out: &mut O,
    graph: &TransactionGraph,
    fraud_edges: &[Transfer],
) -> fmt::Result {
    let (normal, fraud) = partition(graph, fraud_edges);

    writeln!(out, "digraph transfers {{")?;
    writeln!(out, "    graph [layout=neato, mode=KK, overlap=false];")?;
    writeln!(out, "    node [shape=circle, fontsize=14, style=filled, fillcolor=\"#1f77b4e6\"];")?;

    for node in graph.nodes() {
        let width = 0.3 * graph.degree(node).max(1) as f64;
        writeln!(out, "    \"{}\" [width={:.2}];", escape(node), width)?;
    }

    for edge in normal {
        write_edge(out, edge, NORMAL_EDGE_STYLE)?;
    }
    for edge in fraud {
        write_edge(out, edge, FRAUD_EDGE_STYLE)?;
    }

    writeln!(out, "}}")
}

fn write_edge<O: fmt::Write>(out: &mut O, edge: &Transfer, style: &str) -> fmt::Result {
    writeln!(
        out,
        "    \"{}\" -> \"{}\" [label=\"${:.2}\", {}];",
        escape(&edge.sender),
        escape(&edge.receiver),
        edge.amount,
        style
    )
}

fn escape(id: &str) -> String {
    id.replace('\\', "\\\\").replace('"', "\\\"")
}
