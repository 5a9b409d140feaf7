//! Graph export.
//!
//! Two shapes: a JSON-friendly [`GraphSnapshot`] of the whole graph, and DOT
//! text for the subgraph induced by a vertex's reachable set. The DOT output
//! reads back through `tangle_core::parse_str`.

use crate::error::Result;
use crate::graph::{GraphStats, TangleGraph};
use serde::{Deserialize, Serialize};
use tangle_core::Vertex;

/// A simplified edge for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEdge {
    pub source: usize,
    pub target: usize,
}

/// Serializable view of a whole graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub version: String,
    pub stats: GraphStats,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<SnapshotEdge>,
}

/// Captures every vertex and edge of `graph`, in index and declaration order.
pub fn snapshot(graph: &TangleGraph) -> GraphSnapshot {
    GraphSnapshot {
        version: "1.0".to_string(),
        stats: graph.stats(),
        vertices: graph.vertices().cloned().collect(),
        edges: graph
            .edges()
            .map(|(source, target)| SnapshotEdge { source, target })
            .collect(),
    }
}

/// Renders the subgraph induced by everything reachable from `start` as DOT.
///
/// Nodes are named `n<index>` and labelled with their value, since values
/// need not be unique. Only edges with both ends in the reachable set are
/// kept, in declaration order.
pub fn reachable_subgraph_dot(graph: &TangleGraph, start: usize) -> Result<String> {
    let members = graph.collect_reachable(start)?;
    let root = graph.vertex(start)?;

    let mut out = format!("digraph \"{}\" {{\n", escape(&root.value));
    for &index in &members {
        let vertex = graph.vertex(index)?;
        out.push_str(&format!(
            "    n{} [label=\"{}\"];\n",
            index,
            escape(&vertex.value)
        ));
    }
    for (from, to) in graph.edges() {
        if members.contains(&from) && members.contains(&to) {
            out.push_str(&format!("    n{} -> n{};\n", from, to));
        }
    }
    out.push_str("}\n");

    Ok(out)
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
