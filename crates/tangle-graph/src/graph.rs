//! Core graph data structure.
//!
//! The TangleGraph wraps petgraph and adds the indexes the queries need.
//! It is built once by [`GraphBuilder`](crate::GraphBuilder) and never
//! changes afterwards.

use crate::error::{GraphError, Result};
use crate::value_index::ValueIndex;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use tangle_core::Vertex;

/// Petgraph handle for a vertex. `VertexId::new(v.index)` always maps back
/// to the vertex with that index.
pub type VertexId = NodeIndex;

/// The analyzed graph.
///
/// Vertices are indexed densely from 0 and carry precomputed degrees.
/// Forward neighbors are kept in declaration order, which petgraph's own
/// neighbor iteration does not preserve.
#[derive(Debug)]
pub struct TangleGraph {
    /// The underlying petgraph graph.
    pub(crate) graph: DiGraph<Vertex, ()>,

    /// Forward neighbors per vertex, in edge declaration order.
    pub(crate) adjacency: Vec<Vec<usize>>,

    /// Maps vertex values to vertex indexes.
    pub(crate) values: ValueIndex,
}

impl TangleGraph {
    /// Looks up a vertex by index.
    pub fn vertex(&self, index: usize) -> Result<&Vertex> {
        self.graph
            .node_weight(VertexId::new(index))
            .ok_or(GraphError::IndexOutOfRange {
                index,
                len: self.vertex_count(),
            })
    }

    /// Returns the plain vertex line, e.g. `vtx[0] in: 0 out: 2 val: v00`.
    pub fn vertex_line(&self, index: usize) -> Result<String> {
        Ok(self.vertex(index)?.to_string())
    }

    /// Returns the forward neighbors of a vertex in declaration order.
    ///
    /// Duplicate edges show up once per edge.
    pub fn successors(&self, index: usize) -> Result<&[usize]> {
        self.vertex(index)?;
        Ok(self.children(index))
    }

    /// Unchecked variant of [`successors`](Self::successors) for indexes
    /// already known to be valid.
    pub(crate) fn children(&self, index: usize) -> &[usize] {
        self.adjacency
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Finds the vertex carrying exactly `value`. Duplicated values resolve
    /// to the lowest index.
    pub fn find_by_value(&self, value: &str) -> Option<&Vertex> {
        let index = self.values.resolve(value)?;
        self.graph.node_weight(VertexId::new(index))
    }

    /// Returns every vertex whose value starts with `query`, ascending by
    /// index. Matching is case-sensitive; an exact value is just the longest
    /// prefix.
    pub fn search(&self, query: &str) -> Vec<&Vertex> {
        self.values
            .prefix(query)
            .into_iter()
            .map(|index| &self.graph[VertexId::new(index)])
            .collect()
    }

    /// Like [`find_by_value`](Self::find_by_value) but fails with
    /// [`GraphError::ValueNotFound`].
    pub(crate) fn require_value(&self, value: &str) -> Result<usize> {
        self.values
            .resolve(value)
            .ok_or_else(|| GraphError::ValueNotFound(value.to_string()))
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates over all vertices in index order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.graph.node_weights()
    }

    /// Iterates over all edges as (source, destination) in declaration order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (edge.source().index(), edge.target().index()))
    }

    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
            self_loops: self.edges().filter(|(from, to)| from == to).count(),
            distinct_values: self.values.len(),
        }
    }
}

/// Graph statistics for the `stats` command and exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub self_loops: usize,
    pub distinct_values: usize,
}
