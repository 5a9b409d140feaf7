//! Graph builder for constructing the analyzed graph.
//!
//! The builder collects vertices and edges, then computes degrees and the
//! lookup indexes in one pass at `build()`. It is the only place a
//! [`TangleGraph`] gets mutated.

use crate::error::{GraphError, Result};
use crate::graph::{TangleGraph, VertexId};
use crate::value_index::ValueIndex;
use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use tangle_core::{GraphDescription, Vertex};
use tracing::debug;

/// Builds a TangleGraph from vertices and edges.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: DiGraph<Vertex, ()>,
}

impl GraphBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex and returns its index. Indexes are handed out densely
    /// from 0 in call order.
    pub fn add_vertex(&mut self, value: impl Into<String>) -> usize {
        let index = self.graph.node_count();
        self.graph.add_node(Vertex::new(index, value)).index()
    }

    /// Adds a directed edge. Duplicates and self-loops are allowed.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.graph.node_count();
        if from >= len || to >= len {
            return Err(GraphError::InvalidEdge { from, to, len });
        }
        self.graph.add_edge(VertexId::new(from), VertexId::new(to), ());
        Ok(())
    }

    /// Finishes building: fills in degrees, adjacency lists and the value
    /// index.
    pub fn build(mut self) -> TangleGraph {
        let node_indices: Vec<VertexId> = self.graph.node_indices().collect();

        for &idx in &node_indices {
            let in_degree = self.graph.edges_directed(idx, Direction::Incoming).count();
            let out_degree = self.graph.edges_directed(idx, Direction::Outgoing).count();
            let vertex = &mut self.graph[idx];
            vertex.in_degree = in_degree;
            vertex.out_degree = out_degree;
        }

        // Edge indexes follow insertion order, unlike per-node neighbor walks.
        let mut adjacency = vec![Vec::new(); node_indices.len()];
        for edge in self.graph.edge_references() {
            adjacency[edge.source().index()].push(edge.target().index());
        }

        let mut values = ValueIndex::new();
        for vertex in self.graph.node_weights() {
            values.insert(&vertex.value, vertex.index);
        }

        debug!(
            vertices = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "built graph"
        );

        TangleGraph {
            graph: self.graph,
            adjacency,
            values,
        }
    }
}

impl TangleGraph {
    /// Builds a graph from a loaded description.
    pub fn from_description(desc: &GraphDescription) -> Result<Self> {
        let mut builder = GraphBuilder::new();
        for value in &desc.vertices {
            builder.add_vertex(value.as_str());
        }
        for &(from, to) in &desc.edges {
            builder.add_edge(from, to)?;
        }
        Ok(builder.build())
    }
}
