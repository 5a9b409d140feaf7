//! Tangle Graph - Structural queries over a static directed graph
//!
//! This crate holds the immutable [`TangleGraph`] and every query the
//! analyzer answers: tree rendering, value search, degree hotspots,
//! reachable sets, shared descendants, connectivity and token resolution.
//!
//! # Architecture
//!
//! The graph uses petgraph internally. [`GraphBuilder`] computes vertex
//! degrees and the forward adjacency lists once; after `build()` nothing
//! mutates the graph, so it can be shared freely between threads.
//!
//! Additional indexes:
//! - Value lookups (exact and prefix) through a sorted value index
//! - Forward neighbors in declaration order
//!
//! # Example
//!
//! ```
//! use tangle_graph::GraphBuilder;
//!
//! let mut builder = GraphBuilder::new();
//! let a = builder.add_vertex("a");
//! let b = builder.add_vertex("b");
//! builder.add_edge(a, b).unwrap();
//! let graph = builder.build();
//!
//! assert_eq!(graph.vertex_line(a).unwrap(), "vtx[0] in: 0 out: 1 val: a");
//! assert!(graph.connected(&["a", "b"]).unwrap());
//! ```

mod builder;
mod error;
pub mod export;
mod graph;
mod ranking;
mod reach;
mod resolve;
mod tree;
mod value_index;

#[cfg(test)]
mod fixture;

pub use builder::GraphBuilder;
pub use error::{GraphError, Result};
pub use graph::{GraphStats, TangleGraph, VertexId};
pub use ranking::{DegreeKind, HOTSPOT_COUNT};
pub use tangle_core::Vertex;
pub use tree::CYCLE_MARK;
