//! Shared test graph.
//!
//! ```text
//! v00 -> v01, v02        v04 -> v07, v08, v09
//! v01 -> v02, v03, v04   v05 -> v10, v11
//! v02 -> v05             v06 -> v06
//! v03 -> v06, v07        v08 -> v06
//! v10 -> v09             v11 -> v06
//! ```

use crate::builder::GraphBuilder;
use crate::graph::TangleGraph;

pub(crate) const SAMPLE_EDGES: [(usize, usize); 17] = [
    (0, 1),
    (0, 2),
    (1, 2),
    (1, 3),
    (1, 4),
    (2, 5),
    (3, 6),
    (3, 7),
    (4, 7),
    (4, 8),
    (4, 9),
    (5, 10),
    (5, 11),
    (6, 6),
    (8, 6),
    (10, 9),
    (11, 6),
];

pub(crate) fn sample_graph() -> TangleGraph {
    let mut builder = GraphBuilder::new();
    for i in 0..12 {
        builder.add_vertex(format!("v{:02}", i));
    }
    for (from, to) in SAMPLE_EDGES {
        builder.add_edge(from, to).unwrap();
    }
    builder.build()
}

/// Builds a graph whose vertex values are their own names.
pub(crate) fn graph_of(values: &[&str], edges: &[(usize, usize)]) -> TangleGraph {
    let mut builder = GraphBuilder::new();
    for value in values {
        builder.add_vertex(*value);
    }
    for &(from, to) in edges {
        builder.add_edge(from, to).unwrap();
    }
    builder.build()
}
