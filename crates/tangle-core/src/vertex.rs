//! The vertex record shared by the loader and the query engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A vertex of the analyzed graph.
///
/// Identity is the dense index assigned at load time. The value is an
/// opaque label and is not required to be unique, so equality and hashing
/// only look at the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// Position of the vertex in `0..N`.
    pub index: usize,

    /// Opaque label taken from the description.
    pub value: String,

    /// Number of edges ending at this vertex.
    pub in_degree: usize,

    /// Number of edges starting at this vertex.
    pub out_degree: usize,
}

impl Vertex {
    /// Creates a vertex with zero degrees. The graph builder fills them in.
    pub fn new(index: usize, value: impl Into<String>) -> Self {
        Self {
            index,
            value: value.into(),
            in_degree: 0,
            out_degree: 0,
        }
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

/// Renders the plain vertex line: `vtx[<index>] in: <in> out: <out> val: <value>`.
impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vtx[{}] in: {} out: {} val: {}",
            self.index, self.in_degree, self.out_degree, self.value
        )
    }
}
