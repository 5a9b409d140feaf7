//! Loader output consumed by the graph builder.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A parsed graph description.
///
/// `vertices[i]` is the value of vertex `i`; `edges` keeps declaration order,
/// including duplicates and self-loops.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription {
    /// Graph name from the header, if any.
    pub name: Option<String>,

    /// Vertex values, indexed by vertex index.
    pub vertices: Vec<String>,

    /// Directed edges as (source, destination) index pairs.
    pub edges: Vec<(usize, usize)>,

    /// Maps description ids to vertex indexes. Only used while loading.
    #[serde(skip)]
    ids: HashMap<String, usize>,
}

impl GraphDescription {
    /// Creates an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index for `id`, allocating the next one on first sight.
    ///
    /// New vertices take their id as value until a `label` overrides it.
    pub fn intern(&mut self, id: &str) -> usize {
        if let Some(&index) = self.ids.get(id) {
            return index;
        }
        let index = self.vertices.len();
        self.vertices.push(id.to_string());
        self.ids.insert(id.to_string(), index);
        index
    }

    /// Replaces the value of an already interned vertex.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.vertices.get_mut(index) {
            *slot = value.into();
        }
    }

    /// Appends an edge between two interned vertices.
    pub fn push_edge(&mut self, from: usize, to: usize) {
        self.edges.push((from, to));
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}
