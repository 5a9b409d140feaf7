//! Degree hotspots.
//!
//! Ranks vertices by in- or out-degree. The order is total: degree
//! descending, then index ascending, so equal-degree vertices always come
//! out in the same order.

use crate::graph::TangleGraph;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tangle_core::Vertex;

/// Number of vertices reported by the fixed hotspot queries.
pub const HOTSPOT_COUNT: usize = 4;

/// Which degree to rank by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeKind {
    /// Incoming edges.
    In,
    /// Outgoing edges.
    Out,
}

impl DegreeKind {
    /// Reads this degree off a vertex.
    pub fn of(self, vertex: &Vertex) -> usize {
        match self {
            DegreeKind::In => vertex.in_degree,
            DegreeKind::Out => vertex.out_degree,
        }
    }
}

impl std::fmt::Display for DegreeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegreeKind::In => write!(f, "in"),
            DegreeKind::Out => write!(f, "out"),
        }
    }
}

impl TangleGraph {
    /// Returns the indexes of the `k` vertices with the highest degree.
    ///
    /// Fewer than `k` vertices yields all of them, fully ranked.
    pub fn top_by_degree(&self, kind: DegreeKind, k: usize) -> Vec<usize> {
        let mut ranked: Vec<&Vertex> = self.vertices().collect();
        ranked.sort_unstable_by_key(|vertex| (Reverse(kind.of(vertex)), vertex.index));
        ranked.into_iter().take(k).map(|vertex| vertex.index).collect()
    }

    /// Top [`HOTSPOT_COUNT`] vertices by out-degree.
    pub fn hotspots_by_out_degree(&self) -> Vec<usize> {
        self.top_by_degree(DegreeKind::Out, HOTSPOT_COUNT)
    }

    /// Top [`HOTSPOT_COUNT`] vertices by in-degree.
    pub fn hotspots_by_in_degree(&self) -> Vec<usize> {
        self.top_by_degree(DegreeKind::In, HOTSPOT_COUNT)
    }
}
