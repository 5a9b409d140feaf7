//! Reachability queries.
//!
//! Everything here is built on [`TangleGraph::collect_reachable`], a full
//! transitive closure over forward edges guarded by a visited set, so cycles
//! and self-loops terminate and no vertex is reported twice.

use crate::error::Result;
use crate::graph::{TangleGraph, VertexId};
use std::collections::BTreeSet;
use tangle_core::Vertex;
use tracing::debug;

impl TangleGraph {
    /// Collects every vertex reachable from `start` by following zero or
    /// more forward edges. The set always contains `start`.
    pub fn collect_reachable(&self, start: usize) -> Result<BTreeSet<usize>> {
        self.vertex(start)?;

        let mut visited = BTreeSet::new();
        let mut stack = vec![start];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            for &neighbor in self.children(current) {
                if !visited.contains(&neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        Ok(visited)
    }

    /// Lists the descendants `a` and `b` have in common, ascending by index.
    ///
    /// Each side's own start vertex is dropped before intersecting, so a
    /// query vertex is never reported as its own descendant, even on a
    /// cycle.
    pub fn shared_descendants(&self, a: usize, b: usize) -> Result<Vec<&Vertex>> {
        let mut from_a = self.collect_reachable(a)?;
        let mut from_b = self.collect_reachable(b)?;
        from_a.remove(&a);
        from_b.remove(&b);

        Ok(from_a
            .intersection(&from_b)
            .map(|&index| &self.graph[VertexId::new(index)])
            .collect())
    }

    /// Tests whether one of the given vertices reaches all the others.
    ///
    /// Values are resolved exactly; an unknown value aborts with
    /// [`GraphError::ValueNotFound`](crate::GraphError::ValueNotFound).
    /// This is "some member is a common ancestor of the rest", not mutual
    /// or undirected connectivity, and vertices outside the given set are
    /// never candidates. One value (or none) is trivially connected.
    pub fn connected<S: AsRef<str>>(&self, values: &[S]) -> Result<bool> {
        let members = values
            .iter()
            .map(|value| self.require_value(value.as_ref()))
            .collect::<Result<Vec<usize>>>()?;

        if members.len() <= 1 {
            return Ok(true);
        }

        for &candidate in &members {
            let reachable = self.collect_reachable(candidate)?;
            if members.iter().all(|member| reachable.contains(member)) {
                debug!(ancestor = candidate, "members connected");
                return Ok(true);
            }
        }

        Ok(false)
    }
}
