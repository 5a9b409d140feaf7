//! Value index for exact and prefix lookups.
//!
//! Values are kept in a sorted map, so every value sharing a prefix sits in
//! one contiguous range and a prefix query is a range scan instead of a pass
//! over all vertices.

use std::collections::BTreeMap;
use std::ops::Bound;

/// Maps vertex values to the vertex indexes carrying them.
///
/// Values are matched case-sensitively. Index lists stay ascending because
/// vertices are inserted in index order.
#[derive(Debug, Default, Clone)]
pub(crate) struct ValueIndex {
    by_value: BTreeMap<String, Vec<usize>>,
}

impl ValueIndex {
    /// Creates a new empty value index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `value` for vertex `index`.
    pub fn insert(&mut self, value: &str, index: usize) {
        self.by_value.entry(value.to_string()).or_default().push(index);
    }

    /// Resolves an exact value to the lowest vertex index carrying it.
    pub fn resolve(&self, value: &str) -> Option<usize> {
        self.by_value.get(value).and_then(|ids| ids.first().copied())
    }

    /// Returns the indexes of all vertices whose value starts with `prefix`,
    /// ascending.
    pub fn prefix(&self, prefix: &str) -> Vec<usize> {
        let mut results: Vec<usize> = self
            .by_value
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(|(value, _)| value.starts_with(prefix))
            .flat_map(|(_, ids)| ids.iter().copied())
            .collect();
        results.sort_unstable();
        results
    }

    /// Returns the number of distinct values indexed.
    pub fn len(&self) -> usize {
        self.by_value.len()
    }
}
