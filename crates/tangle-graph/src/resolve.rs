//! Token resolution.
//!
//! Command lines name vertices either by index or by value. A token made
//! only of decimal digits is taken as an index as-is; anything else has its
//! leading punctuation stripped (`.v02` becomes `v02`) and is looked up as
//! an exact value.

use crate::error::{GraphError, Result};
use crate::graph::TangleGraph;

fn is_literal_index(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

fn strip_leading_symbols(token: &str) -> &str {
    token.trim_start_matches(|c: char| !c.is_alphanumeric())
}

impl TangleGraph {
    /// Maps each token to a canonical index string, in order.
    ///
    /// Literal indexes pass through unchecked. The first value that matches
    /// no vertex aborts the whole call with [`GraphError::ValueNotFound`].
    pub fn resolve_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<String>> {
        tokens
            .iter()
            .map(|token| self.resolve_token(token.as_ref()))
            .collect()
    }

    /// Resolves a single token to a canonical index string.
    pub fn resolve_token(&self, token: &str) -> Result<String> {
        if is_literal_index(token) {
            return Ok(token.to_string());
        }
        let value = strip_leading_symbols(token);
        self.values
            .resolve(value)
            .map(|index| index.to_string())
            .ok_or_else(|| GraphError::ValueNotFound(token.to_string()))
    }

    /// Resolves a token to a vertex index that exists in this graph.
    ///
    /// Unlike [`resolve_token`](Self::resolve_token), literal indexes are
    /// range checked.
    pub fn resolve_vertex(&self, token: &str) -> Result<usize> {
        let canonical = self.resolve_token(token)?;
        let index = canonical
            .parse::<usize>()
            .map_err(|_| GraphError::InvalidIndex(canonical.clone()))?;
        self.vertex(index)?;
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{graph_of, sample_graph};

    #[test]
    fn test_mixed_tokens() {
        let graph = sample_graph();

        assert_eq!(
            graph.resolve_tokens(&["v00", "1", "v05", "v11"]).unwrap(),
            vec!["0", "1", "5", "11"]
        );
        assert_eq!(
            graph
                .resolve_tokens(&["6", "7", "v07", "v09", "8", ".v02"])
                .unwrap(),
            vec!["6", "7", "7", "9", "8", "2"]
        );
    }

    #[test]
    fn test_values_round_trip() {
        let graph = sample_graph();
        let values: Vec<&str> = graph.vertices().map(|v| v.value.as_str()).collect();
        let expected: Vec<String> = (0..graph.vertex_count()).map(|i| i.to_string()).collect();

        assert_eq!(graph.resolve_tokens(&values).unwrap(), expected);
    }

    #[test]
    fn test_literal_index_not_checked() {
        let graph = sample_graph();
        assert_eq!(graph.resolve_token("999").unwrap(), "999");
        assert_eq!(graph.resolve_token("007").unwrap(), "007");
    }

    #[test]
    fn test_leading_symbols_stripped() {
        let graph = sample_graph();
        assert_eq!(graph.resolve_token("::-v03").unwrap(), "3");
    }

    #[test]
    fn test_unknown_value_aborts() {
        let graph = sample_graph();

        assert_eq!(
            graph.resolve_tokens(&["v00", ".ghost", "v01"]),
            Err(GraphError::ValueNotFound(".ghost".into()))
        );
        assert!(graph.resolve_token("").is_err());
        // Prefix matches are not enough.
        assert!(graph.resolve_token("v0").is_err());
    }

    #[test]
    fn test_resolve_vertex() {
        let graph = sample_graph();

        assert_eq!(graph.resolve_vertex("v04").unwrap(), 4);
        assert_eq!(graph.resolve_vertex("4").unwrap(), 4);
        assert_eq!(
            graph.resolve_vertex("12"),
            Err(GraphError::IndexOutOfRange { index: 12, len: 12 })
        );
        assert_eq!(
            graph.resolve_vertex("99999999999999999999999"),
            Err(GraphError::InvalidIndex("99999999999999999999999".into()))
        );
    }

    #[test]
    fn test_duplicate_value_resolves_to_lowest_index() {
        let graph = graph_of(&["dup", "x", "dup"], &[(2, 1)]);

        assert_eq!(
            graph.resolve_tokens(&["dup", ".dup", "x", "2"]).unwrap(),
            vec!["0", "0", "1", "2"]
        );
    }
}
