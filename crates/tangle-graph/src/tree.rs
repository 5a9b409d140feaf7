//! Tree rendering.
//!
//! Prints the forward neighborhood of a vertex as an indented tree, one
//! line per visited vertex. The walk is depth-first and bounded two ways:
//!
//! - A neighbor already on the current path (a back-edge or self-loop) is
//!   printed with [`CYCLE_MARK`] in place of the horizontal branch and is
//!   not expanded.
//! - A neighbor at `max_depth` is printed normally but not expanded.
//!
//! Vertices reached by several non-cyclic paths are printed in full at
//! every occurrence.

use crate::error::Result;
use crate::graph::{TangleGraph, VertexId};
use std::collections::HashSet;
use tracing::debug;

/// Replaces the `─` of a branch for neighbors that close a cycle.
pub const CYCLE_MARK: char = '●';

const BRANCH: char = '─';
const TEE: char = '├';
const CORNER: char = '└';
const PIPE_INDENT: &str = "│  ";
const BLANK_INDENT: &str = "   ";

/// One vertex being expanded: `next` is the position of the child to print
/// next, `prefix_len` the length of the line prefix its children share.
struct Frame {
    parent: usize,
    next: usize,
    depth: usize,
    prefix_len: usize,
}

impl TangleGraph {
    /// Renders the children of `index` down to `max_depth` levels.
    ///
    /// The root's own line is not included; see [`render_tree`](Self::render_tree).
    /// A `max_depth` of 0 yields no lines.
    pub fn render_children(&self, index: usize, max_depth: usize) -> Result<Vec<String>> {
        self.vertex(index)?;

        let mut lines = Vec::new();
        if max_depth == 0 {
            return Ok(lines);
        }

        let mut path = HashSet::from([index]);
        let mut prefix = String::new();
        let mut stack = vec![Frame {
            parent: index,
            next: 0,
            depth: 1,
            prefix_len: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let children = self.children(frame.parent);
            let Some(&child) = children.get(frame.next) else {
                path.remove(&frame.parent);
                stack.pop();
                continue;
            };
            frame.next += 1;

            let last = frame.next == children.len();
            let depth = frame.depth;
            prefix.truncate(frame.prefix_len);

            let corner = if last { CORNER } else { TEE };
            let vertex = &self.graph[VertexId::new(child)];

            if path.contains(&child) {
                lines.push(format!("{prefix}{corner}{CYCLE_MARK} {vertex}"));
                continue;
            }

            lines.push(format!("{prefix}{corner}{BRANCH} {vertex}"));

            if depth < max_depth {
                prefix.push_str(if last { BLANK_INDENT } else { PIPE_INDENT });
                path.insert(child);
                stack.push(Frame {
                    parent: child,
                    next: 0,
                    depth: depth + 1,
                    prefix_len: prefix.len(),
                });
            }
        }

        debug!(root = index, max_depth, lines = lines.len(), "rendered tree");
        Ok(lines)
    }

    /// Renders the root line followed by its children.
    pub fn render_tree(&self, index: usize, max_depth: usize) -> Result<Vec<String>> {
        let mut lines = vec![self.vertex_line(index)?];
        lines.extend(self.render_children(index, max_depth)?);
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::GraphBuilder;
    use crate::error::GraphError;
    use crate::fixture::{graph_of, sample_graph};

    #[test]
    fn test_render_sample_tree() {
        let graph = sample_graph();

        let expected = vec![
            "├─ vtx[2] in: 2 out: 1 val: v02",
            "│  └─ vtx[5] in: 1 out: 2 val: v05",
            "│     ├─ vtx[10] in: 1 out: 1 val: v10",
            "│     └─ vtx[11] in: 1 out: 1 val: v11",
            "├─ vtx[3] in: 1 out: 2 val: v03",
            "│  ├─ vtx[6] in: 4 out: 1 val: v06",
            "│  │  └● vtx[6] in: 4 out: 1 val: v06",
            "│  └─ vtx[7] in: 2 out: 0 val: v07",
            "└─ vtx[4] in: 1 out: 3 val: v04",
            "   ├─ vtx[7] in: 2 out: 0 val: v07",
            "   ├─ vtx[8] in: 1 out: 1 val: v08",
            "   │  └─ vtx[6] in: 4 out: 1 val: v06",
            "   └─ vtx[9] in: 2 out: 0 val: v09",
        ];

        assert_eq!(graph.render_children(1, 3).unwrap(), expected);
    }

    #[test]
    fn test_render_tree_includes_root() {
        let graph = sample_graph();
        let lines = graph.render_tree(1, 1).unwrap();

        assert_eq!(
            lines,
            vec![
                "vtx[1] in: 1 out: 3 val: v01",
                "├─ vtx[2] in: 2 out: 1 val: v02",
                "├─ vtx[3] in: 1 out: 2 val: v03",
                "└─ vtx[4] in: 1 out: 3 val: v04",
            ]
        );
    }

    #[test]
    fn test_depth_zero_renders_nothing() {
        let graph = sample_graph();
        assert!(graph.render_children(1, 0).unwrap().is_empty());
    }

    #[test]
    fn test_leaf_renders_nothing() {
        let graph = sample_graph();
        assert!(graph.render_children(7, 5).unwrap().is_empty());
    }

    #[test]
    fn test_back_edge_to_root_is_marked() {
        // a -> b -> a
        let graph = graph_of(&["a", "b"], &[(0, 1), (1, 0)]);

        assert_eq!(
            graph.render_children(0, 10).unwrap(),
            vec![
                "└─ vtx[1] in: 1 out: 1 val: b",
                "   └● vtx[0] in: 1 out: 1 val: a",
            ]
        );
    }

    #[test]
    fn test_cycle_marked_even_at_depth_limit() {
        let graph = graph_of(&["a"], &[(0, 0)]);
        assert_eq!(
            graph.render_children(0, 1).unwrap(),
            vec!["└● vtx[0] in: 1 out: 1 val: a"]
        );
    }

    #[test]
    fn test_diamond_printed_twice() {
        //   a
        //  / \
        // b   c
        //  \ /
        //   d
        let graph = graph_of(&["a", "b", "c", "d"], &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let lines = graph.render_children(0, 5).unwrap();

        assert_eq!(
            lines,
            vec![
                "├─ vtx[1] in: 1 out: 1 val: b",
                "│  └─ vtx[3] in: 2 out: 0 val: d",
                "└─ vtx[2] in: 1 out: 1 val: c",
                "   └─ vtx[3] in: 2 out: 0 val: d",
            ]
        );
    }

    #[test]
    fn test_long_cycle_terminates() {
        // 0 -> 1 -> 2 -> 3 -> 0
        let graph = graph_of(&["a", "b", "c", "d"], &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let lines = graph.render_children(0, usize::MAX).unwrap();

        assert_eq!(lines.len(), 4);
        assert!(lines[3].ends_with("└● vtx[0] in: 1 out: 1 val: a"));
    }

    #[test]
    fn test_deep_chain_renders_without_overflow() {
        // 0 -> 1 -> ... -> n-1
        let n = 6_000;
        let mut builder = GraphBuilder::new();
        for i in 0..n {
            builder.add_vertex(format!("c{i}"));
        }
        for i in 1..n {
            builder.add_edge(i - 1, i).unwrap();
        }
        let graph = builder.build();

        let lines = graph.render_children(0, n).unwrap();
        assert_eq!(lines.len(), n - 1);
        assert!(lines[0].starts_with("└─ vtx[1] "));

        let last = &lines[n - 2];
        assert!(last.starts_with(&"   ".repeat(n - 2)));
        assert!(last.ends_with("└─ vtx[5999] in: 1 out: 0 val: c5999"));
    }

    #[test]
    fn test_render_out_of_range() {
        let graph = sample_graph();
        assert!(matches!(
            graph.render_children(99, 3),
            Err(GraphError::IndexOutOfRange { index: 99, .. })
        ));
    }
}
