//! Tangle Core - Vertex model and graph description loading
//!
//! This crate owns the pieces every other Tangle crate agrees on:
//! the [`Vertex`] record and the loader that turns a textual graph
//! description into a [`GraphDescription`].
//!
//! # Supported input
//!
//! The loader understands the subset of Graphviz DOT that describes plain
//! directed graphs: node statements, edge chains and attribute lists.
//! Subgraphs, ports and HTML labels are rejected.
//!
//! # Example
//!
//! ```
//! use tangle_core::parse_str;
//!
//! let desc = parse_str("digraph { a -> b; b -> a }").unwrap();
//! assert_eq!(desc.vertices, vec!["a", "b"]);
//! assert_eq!(desc.edges, vec![(0, 1), (1, 0)]);
//! ```

mod description;
mod dot;
mod error;
mod vertex;

pub use description::GraphDescription;
pub use dot::{load_file, parse_str};
pub use error::{ParseError, Result};
pub use vertex::Vertex;
