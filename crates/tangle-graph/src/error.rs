use thiserror::Error;

/// Errors raised by graph construction and queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex index {index} out of range (graph has {len} vertices)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no vertex with value '{0}'")]
    ValueNotFound(String),

    #[error("'{0}' is not a valid vertex index")]
    InvalidIndex(String),

    #[error("edge {from} -> {to} references a missing vertex (graph has {len} vertices)")]
    InvalidEdge { from: usize, to: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;
