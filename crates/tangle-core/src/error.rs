//! Error types for description loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a graph description.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected {expected}, found '{found}'")]
    UnexpectedToken {
        line: usize,
        found: String,
        expected: &'static str,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("line {line}: unterminated string literal")]
    UnterminatedString { line: usize },

    #[error("line {line}: {feature} is not supported")]
    Unsupported { line: usize, feature: &'static str },
}

pub type Result<T> = std::result::Result<T, ParseError>;
