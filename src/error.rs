//! Error types for RouteGraph.

use thiserror::Error;

/// All errors surfaced by the RouteGraph library.
#[derive(Debug, Error)]
pub enum RouteGraphError {
    /// A node name was referenced that does not exist in the graph.
    /// Raised by edge insertion, reachability, and all path queries.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// A node was inserted with a name that is already taken.
    #[error("duplicate node: {0}")]
    DuplicateNode(String),

    /// A graph description line could not be parsed.
    #[error("malformed description at line {line}: {reason}")]
    MalformedDescription { line: usize, reason: String },

    /// Failed to read a graph description file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RouteGraphError>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
