//! Error type shared by graph construction, queries and the text reader.

/// Errors surfaced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum InfluenceError {
    /// A query named a vertex outside `0..node_count`.
    #[error("vertex {node} is out of range for a graph with {node_count} vertices")]
    InvalidVertex { node: usize, node_count: usize },

    /// A graph was built with a neighbor id outside `0..node_count`.
    #[error("edge {from} -> {to} is out of range for a graph with {node_count} vertices")]
    EdgeOutOfRange {
        from: usize,
        to: usize,
        node_count: usize,
    },

    /// Malformed digraph text. `line` is 1-based.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = InfluenceError> = std::result::Result<T, E>;
