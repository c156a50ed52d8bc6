//! Error types for graph construction, validation and IO.

use thiserror::Error;

use crate::{Node, NumNodes};

/// All errors that can occur when building, editing, reading or writing a graph.
///
/// Validation errors (`SelfLoop`, `DuplicateEdge`, `NodeOutOfRange`, `MissingEdge`) leave the
/// graph untouched; callers loading many edges at once are expected to report and continue.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Reading or writing a file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input does not follow the expected format.
    #[error("Malformed input in line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// Edges from a vertex to itself are not supported.
    #[error("Self-loop on vertex {0} is not allowed")]
    SelfLoop(Node),

    /// The (directed) edge already exists.
    #[error("Edge ({0},{1}) already exists")]
    DuplicateEdge(Node, Node),

    /// A vertex id outside of `1..=order` was used.
    #[error("Vertex {node} does not exist in a graph of order {order}")]
    NodeOutOfRange { node: Node, order: NumNodes },

    /// The edge to be removed does not exist.
    #[error("Edge ({0},{1}) does not exist")]
    MissingEdge(Node, Node),

    /// The storage for a graph of the given order cannot be allocated.
    #[error("Cannot allocate storage for {0} vertices")]
    TooLarge(NumNodes),

    /// The query is only defined for undirected graphs.
    #[error("{0} is only defined for undirected graphs")]
    RequiresUndirected(&'static str),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
