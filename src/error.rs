//! Error types for algorithm inputs
//!
//! Only structural problems are errors. "No path" and arithmetic overflow
//! are ordinary outcomes and show up in results as
//! [`Distance::UNREACHABLE`](crate::Distance::UNREACHABLE) or as a skipped
//! relaxation.

use thiserror::Error;

/// Broad error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input, such as a ragged matrix or an unknown vertex
    InvalidShape,
    /// Input exceeds the configured size bound for an exponential algorithm
    InputTooLarge,
}

/// Errors returned before any computation starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A matrix row has the wrong length
    #[error("adjacency matrix is not square: row {row} has {actual} entries, expected {expected}")]
    NotSquare {
        /// Offending row
        row: usize,
        /// Number of rows in the matrix
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// A vertex id does not address a matrix row
    #[error("vertex {vertex} out of range for graph with {vertices} vertices")]
    VertexOutOfRange {
        /// Requested vertex
        vertex: usize,
        /// Number of vertices in the graph
        vertices: usize,
    },

    /// A conditional probability table has the wrong number of entries
    #[error("node {node}: probability table has {actual} entries, expected {expected}")]
    ProbabilityTableMismatch {
        /// Bayes node id
        node: i64,
        /// `2^|parents|`
        expected: usize,
        /// Supplied length
        actual: usize,
    },

    /// A Bayes node has too many parents to index its table
    #[error("node {node} has {parents} parents, at most {max} are supported")]
    TooManyParents {
        /// Bayes node id
        node: i64,
        /// Number of parents supplied
        parents: usize,
        /// Largest supported parent count
        max: usize,
    },

    /// Too many vertices for exhaustive search
    #[error("graph has {vertices} vertices, exceeding the limit of {limit}")]
    InputTooLarge {
        /// Number of vertices in the graph
        vertices: usize,
        /// Effective limit
        limit: usize,
    },
}

impl GraphError {
    /// Category of this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotSquare { .. }
            | Self::VertexOutOfRange { .. }
            | Self::ProbabilityTableMismatch { .. }
            | Self::TooManyParents { .. } => ErrorKind::InvalidShape,
            Self::InputTooLarge { .. } => ErrorKind::InputTooLarge,
        }
    }
}

/// Result alias for algorithm entry points
pub type Result<T> = std::result::Result<T, GraphError>;
