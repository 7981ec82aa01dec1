//! Error types for graph binding.

use super::NodeKey;
use crate::error::InteractionError;
use crate::types::Point;
use thiserror::Error;

/// Errors raised when a graph model cannot be bound to a surface
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A node referenced by an edge or a label has no position
    #[error("node {node:?} has no position")]
    MissingPosition { node: NodeKey },

    /// A position is NaN or infinite
    #[error("node {node:?} has a non-finite position {position}")]
    NonFinitePosition { node: NodeKey, position: Point },

    /// An edge label refers to a pair of nodes that are not adjacent
    #[error("edge label for ({from:?}, {to:?}) does not match any edge")]
    UnknownEdge { from: NodeKey, to: NodeKey },

    /// Adjacency matrix row is not as long as the node list
    #[error("adjacency matrix row {row} has {len} entries, expected {expected}")]
    MatrixShape { row: usize, len: usize, expected: usize },

    #[error("adjacency matrix has {rows} rows, expected {expected}")]
    MatrixRows { rows: usize, expected: usize },

    #[error("adjacency matrix weight at ({row}, {col}) is not finite")]
    NonFiniteWeight { row: usize, col: usize },

    /// Settings failed validation
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("unknown node {0:?}")]
    UnknownNode(NodeKey),

    #[error(transparent)]
    Interaction(#[from] InteractionError),
}

/// Result type alias for graph operations
pub type GraphResult<T> = Result<T, GraphError>;
