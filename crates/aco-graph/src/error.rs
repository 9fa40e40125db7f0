//! Graph-subsystem error type.

use thiserror::Error;

use aco_core::NodeId;

/// Errors produced while building, generating, or loading a graph.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {node} not in graph of {node_count} nodes")]
    NodeOutOfRange { node: NodeId, node_count: usize },

    #[error("self loop on node {0}")]
    SelfLoop(NodeId),

    #[error("edge ({0},{1}) added twice")]
    DuplicateEdge(NodeId, NodeId),

    #[error("edge ({0},{1}) has zero weight; zero means \"no edge\"")]
    ZeroWeight(NodeId, NodeId),

    #[error("line {line}: {message}")]
    Header { line: usize, message: String },

    #[error("matrix row {row} has {got} entries, expected {expected}")]
    RowLength { row: usize, expected: usize, got: usize },

    #[error("matrix row {row}, column {col}: `{token}` is not an integer")]
    NotInteger { row: usize, col: usize, token: String },

    #[error("the graph must not have negative weights; correct edge ({row},{col})")]
    NegativeWeight { row: usize, col: usize },

    #[error("matrix is not symmetric at ({row},{col})")]
    Asymmetric { row: usize, col: usize },

    #[error("expected {expected} matrix rows, found {got}")]
    MissingRows { expected: usize, got: usize },

    #[error("graph of {node_count} nodes exceeds the limit of {max}")]
    TooManyNodes { node_count: usize, max: usize },

    #[error("cannot generate graph: {0}")]
    Generator(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
