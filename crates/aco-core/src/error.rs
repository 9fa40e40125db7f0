//! Parameter validation errors.
//!
//! Sub-crates define their own error enums and wrap `AcoError` as one
//! variant where parameters reach them.

use thiserror::Error;

use crate::NodeId;

/// Rejected simulation parameters.
#[derive(Debug, Error)]
pub enum AcoError {
    #[error("nest node {nest} is outside the graph (1..={node_count})")]
    NestOutOfRange { nest: NodeId, node_count: usize },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `aco-*` crates.
pub type AcoResult<T> = Result<T, AcoError>;
