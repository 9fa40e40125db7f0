use thiserror::Error;

use aco_core::{AgentId, NodeId};

/// Invariant failures detected while an ant moves.
///
/// The simulator treats every variant as fatal: the input graph was supposed
/// to rule them out.
#[derive(Debug, Error)]
pub enum ColonyError {
    #[error("ant {agent} is stuck at node {node}: no adjacent nodes")]
    DeadEnd { agent: AgentId, node: NodeId },

    #[error("ant {agent} cannot backtrack to node {target}: not on its path")]
    NotOnPath { agent: AgentId, target: NodeId },

    #[error("ant {0} does not exist")]
    UnknownAgent(AgentId),
}

pub type ColonyResult<T> = Result<T, ColonyError>;
