//! The colony aggregate.

use tracing::trace;

use aco_core::{AgentId, AgentRng, MoveParams, NodeId, SimParams};
use aco_graph::WeightedGraph;

use crate::{Ant, ColonyError, ColonyResult, CycleRecord, MoveContext, MovementAlgorithm, SubscriberRef, Trails};

/// Nest, ants, per-ant RNGs, and the shared [`Trails`].
///
/// Ants and RNGs are parallel `Vec`s indexed by `AgentId`.  They are kept
/// apart from `trails` so one ant can be borrowed mutably while the shared
/// state is written.
pub struct Colony {
    nest:   NodeId,
    ants:   Vec<Ant>,
    rngs:   Vec<AgentRng>,
    trails: Trails,
}

impl Colony {
    /// Place `params.colony_size` ants at the nest of an `node_count`-node graph.
    pub fn new(params: &SimParams, node_count: usize) -> Self {
        let ants = (0..params.colony_size as u32)
            .map(|i| Ant::new(AgentId(i), params.nest, node_count))
            .collect();
        let rngs = (0..params.colony_size as u32)
            .map(|i| AgentRng::new(params.seed, AgentId(i)))
            .collect();
        Self {
            nest: params.nest,
            ants,
            rngs,
            trails: Trails::new(node_count),
        }
    }

    pub fn nest(&self) -> NodeId {
        self.nest
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    pub fn ant(&self, agent: AgentId) -> Option<&Ant> {
        self.ants.get(agent.index())
    }

    pub fn len(&self) -> usize {
        self.ants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ants.is_empty()
    }

    pub fn trails(&self) -> &Trails {
        &self.trails
    }

    /// Let `agent` make one move; returns the mean traversal time.
    pub fn advance_ant<M: MovementAlgorithm + ?Sized>(
        &mut self,
        agent:     AgentId,
        algorithm: &M,
        graph:     &dyn WeightedGraph,
        params:    &MoveParams,
    ) -> ColonyResult<f64> {
        let i = agent.index();
        let (Some(ant), Some(rng)) = (self.ants.get_mut(i), self.rngs.get_mut(i)) else {
            return Err(ColonyError::UnknownAgent(agent));
        };
        let mut ctx = MoveContext { graph, trails: &mut self.trails, params };
        let time = ant.advance(algorithm, &mut ctx, rng)?;
        trace!(%agent, node = %ant.current(), time, "ant moved");
        Ok(time)
    }

    // ── Shared-state operations ───────────────────────────────────────────

    pub fn subscribe(&mut self, subscriber: &SubscriberRef) {
        self.trails.subscribe(subscriber);
    }

    pub fn unsubscribe(&mut self, subscriber: &SubscriberRef) {
        self.trails.unsubscribe(subscriber);
    }

    #[inline]
    pub fn level(&self, u: NodeId, v: NodeId) -> f64 {
        self.trails.level(u, v)
    }

    /// See [`Trails::update_level`] for the return-value contract.
    pub fn update_level(&mut self, u: NodeId, v: NodeId, delta: f64) -> f64 {
        self.trails.update_level(u, v, delta)
    }

    pub fn add_cycle(&mut self, nodes: Vec<NodeId>, weight: u64) -> bool {
        self.trails.add_cycle(nodes, weight)
    }

    /// Up to `n` cycles following the best one.
    pub fn ranked_cycles(&self, n: usize) -> &[CycleRecord] {
        self.trails.ranked_cycles(n)
    }

    pub fn best(&self) -> Option<&CycleRecord> {
        self.trails.best()
    }
}
