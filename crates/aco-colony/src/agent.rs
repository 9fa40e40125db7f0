//! The ant: one search agent cycling through episodes.
//!
//! # Episode invariants
//!
//! While an episode is in progress:
//!
//! - `path[0] == nest`
//! - `current == *path.last()`
//! - `unvisited` and `path` are disjoint
//! - `path.len() + unvisited.len() == N`
//!
//! When the ant closes a cycle it briefly holds `[nest, .., nest]` in its
//! path; [`Ant::finish_episode`] hands out the cycle and restarts at
//! `[nest]` with every other node unvisited.

use std::collections::BTreeSet;

use aco_core::{AgentId, AgentRng, MoveParams, NodeId};
use aco_graph::WeightedGraph;

use crate::{ColonyError, ColonyResult, MoveContext, MovementAlgorithm, Trails};

/// One ant.
#[derive(Clone, Debug)]
pub struct Ant {
    id:         AgentId,
    nest:       NodeId,
    node_count: usize,
    current:    NodeId,
    unvisited:  BTreeSet<NodeId>,
    path:       Vec<NodeId>,
}

impl Ant {
    /// An ant at `nest` at the start of its first episode.
    pub fn new(id: AgentId, nest: NodeId, node_count: usize) -> Self {
        let mut ant = Self {
            id,
            nest,
            node_count,
            current:   nest,
            unvisited: BTreeSet::new(),
            path:      Vec::with_capacity(node_count + 1),
        };
        ant.restart();
        ant
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn nest(&self) -> NodeId {
        self.nest
    }

    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn path(&self) -> &[NodeId] {
        &self.path
    }

    pub fn unvisited(&self) -> &BTreeSet<NodeId> {
        &self.unvisited
    }

    #[inline]
    pub fn is_unvisited(&self, node: NodeId) -> bool {
        self.unvisited.contains(&node)
    }

    #[inline]
    pub fn has_unvisited(&self) -> bool {
        !self.unvisited.is_empty()
    }

    // ── Behaviour ─────────────────────────────────────────────────────────

    /// Make one move using `algorithm`; returns the mean traversal time of
    /// the edge just walked.
    pub fn advance<M: MovementAlgorithm + ?Sized>(
        &mut self,
        algorithm: &M,
        ctx:       &mut MoveContext<'_>,
        rng:       &mut AgentRng,
    ) -> ColonyResult<f64> {
        algorithm.advance(self, ctx, rng)
    }

    /// Deposit pheromone along the whole path and return its weight.
    ///
    /// Every consecutive pair gains `gamma * total_weight / path_weight`.
    pub fn update_pheromones(&self, graph: &dyn WeightedGraph, trails: &mut Trails, gamma: f64) -> u64 {
        let path_weight = self.path_weight(graph);
        if path_weight == 0 {
            return 0;
        }
        let deposit = gamma * graph.total_weight() as f64 / path_weight as f64;
        for pair in self.path.windows(2) {
            trails.update_level(pair[0], pair[1], deposit);
        }
        path_weight
    }

    /// Sum of edge weights along consecutive path entries.
    pub fn path_weight(&self, graph: &dyn WeightedGraph) -> u64 {
        self.path.windows(2).map(|p| graph.weight(p[0], p[1])).sum()
    }

    /// `delta * weight` of the last edge on the path, or 0 for a single-node
    /// path.
    pub fn last_edge_time(&self, graph: &dyn WeightedGraph, params: &MoveParams) -> f64 {
        match self.path.len() {
            0 | 1 => 0.0,
            n => params.delta * graph.weight(self.path[n - 2], self.path[n - 1]) as f64,
        }
    }

    // ── Path mutation (used by movement algorithms) ───────────────────────

    /// Step forward onto an unvisited node.
    pub fn visit(&mut self, node: NodeId) {
        debug_assert!(self.unvisited.contains(&node), "node {node} already visited");
        self.unvisited.remove(&node);
        self.path.push(node);
        self.current = node;
    }

    /// Walk the closing edge back to the nest.
    pub fn close_cycle(&mut self) {
        self.path.push(self.nest);
        self.current = self.nest;
    }

    /// End the episode: return the closed cycle (without the repeated nest)
    /// and restart at the nest.
    pub fn finish_episode(&mut self) -> Vec<NodeId> {
        let mut cycle = std::mem::replace(&mut self.path, Vec::with_capacity(self.node_count + 1));
        if cycle.len() > 1 && cycle.last() == Some(&self.nest) {
            cycle.pop();
        }
        self.current = self.nest;
        self.restart();
        cycle
    }

    /// Return to `target`, an earlier node of the path.
    ///
    /// Every node after `target` is popped off the path and put back into
    /// the unvisited set; the prefix up to and including `target` is kept.
    pub fn backtrack_to(&mut self, target: NodeId) -> ColonyResult<()> {
        let keep = self
            .path
            .iter()
            .rposition(|&n| n == target)
            .ok_or(ColonyError::NotOnPath { agent: self.id, target })?;
        for node in self.path.drain(keep + 1..) {
            self.unvisited.insert(node);
        }
        self.current = target;
        Ok(())
    }

    fn restart(&mut self) {
        self.path.clear();
        self.path.push(self.current);
        self.unvisited = NodeId::all(self.node_count).filter(|&n| n != self.current).collect();
    }
}
