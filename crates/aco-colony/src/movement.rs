//! The movement algorithm: how an ant chooses its next step.
//!
//! # Decision order
//!
//! Each call takes exactly one of four branches:
//!
//! ```text
//! ① some neighbour is unvisited          → step forward (roulette if > 1)
//! ② no such neighbour, nodes remain      → backtrack
//! ③ nothing remains, nest is adjacent    → close the cycle, deposit, restart
//! ④ nothing remains, nest not adjacent   → backtrack
//! ```
//!
//! Forward and backtrack choices use the same roulette: candidate `c` gets
//! preference `(alpha + pheromone(cur, c)) / (beta + weight(cur, c))`, the
//! preferences are normalised into a cumulative distribution, and the first
//! candidate whose cumulative probability is `>=` a uniform `[0, 1)` draw
//! wins.
//!
//! Every branch reports `delta * weight` of the last edge on the ant's path
//! once the move is applied.  A backtrack that leaves only the nest reports
//! the edge it walked back along.

use tracing::{debug, error};

use aco_core::{AgentRng, MoveParams, NodeId};
use aco_graph::WeightedGraph;

use crate::{Ant, ColonyError, ColonyResult, Trails};

// ── MoveContext ───────────────────────────────────────────────────────────────

/// Everything outside the ant that a move reads or writes.
pub struct MoveContext<'a> {
    pub graph:  &'a dyn WeightedGraph,
    pub trails: &'a mut Trails,
    pub params: &'a MoveParams,
}

// ── MovementAlgorithm ─────────────────────────────────────────────────────────

/// Pluggable movement strategy.
///
/// Implementations hold no per-ant state: everything an ant knows lives in
/// the [`Ant`] itself, and shared state lives in [`Trails`].
pub trait MovementAlgorithm {
    /// Move `ant` one step and return the mean traversal time of the edge it
    /// walked (`delta * weight`).
    fn advance(&self, ant: &mut Ant, ctx: &mut MoveContext<'_>, rng: &mut AgentRng) -> ColonyResult<f64>;
}

/// Unnormalised preference for walking `from → to`.
#[inline]
pub fn preference(ctx: &MoveContext<'_>, from: NodeId, to: NodeId) -> f64 {
    (ctx.params.alpha + ctx.trails.level(from, to)) / (ctx.params.beta + ctx.graph.weight(from, to) as f64)
}

// ── AntColonyOptimization ─────────────────────────────────────────────────────

/// The Hamiltonian-cycle search rule described in the module docs.
#[derive(Clone, Copy, Debug, Default)]
pub struct AntColonyOptimization;

impl MovementAlgorithm for AntColonyOptimization {
    fn advance(&self, ant: &mut Ant, ctx: &mut MoveContext<'_>, rng: &mut AgentRng) -> ColonyResult<f64> {
        let graph = ctx.graph;
        let current = ant.current();
        let adjacent = graph.adjacent(current);
        if adjacent.is_empty() {
            error!(agent = %ant.id(), node = %current, "ant reached a node with no neighbours");
            return Err(ColonyError::DeadEnd { agent: ant.id(), node: current });
        }

        let forward: Vec<NodeId> = adjacent.iter().copied().filter(|&n| ant.is_unvisited(n)).collect();

        // ① forward
        if !forward.is_empty() {
            let next = match forward.as_slice() {
                [only] => *only,
                candidates => roulette(ctx, current, candidates, rng),
            };
            ant.visit(next);
            return Ok(ant.last_edge_time(ctx.graph, ctx.params));
        }

        // ③ close
        if !ant.has_unvisited() && adjacent.contains(&ant.nest()) {
            return Ok(close_cycle(ant, ctx));
        }

        // ② / ④ backtrack
        backtrack(ant, ctx, adjacent, rng)
    }
}

fn close_cycle(ant: &mut Ant, ctx: &mut MoveContext<'_>) -> f64 {
    ant.close_cycle();
    let weight = ant.update_pheromones(ctx.graph, ctx.trails, ctx.params.gamma);
    let time = ant.last_edge_time(ctx.graph, ctx.params);
    let cycle = ant.finish_episode();

    debug!(agent = %ant.id(), weight, "hamiltonian cycle closed");
    ctx.trails.add_cycle(cycle, weight);
    time
}

fn backtrack(
    ant:      &mut Ant,
    ctx:      &mut MoveContext<'_>,
    adjacent: &[NodeId],
    rng:      &mut AgentRng,
) -> ColonyResult<f64> {
    let current = ant.current();
    let target = match adjacent {
        [only] => *only,
        candidates => roulette(ctx, current, candidates, rng),
    };
    let walked = ctx.params.delta * ctx.graph.weight(current, target) as f64;
    ant.backtrack_to(target)?;
    match ant.path().len() {
        0 | 1 => Ok(walked),
        _ => Ok(ant.last_edge_time(ctx.graph, ctx.params)),
    }
}

/// Pick one of `candidates` (non-empty) with probability proportional to its
/// [`preference`].
fn roulette(ctx: &MoveContext<'_>, from: NodeId, candidates: &[NodeId], rng: &mut AgentRng) -> NodeId {
    let prefs: Vec<f64> = candidates.iter().map(|&to| preference(ctx, from, to)).collect();
    let total: f64 = prefs.iter().sum();

    // All-zero preferences (alpha = 0 on fresh edges) carry no information.
    if !(total.is_finite() && total > 0.0) {
        return candidates[rng.gen_range(0..candidates.len())];
    }

    let draw = rng.unit();
    let mut cumulative = 0.0;
    for (&node, &p) in candidates.iter().zip(&prefs) {
        cumulative += p / total;
        if draw <= cumulative {
            return node;
        }
    }
    // Rounding can leave the last cumulative value a hair below 1.
    candidates[candidates.len() - 1]
}
