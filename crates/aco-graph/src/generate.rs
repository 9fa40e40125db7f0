//! Random graph generation with a guaranteed Hamiltonian cycle.
//!
//! The generator first plants a cycle through every node (a shuffled
//! permutation of `1..=N`, closed back to its first element), then sprinkles
//! a random number of extra edges over the remaining node pairs.  Every
//! generated graph therefore admits at least one Hamiltonian cycle, which is
//! the precondition the colony relies on.

use tracing::debug;

use aco_core::{NodeId, SimRng};

use crate::{AdjacencyGraph, GraphBuilder, GraphError, GraphResult};

/// Generate an `n`-node graph with edge weights drawn from `1..=max_weight`.
///
/// The number of edges is `n + k`, with `k` uniform in
/// `0..=(n(n-1)/2 - n)`.  Requires `n >= 3` (a cycle needs three distinct
/// edges), `n <= `[`MAX_NODES`] and `max_weight >= 1`.
///
/// [`MAX_NODES`]: crate::MAX_NODES
pub fn random_hamiltonian(n: usize, max_weight: u64, rng: &mut SimRng) -> GraphResult<AdjacencyGraph> {
    if n < 3 {
        return Err(GraphError::Generator(format!(
            "a random Hamiltonian graph needs at least 3 nodes, got {n}"
        )));
    }
    if max_weight == 0 {
        return Err(GraphError::Generator("maximum edge weight must be at least 1".into()));
    }

    let mut builder = GraphBuilder::try_new(n)?;

    // ── Planted cycle ─────────────────────────────────────────────────────
    let mut order: Vec<NodeId> = NodeId::all(n).collect();
    rng.shuffle(&mut order);
    for i in 0..n {
        let (u, v) = (order[i], order[(i + 1) % n]);
        builder.add_edge(u, v, rng.gen_range(1..=max_weight))?;
    }

    // ── Extra edges ───────────────────────────────────────────────────────
    let mut free: Vec<(NodeId, NodeId)> = Vec::with_capacity(n * (n - 1) / 2 - n);
    for u in NodeId::all(n) {
        for v in NodeId::all(n).filter(|&v| v > u) {
            if !builder.contains(u, v) {
                free.push((u, v));
            }
        }
    }
    let extra = rng.gen_range(0..=free.len());
    rng.shuffle(&mut free);
    for &(u, v) in &free[..extra] {
        builder.add_edge(u, v, rng.gen_range(1..=max_weight))?;
    }

    debug!(nodes = n, edges = n + extra, "generated random Hamiltonian graph");
    Ok(builder.build())
}
