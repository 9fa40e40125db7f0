//! Simulation parameters.
//!
//! `SimParams` is the single explicit configuration object for a run.  It is
//! built by the application (from the command line or a problem file) and
//! passed by reference into the builder, the event loop, and every event
//! constructor, so nothing is held in global state.

use crate::{AcoError, AcoResult, NodeId, SimTime};

/// Default number of observation reports per run (one every `horizon / 20`).
pub const DEFAULT_OBSERVATIONS: u32 = 20;

// ── MoveParams ────────────────────────────────────────────────────────────────

/// The subset of parameters an ant needs to make one move.
///
/// Copied into every Move event so the event can re-schedule itself without
/// reaching back into the simulator.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveParams {
    /// Additive pheromone bias in the edge preference numerator.
    pub alpha: f64,
    /// Additive weight bias in the edge preference denominator.
    pub beta: f64,
    /// Mean traversal time per unit of edge weight.
    pub delta: f64,
    /// Pheromone deposit scale applied when a cycle closes.
    pub gamma: f64,
}

// ── SimParams ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimParams {
    /// Start and end node of every ant's search episode.
    pub nest: NodeId,

    pub alpha: f64,
    pub beta: f64,
    pub delta: f64,

    /// Mean interval between two evaporations of the same edge.
    pub eta: f64,

    /// Pheromone removed from an edge by one evaporation.
    pub rho: f64,

    pub gamma: f64,

    /// Number of ants.
    pub colony_size: usize,

    /// Final instant.  Move events are not re-armed at or past it.
    pub horizon: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Number of evenly spaced observation reports.  Default: 20.
    pub observations: u32,
}

impl SimParams {
    /// The parameters every Move event carries.
    #[inline]
    pub fn move_params(&self) -> MoveParams {
        MoveParams {
            alpha: self.alpha,
            beta:  self.beta,
            delta: self.delta,
            gamma: self.gamma,
        }
    }

    /// The logical time at which the simulation ends.
    #[inline]
    pub fn end_time(&self) -> SimTime {
        SimTime(self.horizon)
    }

    /// Instant of the `k`-th observation (1-based): `k * horizon / observations`.
    ///
    /// The last observation lands exactly on the horizon.
    #[inline]
    pub fn observation_time(&self, k: u32) -> SimTime {
        if k >= self.observations {
            return self.end_time();
        }
        SimTime(k as f64 * self.horizon / self.observations as f64)
    }

    /// Check the parameters against a graph of `node_count` nodes.
    ///
    /// Called before any simulation state is built; a failure here means the
    /// run never starts.
    pub fn validate(&self, node_count: usize) -> AcoResult<()> {
        if node_count < 2 {
            return Err(AcoError::Config(format!(
                "graph needs at least 2 nodes, got {node_count}"
            )));
        }
        if self.nest.0 == 0 || self.nest.index() > node_count {
            return Err(AcoError::NestOutOfRange { nest: self.nest, node_count });
        }
        if self.colony_size == 0 {
            return Err(AcoError::Config("colony size must be at least 1".into()));
        }
        if self.observations == 0 {
            return Err(AcoError::Config("observation count must be at least 1".into()));
        }

        non_negative("alpha", self.alpha)?;
        non_negative("beta", self.beta)?;
        non_negative("rho", self.rho)?;
        non_negative("gamma", self.gamma)?;
        positive("delta", self.delta)?;
        positive("eta", self.eta)?;
        positive("horizon", self.horizon)?;
        Ok(())
    }
}

fn non_negative(name: &str, value: f64) -> AcoResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AcoError::Config(format!("{name} must be a finite non-negative number, got {value}")))
    }
}

fn positive(name: &str, value: f64) -> AcoResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AcoError::Config(format!("{name} must be a finite positive number, got {value}")))
    }
}
