//! Observation reports and the observer trait that receives them.

use aco_colony::{CycleRecord, CycleSet};
use aco_core::SimTime;

/// How many ranked cycles (after the best) each observation carries.
pub const TOP_CANDIDATES: usize = 5;

// ── SimStats ──────────────────────────────────────────────────────────────────

/// Running event counters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimStats {
    /// Move events dispatched so far.
    pub move_events:        u64,
    /// Evaporation events dispatched so far.
    pub evaporation_events: u64,
    /// Notification events dispatched so far.
    pub observations:       u32,
    /// Zero → positive pheromone transitions (each one spawned an Evaporation).
    pub activations:        u64,
    /// Clock value when the loop stopped.
    pub end_time:           SimTime,
}

// ── Observation ───────────────────────────────────────────────────────────────

/// Snapshot taken by a Notification event.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    /// 1-based sequence number.
    pub seq:                u32,
    pub time:               SimTime,
    pub move_events:        u64,
    pub evaporation_events: u64,
    /// Up to [`TOP_CANDIDATES`] cycles following the best, lightest first.
    pub candidates:         Vec<CycleRecord>,
    pub best:               Option<CycleRecord>,
}

// ── SimObserver ───────────────────────────────────────────────────────────────

/// Callbacks invoked by [`Simulator::run`][crate::Simulator::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — best-weight tracker
///
/// ```rust,ignore
/// struct BestTrace(Vec<Option<u64>>);
///
/// impl SimObserver for BestTrace {
///     fn on_observation(&mut self, obs: &Observation) {
///         self.0.push(obs.best.as_ref().map(|c| c.weight));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first event is popped.
    fn on_sim_start(&mut self, _ants: usize, _horizon: SimTime) {}

    /// Called for every Notification event.
    fn on_observation(&mut self, _observation: &Observation) {}

    /// Called once after the loop stops, with every cycle discovered.
    fn on_sim_end(&mut self, _stats: &SimStats, _cycles: &CycleSet) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Feeds both observers, left first.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_sim_start(&mut self, ants: usize, horizon: SimTime) {
        self.0.on_sim_start(ants, horizon);
        self.1.on_sim_start(ants, horizon);
    }

    fn on_observation(&mut self, observation: &Observation) {
        self.0.on_observation(observation);
        self.1.on_observation(observation);
    }

    fn on_sim_end(&mut self, stats: &SimStats, cycles: &CycleSet) {
        self.0.on_sim_end(stats, cycles);
        self.1.on_sim_end(stats, cycles);
    }
}

/// An absent observer does nothing.
impl<O: SimObserver> SimObserver for Option<O> {
    fn on_sim_start(&mut self, ants: usize, horizon: SimTime) {
        if let Some(o) = self {
            o.on_sim_start(ants, horizon);
        }
    }

    fn on_observation(&mut self, observation: &Observation) {
        if let Some(o) = self {
            o.on_observation(observation);
        }
    }

    fn on_sim_end(&mut self, stats: &SimStats, cycles: &CycleSet) {
        if let Some(o) = self {
            o.on_sim_end(stats, cycles);
        }
    }
}
