//! The `Simulator` struct and its event loop.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, error, info, trace};

use aco_colony::{Colony, MovementAlgorithm};
use aco_core::{AgentId, SimParams, SimRng, SimTime};
use aco_graph::WeightedGraph;
use aco_schedule::{Event, EventKind, EventQueue, IntervalFamily};

use crate::{ActivationInbox, Observation, SimObserver, SimResult, SimStats, TOP_CANDIDATES};

/// The main simulation runner.
///
/// Owns the graph, the colony, the event queue and the logical clock.  All
/// state is mutated from the single loop in [`run`](Self::run), one event at
/// a time, so the colony's pheromone matrix and cycle set need no locking.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulator<G: WeightedGraph, M: MovementAlgorithm, I: IntervalFamily> {
    /// Run configuration.
    pub params: SimParams,

    /// The graph, read-only for the whole run.
    pub graph: G,

    /// Ants, pheromone trails and discovered cycles.
    pub colony: Colony,

    /// Logical clock: the time of the last popped event.
    pub clock: SimTime,

    /// Event counters.
    pub stats: SimStats,

    pub(crate) queue:     EventQueue,
    pub(crate) algorithm: M,
    pub(crate) intervals: I,
    /// Draws every event delay.  Ant decisions use the colony's per-ant RNGs.
    pub(crate) rng:       SimRng,
    /// Strong handle to the colony's pheromone subscriber.
    pub(crate) inbox:     Rc<RefCell<ActivationInbox>>,
    pub(crate) started:   bool,
}

impl<G: WeightedGraph, M: MovementAlgorithm, I: IntervalFamily> Simulator<G, M, I> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the clock reaches the horizon.
    ///
    /// On a colony invariant failure the loop stops at the failing event and
    /// the error is returned; the queue is emptied either way.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimStats> {
        info!(
            seed    = self.params.seed,
            nodes   = self.graph.node_count(),
            ants    = self.colony.len(),
            horizon = self.params.horizon,
            "simulation started"
        );
        observer.on_sim_start(self.colony.len(), self.params.end_time());

        let end = self.params.end_time();
        while self.clock < end {
            match self.step(observer) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    error!(time = %self.clock, error = %e, "simulation aborted");
                    self.queue.clear();
                    return Err(e);
                }
            }
        }
        self.queue.clear();
        self.stats.end_time = self.clock;

        info!(
            time               = %self.clock,
            move_events        = self.stats.move_events,
            evaporation_events = self.stats.evaporation_events,
            cycles             = self.colony.trails().cycles().len(),
            "simulation finished"
        );
        observer.on_sim_end(&self.stats, self.colony.trails().cycles());
        Ok(self.stats)
    }

    /// Pop and execute one event.  Returns `false` once the queue is empty.
    ///
    /// The initial events are scheduled on the first call.  Useful for tests
    /// and incremental stepping; ignores the horizon.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        if !self.started {
            self.seed_events()?;
        }
        let Some(event) = self.queue.pop_min() else {
            return Ok(false);
        };
        self.clock = event.time;
        trace!(time = %self.clock, kind = event.label(), "dispatch");

        self.dispatch(event, observer)?;
        self.schedule_evaporations()?;
        Ok(true)
    }

    /// Number of pending events.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    // ── Scheduling ────────────────────────────────────────────────────────

    /// One Move per ant at `Exp(delta)` and the first Notification.
    fn seed_events(&mut self) -> SimResult<()> {
        self.started = true;
        let params = self.params.move_params();
        let end = self.params.end_time();

        for i in 0..self.colony.len() {
            let delay = self.intervals.draw_with_mean(self.params.delta, self.rng.inner())?;
            let event = Event::movement(self.clock + delay, AgentId(i as u32), params, end);
            if event.time < end {
                self.queue.insert(event);
            }
        }
        self.queue.insert(Event::notification(self.params.observation_time(1), 1));
        debug!(events = self.queue.len(), "initial events scheduled");
        Ok(())
    }

    /// Turn every buffered pheromone activation into an Evaporation event.
    pub(crate) fn schedule_evaporations(&mut self) -> SimResult<()> {
        let activated = self.inbox.borrow_mut().drain();
        for (u, v) in activated {
            self.stats.activations += 1;
            let delay = self.intervals.draw_with_mean(self.params.eta, self.rng.inner())?;
            let event = Event::evaporation(self.clock + delay, u, v, self.params.rho, self.params.eta);
            trace!(%u, %v, at = %event.time, "evaporation scheduled");
            self.queue.insert(event);
        }
        Ok(())
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    pub(crate) fn dispatch<O: SimObserver>(&mut self, event: Event, observer: &mut O) -> SimResult<()> {
        match event.kind {
            EventKind::Move(m) => {
                self.stats.move_events += 1;
                let mean = self.colony.advance_ant(m.agent, &self.algorithm, &self.graph, &m.params)?;
                let delay = self.intervals.draw_with_mean(mean, self.rng.inner())?;
                let next = event.rescheduled(delay);
                if m.rearms_at(next.time) {
                    self.queue.insert(next);
                }
            }

            EventKind::Evaporation(ev) => {
                self.stats.evaporation_events += 1;
                let level = self.colony.update_level(ev.u, ev.v, -ev.rho);
                if ev.rearms_with(level) {
                    let delay = self.intervals.draw_with_mean(ev.eta, self.rng.inner())?;
                    self.queue.insert(event.rescheduled(delay));
                } else {
                    trace!(u = %ev.u, v = %ev.v, "edge dried out");
                }
            }

            EventKind::Notification(n) => {
                self.stats.observations += 1;
                let observation = self.observe(n.seq);
                observer.on_observation(&observation);
                if n.seq < self.params.observations {
                    let next = n.seq + 1;
                    self.queue.insert(Event::notification(self.params.observation_time(next), next));
                }
            }
        }
        Ok(())
    }

    /// Snapshot of the counters and the cycle ranking at the current clock.
    pub fn observe(&self, seq: u32) -> Observation {
        Observation {
            seq,
            time:               self.clock,
            move_events:        self.stats.move_events,
            evaporation_events: self.stats.evaporation_events,
            candidates:         self.colony.ranked_cycles(TOP_CANDIDATES).to_vec(),
            best:               self.colony.best().cloned(),
        }
    }
}
