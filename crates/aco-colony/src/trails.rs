//! Shared colony state: the pheromone matrix, the discovered cycles, and the
//! subscribers notified when an edge first gains pheromone.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

use aco_core::NodeId;

use crate::{CycleRecord, CycleSet, PheromoneMatrix};

// ── Subscribers ───────────────────────────────────────────────────────────────

/// Receives zero → positive pheromone transitions.
///
/// Notification is synchronous and happens inside the
/// [`Trails::update_level`] call that caused the transition.
pub trait PheromoneSubscriber {
    fn on_edge_activated(&mut self, u: NodeId, v: NodeId);
}

/// Shared handle to a subscriber.  The subscriber's owner keeps the strong
/// reference; [`Trails`] only holds a weak one.
pub type SubscriberRef = Rc<RefCell<dyn PheromoneSubscriber>>;

// ── Trails ────────────────────────────────────────────────────────────────────

/// Pheromone levels, cycle ranking, and subscriber list.
///
/// Mutated by exactly one event at a time; the single-threaded event loop is
/// what serialises `update_level` and `add_cycle`.
#[derive(Debug)]
pub struct Trails {
    pheromones:  PheromoneMatrix,
    cycles:      CycleSet,
    subscribers: Vec<Weak<RefCell<dyn PheromoneSubscriber>>>,
}

impl Trails {
    pub fn new(node_count: usize) -> Self {
        Self {
            pheromones:  PheromoneMatrix::new(node_count),
            cycles:      CycleSet::new(),
            subscribers: Vec::new(),
        }
    }

    // ── Subscriptions ─────────────────────────────────────────────────────

    pub fn subscribe(&mut self, subscriber: &SubscriberRef) {
        self.subscribers.push(Rc::downgrade(subscriber));
    }

    pub fn unsubscribe(&mut self, subscriber: &SubscriberRef) {
        let target = Rc::downgrade(subscriber);
        self.subscribers.retain(|s| !s.ptr_eq(&target));
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.iter().filter(|s| s.strong_count() > 0).count()
    }

    fn notify(&mut self, u: NodeId, v: NodeId) {
        // Drop subscribers whose owner has gone away.
        self.subscribers.retain(|s| s.strong_count() > 0);
        for subscriber in &self.subscribers {
            if let Some(subscriber) = subscriber.upgrade() {
                subscriber.borrow_mut().on_edge_activated(u, v);
            }
        }
    }

    // ── Pheromones ────────────────────────────────────────────────────────

    pub fn pheromones(&self) -> &PheromoneMatrix {
        &self.pheromones
    }

    #[inline]
    pub fn level(&self, u: NodeId, v: NodeId) -> f64 {
        self.pheromones.level(u, v)
    }

    /// Add `delta` to the level of edge `(u, v)`, clamping at zero.
    ///
    /// Returns the level *before* the update when the call takes the edge
    /// from exactly zero to positive (subscribers are notified), and the
    /// level *after* the update otherwise.
    pub fn update_level(&mut self, u: NodeId, v: NodeId, delta: f64) -> f64 {
        let old = self.pheromones.level(u, v);
        self.pheromones.set(u, v, old + delta);

        if delta > 0.0 && old == 0.0 {
            debug!(%u, %v, level = delta, "edge gained pheromone");
            self.notify(u, v);
            return old;
        }
        self.pheromones.level(u, v)
    }

    // ── Cycles ────────────────────────────────────────────────────────────

    pub fn cycles(&self) -> &CycleSet {
        &self.cycles
    }

    /// Record a closed cycle unless the same node sequence is already known.
    pub fn add_cycle(&mut self, nodes: Vec<NodeId>, weight: u64) -> bool {
        self.cycles.insert(nodes, weight)
    }

    pub fn best(&self) -> Option<&CycleRecord> {
        self.cycles.best()
    }

    pub fn ranked_cycles(&self, n: usize) -> &[CycleRecord] {
        self.cycles.ranked(n)
    }
}
