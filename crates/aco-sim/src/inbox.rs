//! Buffer between the colony's pheromone notifications and the event queue.

use aco_colony::PheromoneSubscriber;
use aco_core::NodeId;

/// Collects zero → positive edge activations until the event loop drains
/// them.
///
/// The colony calls [`on_edge_activated`](PheromoneSubscriber::on_edge_activated)
/// in the middle of an event, while it is still mutably borrowed by that
/// event.  Scheduling the matching Evaporation needs the queue and the RNG,
/// so the activation is parked here instead.
#[derive(Default, Debug)]
pub struct ActivationInbox {
    pending: Vec<(NodeId, NodeId)>,
}

impl ActivationInbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every activation received so far, in arrival order.
    pub fn drain(&mut self) -> Vec<(NodeId, NodeId)> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl PheromoneSubscriber for ActivationInbox {
    fn on_edge_activated(&mut self, u: NodeId, v: NodeId) {
        self.pending.push((u, v));
    }
}
