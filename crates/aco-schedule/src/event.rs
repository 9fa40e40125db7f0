//! Event payloads.
//!
//! Every event owns everything it needs to be re-armed: a Move event carries
//! its ant, the move parameters and the horizon; an Evaporation event carries
//! its edge and both evaporation parameters.  Re-arming an event is just
//! [`Event::rescheduled`] followed by another `insert`.

use aco_core::{AgentId, MoveParams, NodeId, SimTime};

// ── Payloads ──────────────────────────────────────────────────────────────────

/// One ant takes one step.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveEvent {
    pub agent:   AgentId,
    pub params:  MoveParams,
    /// Re-armed only while the next firing time is strictly before this.
    pub horizon: SimTime,
}

impl MoveEvent {
    #[inline]
    pub fn rearms_at(&self, time: SimTime) -> bool {
        time < self.horizon
    }
}

/// Pheromone decays on edge `(u, v)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaporationEvent {
    pub u:   NodeId,
    pub v:   NodeId,
    /// Amount removed per firing.
    pub rho: f64,
    /// Mean interval between firings.
    pub eta: f64,
}

impl EvaporationEvent {
    /// Re-armed only while the edge still carries pheromone.
    #[inline]
    pub fn rearms_with(&self, level: f64) -> bool {
        level > 0.0
    }
}

/// The `seq`-th periodic observation (1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotificationEvent {
    pub seq: u32,
}

// ── Event ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Move(MoveEvent),
    Evaporation(EvaporationEvent),
    Notification(NotificationEvent),
}

/// A timestamped event.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    pub time: SimTime,
    pub kind: EventKind,
}

impl Event {
    pub fn movement(time: SimTime, agent: AgentId, params: MoveParams, horizon: SimTime) -> Self {
        Self { time, kind: EventKind::Move(MoveEvent { agent, params, horizon }) }
    }

    pub fn evaporation(time: SimTime, u: NodeId, v: NodeId, rho: f64, eta: f64) -> Self {
        Self { time, kind: EventKind::Evaporation(EvaporationEvent { u, v, rho, eta }) }
    }

    pub fn notification(time: SimTime, seq: u32) -> Self {
        Self { time, kind: EventKind::Notification(NotificationEvent { seq }) }
    }

    /// The same event, `delay` time units later.
    #[inline]
    pub fn rescheduled(self, delay: f64) -> Self {
        Self { time: self.time + delay, ..self }
    }

    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self.kind {
            EventKind::Move(_)         => "move",
            EventKind::Evaporation(_)  => "evaporation",
            EventKind::Notification(_) => "notification",
        }
    }
}
