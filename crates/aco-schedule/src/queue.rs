//! `EventQueue` — the logical-time priority queue.
//!
//! Keyed by `(time, insertion sequence)` in a `BTreeMap`.  `f64` has no total
//! order, so the time is wrapped in `OrderedFloat`; the sequence number makes
//! every key unique and pops events with equal times in the order they were
//! inserted.
//!
//! Both `insert` and `pop_min` are O(log E) with E the number of pending
//! events.  For a run with A ants and K active edges, E ≈ A + K + 1.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use aco_core::SimTime;

use crate::Event;

type Key = (OrderedFloat<f64>, u64);

/// Pending events ordered by time, FIFO among equal times.
#[derive(Default, Debug)]
pub struct EventQueue {
    inner:    BTreeMap<Key, Event>,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` at `event.time`.
    pub fn insert(&mut self, event: Event) {
        debug_assert!(!event.time.0.is_nan(), "event time is NaN");
        let key = (OrderedFloat(event.time.0), self.next_seq);
        self.next_seq += 1;
        self.inner.insert(key, event);
    }

    /// Remove and return the earliest event.
    pub fn pop_min(&mut self) -> Option<Event> {
        self.inner.pop_first().map(|(_, event)| event)
    }

    /// Time of the earliest event without removing it.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.inner.keys().next().map(|(t, _)| SimTime(t.0))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Drop every pending event.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}
