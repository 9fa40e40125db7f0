//! `aco-schedule` — events, the event queue, and random delays.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                       |
//! |-----------------|----------------------------------------------------------------|
//! | [`event`]       | `Event`, `EventKind`, `MoveEvent`, `EvaporationEvent`, `NotificationEvent` |
//! | [`queue`]       | `EventQueue` (`BTreeMap<(time, seq), Event>`)                  |
//! | [`interval`]    | `RandomInterval`, `IntervalFamily`, `Exponential`              |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                           |
//!
//! # Execution model (summary)
//!
//! ```text
//! loop:
//!   event  = queue.pop_min()          // smallest time, FIFO among equals
//!   clock  = event.time
//!   dispatch(event)                   // may re-insert the same event later
//! ```
//!
//! Events are plain data.  What an event *does* is decided by whoever pops
//! it (the simulator matches on [`EventKind`]); this crate only orders them
//! and supplies the random delays used to re-arm them.

pub mod error;
pub mod event;
pub mod interval;
pub mod queue;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use event::{EvaporationEvent, Event, EventKind, MoveEvent, NotificationEvent};
pub use interval::{Exponential, ExponentialFamily, IntervalFamily, RandomInterval};
pub use queue::EventQueue;
