//! `aco-sim` — discrete-event loop orchestrator for the rust_aco simulator.
//!
//! # Event loop
//!
//! ```text
//! seed:   one Move per ant at Exp(delta), Notification #1 at T/obs
//! while clock < T:
//!   ① Pop      — earliest event (FIFO among equal times); clock = its time
//!   ② Dispatch — Move         → ant steps; re-armed at +Exp(mean) if < T
//!                Evaporation  → level -= rho; re-armed at +Exp(eta) while > 0
//!                Notification → report to the observer; schedule the next one
//!   ③ Activate — every edge that went from zero to positive pheromone
//!                during ② gets an Evaporation at clock + Exp(eta)
//! ```
//!
//! Step ③ is how the simulator acts as the colony's pheromone subscriber:
//! the colony notifies an [`ActivationInbox`] synchronously, and the loop
//! drains it once the dispatching event has released the colony.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use aco_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(params, graph).build()?;
//! let stats = sim.run(&mut NoopObserver)?;
//! println!("best: {:?}", sim.colony.best());
//! ```

pub mod builder;
pub mod error;
pub mod inbox;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use inbox::ActivationInbox;
pub use observer::{NoopObserver, Observation, SimObserver, SimStats, TOP_CANDIDATES};
pub use sim::Simulator;
