//! `aco-core` — foundational types for the `rust_aco` colony simulator.
//!
//! This crate is a dependency of every other `aco-*` crate.  It has no
//! `aco-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `NodeId`                                   |
//! | [`time`]        | `SimTime` (logical clock value)                       |
//! | [`params`]      | `SimParams`, `MoveParams`                             |
//! | [`rng`]         | `AgentRng` (per-ant), `SimRng` (global)               |
//! | [`error`]       | `AcoError`, `AcoResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{AcoError, AcoResult};
pub use ids::{AgentId, NodeId};
pub use params::{MoveParams, SimParams};
pub use rng::{AgentRng, SimRng};
pub use time::SimTime;
