//! `aco-colony` — the ants and the state they share.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`pheromone`]   | `PheromoneMatrix` — symmetric, non-negative `N × N` levels   |
//! | [`cycle`]       | `CycleRecord`, `CycleSet` (deduplicated, weight-ranked)      |
//! | [`trails`]      | `Trails` — matrix + cycles + subscriber list                 |
//! | [`agent`]       | `Ant` — current node, unvisited set, path                    |
//! | [`movement`]    | `MovementAlgorithm` trait, `MoveContext`, `AntColonyOptimization` |
//! | [`colony`]      | `Colony` — nest, ants, per-ant RNGs, `Trails`                |
//! | [`error`]       | `ColonyError`, `ColonyResult<T>`                             |
//!
//! # Borrowing
//!
//! An ant's move reads the graph and writes the shared [`Trails`] while the
//! ant itself is borrowed mutably.  `Colony` keeps ants, their RNGs, and the
//! trails in separate fields so [`Colony::advance_ant`] can hand out the
//! three disjoint borrows at once.

pub mod agent;
pub mod colony;
pub mod cycle;
pub mod error;
pub mod movement;
pub mod pheromone;
pub mod trails;


pub use agent::Ant;
pub use colony::Colony;
pub use cycle::{CycleRecord, CycleSet};
pub use error::{ColonyError, ColonyResult};
pub use movement::{AntColonyOptimization, MoveContext, MovementAlgorithm, preference};
pub use pheromone::PheromoneMatrix;
pub use trails::{PheromoneSubscriber, SubscriberRef, Trails};
