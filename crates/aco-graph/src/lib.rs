//! `aco-graph` — the weighted graph the colony searches, and the two ways of
//! obtaining one.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`graph`]    | `WeightedGraph` trait, `AdjacencyGraph`, `GraphBuilder`    |
//! | [`generate`] | `random_hamiltonian` — random graph with a planted cycle   |
//! | [`loader`]   | `load_problem`, `graph_from_matrix`, `ProblemHeader`       |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                             |
//!
//! The simulator core only ever sees a `&G where G: WeightedGraph`; the graph
//! is built once, before the run, and never mutated afterwards.

pub mod error;
pub mod generate;
pub mod graph;
pub mod loader;


pub use error::{GraphError, GraphResult};
pub use generate::random_hamiltonian;
pub use graph::{AdjacencyGraph, GraphBuilder, MAX_NODES, WeightedGraph};
pub use loader::{Problem, ProblemHeader, graph_from_matrix, load_problem, load_problem_reader};
