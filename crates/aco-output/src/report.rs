//! Plain-text reports: the input echo printed before a run and one block per
//! observation.
//!
//! ```text
//! Observation 3:
//!         Present instant:                15
//!         Number of move events:          412
//!         Number of evaporation events:   37
//!         Top candidate cycles:           {1,4,3,2}:11
//!                                         {1,2,4,3}:14
//!         Best Hamiltonian cycle:         {1,2,3,4}:10
//! ```

use std::io::{self, Write};

use aco_colony::CycleSet;
use aco_core::SimParams;
use aco_graph::{AdjacencyGraph, WeightedGraph};
use aco_sim::{Observation, SimObserver, SimStats};

const LABEL_WIDTH: usize = 32;
const INDENT: &str = "\t";

/// Print the parameter table and the weight matrix.
pub fn write_input<W: Write + ?Sized>(out: &mut W, params: &SimParams, graph: &AdjacencyGraph) -> io::Result<()> {
    let n = graph.node_count();
    writeln!(out, "Input parameters:")?;
    let rows: [(String, &str); 10] = [
        (n.to_string(),                  "number of nodes in the graph"),
        (params.nest.to_string(),        "the nest node"),
        (params.alpha.to_string(),       "alpha, ant move event"),
        (params.beta.to_string(),        "beta, ant move event"),
        (params.delta.to_string(),       "delta, ant move event"),
        (params.eta.to_string(),         "eta, pheromone evaporation event"),
        (params.rho.to_string(),         "rho, pheromone evaporation event"),
        (params.gamma.to_string(),       "pheromone level"),
        (params.colony_size.to_string(), "ant colony size"),
        (params.horizon.to_string(),     "final instant"),
    ];
    for (value, label) in rows {
        writeln!(out, "{INDENT}{value:>10} : {label}")?;
    }

    writeln!(out)?;
    writeln!(out, "{INDENT}with graph:")?;
    for row in graph.to_string().lines() {
        writeln!(out, "{INDENT}{INDENT}{row}")?;
    }
    writeln!(out)
}

/// Print one observation block followed by a blank line.
pub fn write_observation<W: Write + ?Sized>(out: &mut W, obs: &Observation) -> io::Result<()> {
    writeln!(out, "Observation {}:", obs.seq)?;
    line(out, "Present instant:", &obs.time.to_string())?;
    line(out, "Number of move events:", &obs.move_events.to_string())?;
    line(out, "Number of evaporation events:", &obs.evaporation_events.to_string())?;

    match obs.candidates.split_first() {
        None => line(out, "Top candidate cycles:", "")?,
        Some((first, rest)) => {
            line(out, "Top candidate cycles:", &first.to_string())?;
            for cycle in rest {
                line(out, "", &cycle.to_string())?;
            }
        }
    }

    let best = obs.best.as_ref().map_or_else(|| "{}".to_owned(), |c| c.to_string());
    line(out, "Best Hamiltonian cycle:", &best)?;
    writeln!(out)
}

fn line<W: Write + ?Sized>(out: &mut W, label: &str, value: &str) -> io::Result<()> {
    let text = format!("{INDENT}{label:<LABEL_WIDTH$}{value}");
    writeln!(out, "{}", text.trim_end())
}

// ── TextReport ────────────────────────────────────────────────────────────────

/// A [`SimObserver`] that prints every observation block to `out`.
///
/// Like [`SimOutputObserver`][crate::SimOutputObserver], the first write
/// error is stored and later calls become no-ops.
pub struct TextReport<W: Write> {
    out:        W,
    last_error: Option<io::Error>,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_error: None }
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn store_err(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> SimObserver for TextReport<W> {
    fn on_observation(&mut self, observation: &Observation) {
        if self.last_error.is_some() {
            return;
        }
        let result = write_observation(&mut self.out, observation);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _stats: &SimStats, _cycles: &CycleSet) {
        let result = self.out.flush();
        self.store_err(result);
    }
}
