//! `aco` — run an ant colony over a weighted graph and report the Hamiltonian
//! cycles it discovers.
//!
//! # Examples
//!
//! ```bash
//! # Random 10-node graph, max edge weight 20, nest 1, 200 ants, horizon 300
//! aco -r 10 20 1 1.0 1.0 0.2 2.0 10.0 0.5 200 300.0
//!
//! # Problem file, fixed seed, CSV export
//! aco -f problem.txt --seed 42 --csv out/
//! ```
//!
//! Logs go to stderr (`RUST_LOG` overrides the default filter); the input
//! echo and observation reports go to stdout.

mod input;


use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use aco_core::params::DEFAULT_OBSERVATIONS;
use aco_output::{CsvWriter, SimOutputObserver, TextReport, write_input};
use aco_sim::SimBuilder;

use input::{RANDOM_FIELDS, RandomSpec, Setup};

/// Ant colony search for low-weight Hamiltonian cycles.
///
/// Exactly one of `-r` (random graph) or `-f` (problem file) is required.
#[derive(Parser, Debug)]
#[command(name = "aco", version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["random", "file"])))]
struct Args {
    /// Generate a random graph: numNodes maxWeight nestNode alpha beta delta
    /// eta rho gamma colonySize horizon
    #[arg(short = 'r', num_args = 11, value_names = RANDOM_FIELDS, allow_negative_numbers = true)]
    random: Option<Vec<String>>,

    /// Read parameters and the weight matrix from a problem file
    #[arg(short = 'f', value_name = "FILE")]
    file: Option<PathBuf>,

    /// Random seed for reproducible results.  When omitted, a random seed is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of evenly spaced observation reports
    #[arg(long, default_value_t = DEFAULT_OBSERVATIONS)]
    observations: u32,

    /// Also write observations.csv and cycles.csv into this directory
    #[arg(long, value_name = "DIR")]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,aco_sim=info,aco=info")),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "seed selected");

    // ── Input (all validation happens here) ───────────────────────────────
    let setup = if let Some(values) = &args.random {
        Setup::random(&RandomSpec::parse(values)?, seed, args.observations)?
    } else if let Some(path) = &args.file {
        Setup::from_file(path, seed, args.observations)?
    } else {
        bail!("one of -r or -f is required");
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_input(&mut out, &setup.params, &setup.graph).context("cannot write to stdout")?;

    let export = match &args.csv {
        Some(dir) => Some(SimOutputObserver::new(
            CsvWriter::new(dir).with_context(|| format!("cannot create CSV output in {}", dir.display()))?,
        )),
        None => None,
    };

    // ── Run ───────────────────────────────────────────────────────────────
    let mut sim = SimBuilder::new(setup.params, setup.graph).build()?;
    let mut observer = (TextReport::new(out), export);
    let stats = sim.run(&mut observer)?;

    let (mut report, mut export) = observer;
    if let Some(e) = report.take_error() {
        return Err(e).context("cannot write report");
    }
    if let Some(e) = export.as_mut().and_then(SimOutputObserver::take_error) {
        return Err(e).context("cannot write CSV output");
    }
    report.into_inner().flush()?;

    // ── Summary ───────────────────────────────────────────────────────────
    match sim.colony.best() {
        Some(best) => info!(
            %best,
            cycles             = sim.colony.trails().cycles().len(),
            move_events        = stats.move_events,
            evaporation_events = stats.evaporation_events,
            "best Hamiltonian cycle"
        ),
        None => info!(
            move_events        = stats.move_events,
            evaporation_events = stats.evaporation_events,
            "no Hamiltonian cycle found"
        ),
    }
    Ok(())
}
