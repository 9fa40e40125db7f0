//! Turning command-line input into simulation parameters and a graph.

use std::path::Path;

use anyhow::{Context, Result, bail};

use aco_core::{NodeId, SimParams, SimRng};
use aco_graph::{AdjacencyGraph, load_problem, random_hamiltonian};

/// Names of the eleven `-r` values, in order.
pub const RANDOM_FIELDS: [&str; 11] = [
    "numNodes", "maxWeight", "nestNode", "alpha", "beta", "delta", "eta", "rho", "gamma", "colonySize", "horizon",
];

/// Parsed `-r` values.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomSpec {
    pub node_count:  usize,
    pub max_weight:  u64,
    pub nest:        NodeId,
    pub alpha:       f64,
    pub beta:        f64,
    pub delta:       f64,
    pub eta:         f64,
    pub rho:         f64,
    pub gamma:       f64,
    pub colony_size: usize,
    pub horizon:     f64,
}

impl RandomSpec {
    pub fn parse(values: &[String]) -> Result<Self> {
        if values.len() != RANDOM_FIELDS.len() {
            bail!("-r expects {} values ({}), got {}", RANDOM_FIELDS.len(), RANDOM_FIELDS.join(" "), values.len());
        }
        Ok(Self {
            node_count:  value(values, 0)?,
            max_weight:  value(values, 1)?,
            nest:        NodeId(value(values, 2)?),
            alpha:       value(values, 3)?,
            beta:        value(values, 4)?,
            delta:       value(values, 5)?,
            eta:         value(values, 6)?,
            rho:         value(values, 7)?,
            gamma:       value(values, 8)?,
            colony_size: value(values, 9)?,
            horizon:     value(values, 10)?,
        })
    }

    pub fn params(&self, seed: u64, observations: u32) -> SimParams {
        SimParams {
            nest:        self.nest,
            alpha:       self.alpha,
            beta:        self.beta,
            delta:       self.delta,
            eta:         self.eta,
            rho:         self.rho,
            gamma:       self.gamma,
            colony_size: self.colony_size,
            horizon:     self.horizon,
            seed,
            observations,
        }
    }
}

fn value<T>(values: &[String], i: usize) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    values[i]
        .parse()
        .with_context(|| format!("invalid value `{}` for {}", values[i], RANDOM_FIELDS[i]))
}

/// Parameters and graph for one run, validated against each other.
pub struct Setup {
    pub params: SimParams,
    pub graph:  AdjacencyGraph,
}

impl Setup {
    /// Random-graph mode.  The graph is drawn from the run seed.
    pub fn random(spec: &RandomSpec, seed: u64, observations: u32) -> Result<Self> {
        let mut rng = SimRng::new(seed);
        let graph = random_hamiltonian(spec.node_count, spec.max_weight, &mut rng)
            .context("cannot generate random graph")?;
        Self::checked(spec.params(seed, observations), graph)
    }

    /// File mode.
    pub fn from_file(path: &Path, seed: u64, observations: u32) -> Result<Self> {
        let problem = load_problem(path).with_context(|| format!("cannot load problem file {}", path.display()))?;
        let mut params = problem.header.into_params(seed);
        params.observations = observations;
        Self::checked(params, problem.graph)
    }

    fn checked(params: SimParams, graph: AdjacencyGraph) -> Result<Self> {
        use aco_graph::WeightedGraph;
        params.validate(graph.node_count()).context("invalid simulation parameters")?;
        Ok(Self { params, graph })
    }
}
