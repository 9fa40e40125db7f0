//! Fluent builder for constructing a [`Simulator`].

use std::cell::RefCell;
use std::rc::Rc;

use aco_colony::{AntColonyOptimization, Colony, MovementAlgorithm, SubscriberRef};
use aco_core::{SimParams, SimRng, SimTime};
use aco_graph::WeightedGraph;
use aco_schedule::{EventQueue, ExponentialFamily, IntervalFamily};

use crate::{ActivationInbox, SimError, SimResult, SimStats, Simulator};

/// Fluent builder for [`Simulator<G, M, I>`].
///
/// # Required inputs
///
/// - [`SimParams`] — nest, move and evaporation parameters, horizon, seed
/// - `G: WeightedGraph` — the graph the ants search
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                   |
/// |--------------------|---------------------------|
/// | `.algorithm(m)`    | [`AntColonyOptimization`] |
/// | `.intervals(i)`    | [`ExponentialFamily`]     |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(params, graph)
///     .intervals(ExponentialFamily)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<G, M = AntColonyOptimization, I = ExponentialFamily> {
    params:    SimParams,
    graph:     G,
    algorithm: M,
    intervals: I,
}

impl<G: WeightedGraph> SimBuilder<G> {
    pub fn new(params: SimParams, graph: G) -> Self {
        Self {
            params,
            graph,
            algorithm: AntColonyOptimization,
            intervals: ExponentialFamily,
        }
    }
}

impl<G, M, I> SimBuilder<G, M, I>
where
    G: WeightedGraph,
    M: MovementAlgorithm,
    I: IntervalFamily,
{
    /// Replace the movement algorithm.
    pub fn algorithm<M2: MovementAlgorithm>(self, algorithm: M2) -> SimBuilder<G, M2, I> {
        SimBuilder {
            params:    self.params,
            graph:     self.graph,
            algorithm,
            intervals: self.intervals,
        }
    }

    /// Replace the random delay policy.
    pub fn intervals<I2: IntervalFamily>(self, intervals: I2) -> SimBuilder<G, M, I2> {
        SimBuilder {
            params:    self.params,
            graph:     self.graph,
            algorithm: self.algorithm,
            intervals,
        }
    }

    /// Validate the parameters against the graph, create the colony, and
    /// subscribe the simulator to its pheromone activations.
    pub fn build(self) -> SimResult<Simulator<G, M, I>> {
        let node_count = self.graph.node_count();
        self.params.validate(node_count)?;
        if u32::try_from(self.params.colony_size).is_err() {
            return Err(SimError::Config(format!(
                "colony size {} exceeds the agent id range",
                self.params.colony_size
            )));
        }

        // Both means must be acceptable to the delay policy before anything
        // is scheduled.
        self.intervals.with_mean(self.params.delta)?;
        self.intervals.with_mean(self.params.eta)?;

        let mut colony = Colony::new(&self.params, node_count);
        let inbox = Rc::new(RefCell::new(ActivationInbox::new()));
        let subscriber: SubscriberRef = inbox.clone();
        colony.subscribe(&subscriber);

        Ok(Simulator {
            rng:              SimRng::new(self.params.seed),
            params:           self.params,
            graph:            self.graph,
            colony,
            queue:            EventQueue::new(),
            clock:            SimTime::ZERO,
            stats:            SimStats::default(),
            algorithm:        self.algorithm,
            intervals:        self.intervals,
            inbox,
            started:          false,
        })
    }
}
