//! The shared pheromone matrix.

use aco_core::NodeId;

/// Symmetric `N × N` matrix of non-negative pheromone levels.
///
/// Every write goes through [`set`](Self::set), which stores the value in
/// both `(u, v)` and `(v, u)` and clamps negatives to zero, so the matrix is
/// symmetric and non-negative at all times.
#[derive(Clone, Debug)]
pub struct PheromoneMatrix {
    n:      usize,
    levels: Vec<f64>,
}

impl PheromoneMatrix {
    /// A zero-initialised matrix for an `n`-node graph.
    pub fn new(n: usize) -> Self {
        Self { n, levels: vec![0.0; n * n] }
    }

    pub fn node_count(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn level(&self, u: NodeId, v: NodeId) -> f64 {
        self.levels[u.slot() * self.n + v.slot()]
    }

    /// Store `value` (clamped to `>= 0`) symmetrically.
    #[inline]
    pub fn set(&mut self, u: NodeId, v: NodeId, value: f64) {
        let value = value.max(0.0);
        self.levels[u.slot() * self.n + v.slot()] = value;
        self.levels[v.slot() * self.n + u.slot()] = value;
    }

    /// Number of node pairs `(u < v)` with a positive level.
    pub fn active_edges(&self) -> usize {
        let mut count = 0;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.levels[i * self.n + j] > 0.0 {
                    count += 1;
                }
            }
        }
        count
    }
}
