//! Weighted undirected graph representation and builder.
//!
//! # Data layout
//!
//! Adjacency uses **Compressed Sparse Row (CSR)** format.  Given a node `n`,
//! its neighbours occupy the slice:
//!
//! ```text
//! adj_to[ adj_start[n.slot()] .. adj_start[n.slot() + 1] ]
//! ```
//!
//! Neighbours appear in the order their edges were added to the builder, so
//! a graph loaded from a weight matrix lists neighbours in ascending order.
//! Edge weights live in a dense `N × N` table so `weight(u, v)` is a single
//! index — the ant's preference computation hits it once per candidate.

use std::fmt;

use aco_core::NodeId;

use crate::{GraphError, GraphResult};

// ── WeightedGraph ─────────────────────────────────────────────────────────────

/// Read-only weighted-graph queries used by the colony.
///
/// Nodes are numbered `1..=node_count()`.  Implementations must be immutable
/// for the duration of a simulation; `Send + Sync` lets a graph be shared by
/// reference with anything that needs to read it.
pub trait WeightedGraph: Send + Sync {
    /// Number of nodes `N`.
    fn node_count(&self) -> usize;

    /// Weight of the undirected edge `(u, v)`, or 0 if there is no edge.
    fn weight(&self, u: NodeId, v: NodeId) -> u64;

    /// Sum of the weights of all undirected edges.
    fn total_weight(&self) -> u64;

    /// Neighbours of `u`.
    fn adjacent(&self, u: NodeId) -> &[NodeId];

    /// `true` if `u` and `v` are joined by an edge.
    #[inline]
    fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.weight(u, v) > 0
    }
}

// ── AdjacencyGraph ────────────────────────────────────────────────────────────

/// Undirected graph in CSR form plus a dense weight table.
///
/// Do not construct directly; use [`GraphBuilder`].
#[derive(Clone, Debug)]
pub struct AdjacencyGraph {
    node_count:   usize,
    total_weight: u64,
    /// CSR row pointer.  Length = `node_count + 1`.
    adj_start:    Vec<u32>,
    adj_to:       Vec<NodeId>,
    /// Row-major `node_count × node_count` weights; 0 = no edge.
    weights:      Vec<u64>,
}

impl AdjacencyGraph {
    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj_to.len() / 2
    }

    /// Degree of `node`.
    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacent(node).len()
    }

    /// Row `u` of the weight matrix (0 where there is no edge).
    pub fn weight_row(&self, u: NodeId) -> &[u64] {
        let start = u.slot() * self.node_count;
        &self.weights[start..start + self.node_count]
    }
}

impl WeightedGraph for AdjacencyGraph {
    #[inline]
    fn node_count(&self) -> usize {
        self.node_count
    }

    #[inline]
    fn weight(&self, u: NodeId, v: NodeId) -> u64 {
        self.weights[u.slot() * self.node_count + v.slot()]
    }

    #[inline]
    fn total_weight(&self) -> u64 {
        self.total_weight
    }

    #[inline]
    fn adjacent(&self, u: NodeId) -> &[NodeId] {
        let start = self.adj_start[u.slot()] as usize;
        let end   = self.adj_start[u.slot() + 1] as usize;
        &self.adj_to[start..end]
    }
}

/// Renders the weight matrix, one row per line, space separated.
impl fmt::Display for AdjacencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for u in NodeId::all(self.node_count) {
            let row: Vec<String> = self.weight_row(u).iter().map(u64::to_string).collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Largest graph accepted from input.  The dense weight table holds
/// `MAX_NODES²` entries (128 MiB at this size).
pub const MAX_NODES: usize = 4096;

/// Construct an [`AdjacencyGraph`] edge by edge, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use aco_core::NodeId;
/// use aco_graph::{GraphBuilder, WeightedGraph};
///
/// let mut b = GraphBuilder::new(3);
/// b.add_edge(NodeId(1), NodeId(2), 4).unwrap();
/// b.add_edge(NodeId(2), NodeId(3), 1).unwrap();
/// let g = b.build();
/// assert_eq!(g.weight(NodeId(2), NodeId(1)), 4);
/// assert_eq!(g.total_weight(), 5);
/// ```
pub struct GraphBuilder {
    node_count: usize,
    /// Directed half-edges `(from, to)` in insertion order.
    half_edges: Vec<(NodeId, NodeId)>,
    weights:    Vec<u64>,
    total:      u64,
}

impl GraphBuilder {
    /// Builder for a graph of known, small size.  Node counts read from
    /// input go through [`try_new`](Self::try_new).
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            half_edges: Vec::new(),
            weights:    vec![0; node_count * node_count],
            total:      0,
        }
    }

    /// Like [`new`](Self::new), but rejects node counts above [`MAX_NODES`]
    /// before allocating the weight table.
    pub fn try_new(node_count: usize) -> GraphResult<Self> {
        if node_count > MAX_NODES {
            return Err(GraphError::TooManyNodes { node_count, max: MAX_NODES });
        }
        Ok(Self::new(node_count))
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// `true` if `(u, v)` has already been added.
    pub fn contains(&self, u: NodeId, v: NodeId) -> bool {
        self.weights[u.slot() * self.node_count + v.slot()] > 0
    }

    /// Add the undirected edge `(u, v)` with a positive `weight`.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: u64) -> GraphResult<()> {
        for node in [u, v] {
            if node.0 == 0 || node.index() > self.node_count {
                return Err(GraphError::NodeOutOfRange { node, node_count: self.node_count });
            }
        }
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if weight == 0 {
            return Err(GraphError::ZeroWeight(u, v));
        }
        if self.contains(u, v) {
            return Err(GraphError::DuplicateEdge(u, v));
        }

        let n = self.node_count;
        self.weights[u.slot() * n + v.slot()] = weight;
        self.weights[v.slot() * n + u.slot()] = weight;
        self.half_edges.push((u, v));
        self.half_edges.push((v, u));
        self.total += weight;
        Ok(())
    }

    /// Consume the builder and produce an [`AdjacencyGraph`].
    pub fn build(self) -> AdjacencyGraph {
        let n = self.node_count;

        // Stable sort keeps per-node insertion order.
        let mut half = self.half_edges;
        half.sort_by_key(|&(from, _)| from.0);

        let mut adj_start = vec![0u32; n + 1];
        for &(from, _) in &half {
            adj_start[from.slot() + 1] += 1;
        }
        for i in 1..=n {
            adj_start[i] += adj_start[i - 1];
        }
        debug_assert_eq!(adj_start[n] as usize, half.len());

        AdjacencyGraph {
            node_count:   n,
            total_weight: self.total,
            adj_start,
            adj_to:       half.into_iter().map(|(_, to)| to).collect(),
            weights:      self.weights,
        }
    }
}
