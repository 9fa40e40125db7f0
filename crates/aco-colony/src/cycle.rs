//! Discovered Hamiltonian cycles and their ranking.

use std::fmt;

use rustc_hash::FxHashSet;

use aco_core::NodeId;

// ── CycleRecord ───────────────────────────────────────────────────────────────

/// One discovered Hamiltonian cycle.
///
/// `nodes` starts at the nest and does not repeat it at the end.  Two records
/// are equal when their node sequences are equal; the weight is not part of
/// identity.  Ranking by weight is done by [`CycleSet`], not by an `Ord`
/// impl, because an ordering on weight would disagree with this equality.
#[derive(Clone, Debug)]
pub struct CycleRecord {
    pub nodes:  Vec<NodeId>,
    pub weight: u64,
}

impl PartialEq for CycleRecord {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl Eq for CycleRecord {}

/// `{n1,n2,...}:weight`
impl fmt::Display for CycleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, "}}:{}", self.weight)
    }
}

// ── CycleSet ──────────────────────────────────────────────────────────────────

/// Deduplicated collection of cycles kept in ascending weight order.
///
/// Cycles of equal weight keep their discovery order, so the best cycle is
/// the first one found among the lightest.
#[derive(Default, Debug)]
pub struct CycleSet {
    ranked: Vec<CycleRecord>,
    seen:   FxHashSet<Vec<NodeId>>,
}

impl CycleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless a record with the same node sequence already exists.
    ///
    /// Returns `true` if the cycle was new.
    pub fn insert(&mut self, nodes: Vec<NodeId>, weight: u64) -> bool {
        if self.seen.contains(&nodes) {
            return false;
        }
        self.seen.insert(nodes.clone());
        let at = self.ranked.partition_point(|r| r.weight <= weight);
        self.ranked.insert(at, CycleRecord { nodes, weight });
        true
    }

    pub fn contains(&self, nodes: &[NodeId]) -> bool {
        self.seen.contains(nodes)
    }

    /// The lightest cycle, if any has been found.
    pub fn best(&self) -> Option<&CycleRecord> {
        self.ranked.first()
    }

    /// Up to `n` cycles following the best one, lightest first.
    pub fn ranked(&self, n: usize) -> &[CycleRecord] {
        let rest = self.ranked.get(1..).unwrap_or(&[]);
        &rest[..n.min(rest.len())]
    }

    /// All cycles, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = &CycleRecord> {
        self.ranked.iter()
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}
