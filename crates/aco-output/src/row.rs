//! Plain data row types written by output backends.

use aco_colony::CycleRecord;
use aco_sim::Observation;

/// One Notification event.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationRow {
    pub seq:                u32,
    pub time:               f64,
    pub move_events:        u64,
    pub evaporation_events: u64,
    /// Number of ranked candidates reported (excluding the best).
    pub candidates:         u32,
    /// Weight of the best cycle; `None` while no cycle has been found.
    pub best_weight:        Option<u64>,
    /// Best cycle as `n1 n2 ...`; empty while no cycle has been found.
    pub best_cycle:         String,
}

impl From<&Observation> for ObservationRow {
    fn from(obs: &Observation) -> Self {
        Self {
            seq:                obs.seq,
            time:               obs.time.as_f64(),
            move_events:        obs.move_events,
            evaporation_events: obs.evaporation_events,
            candidates:         obs.candidates.len() as u32,
            best_weight:        obs.best.as_ref().map(|c| c.weight),
            best_cycle:         obs.best.as_ref().map(node_list).unwrap_or_default(),
        }
    }
}

/// One discovered cycle in the final ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleRow {
    /// 1-based position in ascending weight order.
    pub rank:   u32,
    pub weight: u64,
    pub nodes:  String,
}

impl CycleRow {
    pub fn new(rank: u32, record: &CycleRecord) -> Self {
        Self { rank, weight: record.weight, nodes: node_list(record) }
    }
}

/// Space-separated node ids.
fn node_list(record: &CycleRecord) -> String {
    record.nodes.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(" ")
}
