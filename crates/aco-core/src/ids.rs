//! Strongly typed, zero-cost identifier wrappers.
//!
//! Graph nodes are numbered from 1, as in every input format the simulator
//! reads.  Dense per-node tables (pheromone matrix, weight table, adjacency
//! lists) are 0-based, so `NodeId` carries a [`slot`](NodeId::slot) helper
//! for the conversion.  Ants are numbered from 0 and index the colony's
//! agent `Vec` directly.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw value as `usize`.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an ant in the colony.  Max ~4.3 billion ants.
    pub struct AgentId(u32);
}

typed_id! {
    /// A graph node, numbered `1..=N`.
    pub struct NodeId(u32);
}

impl NodeId {
    /// 0-based position of this node in dense per-node tables.
    ///
    /// # Panics
    /// Panics in debug mode for `NodeId(0)`, which is never a valid node.
    #[inline(always)]
    pub fn slot(self) -> usize {
        self.0 as usize - 1
    }

    /// Inverse of [`slot`](Self::slot).
    #[inline(always)]
    pub fn from_slot(slot: usize) -> NodeId {
        NodeId(slot as u32 + 1)
    }

    /// All nodes of an `n`-node graph in ascending order.
    pub fn all(n: usize) -> impl Iterator<Item = NodeId> {
        (0..n).map(NodeId::from_slot)
    }
}
