//! Graph vertices: [`NodeId`] handles and [`Node`] data.

use std::fmt;

use crate::geom::Position;

/// Penalty given to nodes that do not specify one.
pub const DEFAULT_PENALTY: f32 = 1.0;

/// Stable handle to a node in a [`Graph`](crate::Graph) arena.
///
/// Ids are dense indices assigned in insertion order, so they double as
/// array indices for per-search bookkeeping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    /// Create a handle from a raw arena index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A vertex of the search graph.
///
/// Adjacency is only changed through the owning graph's connect and
/// disconnect operations, which keep neighbour lists symmetric and free of
/// duplicates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub(crate) position: Position,
    pub(crate) walkable: bool,
    pub(crate) penalty: f32,
    pub(crate) neighbors: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(position: Position, walkable: bool, penalty: f32) -> Self {
        Self {
            position,
            walkable,
            penalty,
            neighbors: Vec::new(),
        }
    }

    /// Coordinate in search space.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether the node may take part in new connections.
    #[inline]
    pub fn walkable(&self) -> bool {
        self.walkable
    }

    /// Cost multiplier applied when entering this node.
    #[inline]
    pub fn penalty(&self) -> f32 {
        self.penalty
    }

    /// Adjacent nodes, in the order they were connected.
    #[inline]
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Whether `other` is in this node's adjacency list.
    #[inline]
    pub fn is_adjacent(&self, other: NodeId) -> bool {
        self.neighbors.contains(&other)
    }
}
