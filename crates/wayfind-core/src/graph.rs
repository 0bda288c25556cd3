//! The node arena and its adjacency primitives.

use std::fmt;

use crate::geom::Position;
use crate::node::{DEFAULT_PENALTY, Node, NodeId};

/// Errors raised by [`Graph`] mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The handle does not name a node of this graph.
    UnknownNode(NodeId),
    /// Penalties must be finite and non-negative.
    InvalidPenalty { id: Option<NodeId>, penalty: f32 },
    /// A stored adjacency list names itself, repeats a neighbour, or is not
    /// mirrored by the neighbour's list.
    InvalidEdge { from: NodeId, to: NodeId },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode(id) => write!(f, "graph: unknown node {id}"),
            Self::InvalidPenalty {
                id: Some(id),
                penalty,
            } => write!(f, "graph: invalid penalty {penalty} for node {id}"),
            Self::InvalidPenalty { id: None, penalty } => {
                write!(f, "graph: invalid penalty {penalty}")
            }
            Self::InvalidEdge { from, to } => write!(f, "graph: invalid edge {from} -> {to}"),
        }
    }
}

impl std::error::Error for GraphError {}

fn check_penalty(id: Option<NodeId>, penalty: f32) -> Result<(), GraphError> {
    if penalty.is_finite() && penalty >= 0.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidPenalty { id, penalty })
    }
}

/// A weighted, undirected spatial graph.
///
/// Nodes live in a dense arena and are addressed by [`NodeId`]. Ids stay
/// valid until [`clear`](Self::clear); nodes are never removed one by one,
/// only disconnected.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GraphRepr"))]
pub struct Graph {
    nodes: Vec<Node>,
}

/// Unchecked serialized form of a [`Graph`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GraphRepr {
    nodes: Vec<Node>,
}

#[cfg(feature = "serde")]
impl TryFrom<GraphRepr> for Graph {
    type Error = GraphError;

    /// Accept stored nodes only if they satisfy the same invariants as a
    /// graph built through [`Graph::add_node`] and [`Graph::connect`].
    fn try_from(repr: GraphRepr) -> Result<Self, Self::Error> {
        let graph = Graph { nodes: repr.nodes };
        for (from, node) in graph.iter() {
            check_penalty(Some(from), node.penalty)?;
            for (i, &to) in node.neighbors.iter().enumerate() {
                let other = graph.node(to)?;
                if to == from || node.neighbors[..i].contains(&to) || !other.is_adjacent(from) {
                    return Err(GraphError::InvalidEdge { from, to });
                }
            }
        }
        Ok(graph)
    }
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Add an unconnected node and return its handle.
    pub fn add_node(
        &mut self,
        position: Position,
        walkable: bool,
        penalty: f32,
    ) -> Result<NodeId, GraphError> {
        check_penalty(None, penalty)?;
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(position, walkable, penalty));
        Ok(id)
    }

    /// Add a walkable node with the default penalty.
    pub fn add_walkable(&mut self, position: Position) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(position, true, DEFAULT_PENALTY));
        id
    }

    /// Add each node to the other's adjacency list, at most once.
    ///
    /// Returns `true` if either list changed. Connecting a node to itself is
    /// a no-op.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<bool, GraphError> {
        self.check(a)?;
        self.check(b)?;
        if a == b {
            return Ok(false);
        }
        let mut changed = false;
        if !self.nodes[a.index()].neighbors.contains(&b) {
            self.nodes[a.index()].neighbors.push(b);
            changed = true;
        }
        if !self.nodes[b.index()].neighbors.contains(&a) {
            self.nodes[b.index()].neighbors.push(a);
            changed = true;
        }
        Ok(changed)
    }

    /// Remove the symmetric adjacency entries between `a` and `b`.
    ///
    /// Returns `true` if either list changed.
    pub fn disconnect(&mut self, a: NodeId, b: NodeId) -> Result<bool, GraphError> {
        self.check(a)?;
        self.check(b)?;
        let before = self.nodes[a.index()].neighbors.len() + self.nodes[b.index()].neighbors.len();
        self.nodes[a.index()].neighbors.retain(|&n| n != b);
        self.nodes[b.index()].neighbors.retain(|&n| n != a);
        let after = self.nodes[a.index()].neighbors.len() + self.nodes[b.index()].neighbors.len();
        Ok(after != before)
    }

    /// Connect `a` and `b` only if both are walkable.
    pub fn try_connect(&mut self, a: NodeId, b: NodeId) -> Result<bool, GraphError> {
        if self.node(a)?.walkable && self.node(b)?.walkable {
            self.connect(a, b)
        } else {
            Ok(false)
        }
    }

    /// Change a node's walkability. Existing edges are left untouched.
    pub fn set_walkable(&mut self, id: NodeId, walkable: bool) -> Result<(), GraphError> {
        self.check(id)?;
        self.nodes[id.index()].walkable = walkable;
        Ok(())
    }

    /// Change the penalty applied when entering `id`.
    pub fn set_penalty(&mut self, id: NodeId, penalty: f32) -> Result<(), GraphError> {
        self.check(id)?;
        check_penalty(Some(id), penalty)?;
        self.nodes[id.index()].penalty = penalty;
        Ok(())
    }

    /// Remove every node. All previously issued ids become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` names a node of this graph.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Look up a node, or `None` if the handle is absent.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Look up a node, failing with [`GraphError::UnknownNode`].
    #[inline]
    pub fn node(&self, id: NodeId) -> Result<&Node, GraphError> {
        self.get(id).ok_or(GraphError::UnknownNode(id))
    }

    /// Neighbours of `id`; empty for an absent handle.
    #[inline]
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Node::neighbors).unwrap_or(&[])
    }

    /// All nodes with their ids, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i), n))
    }

    /// Nearest node strictly within `max_distance` of `position`.
    ///
    /// Ties go to the node inserted first. A negative or NaN `max_distance`
    /// matches nothing.
    pub fn nearest(&self, position: Position, max_distance: f32) -> Option<NodeId> {
        if max_distance.is_nan() || max_distance < 0.0 {
            return None;
        }
        let mut best = None;
        let mut best_sq = max_distance * max_distance;
        for (id, node) in self.iter() {
            let d = node.position.distance_squared(position);
            if d < best_sq {
                best_sq = d;
                best = Some(id);
            }
        }
        best
    }

    /// Cost of entering `to` from the adjacent node `from`.
    ///
    /// The straight-line distance is scaled by the destination's penalty.
    #[inline]
    pub fn edge_cost(&self, from: &Node, to: &Node) -> f32 {
        from.position.distance(to.position) * to.penalty
    }

    /// Total traversal cost of `path`.
    ///
    /// Returns `None` if a handle is absent or two consecutive nodes are not
    /// adjacent. A single-node path costs zero.
    pub fn path_cost(&self, path: &[NodeId]) -> Option<f32> {
        let mut total = 0.0;
        for pair in path.windows(2) {
            let from = self.get(pair[0])?;
            let to = self.get(pair[1])?;
            if !from.is_adjacent(pair[1]) {
                return None;
            }
            total += self.edge_cost(from, to);
        }
        if let Some(&first) = path.first() {
            self.get(first)?;
        }
        Some(total)
    }

    /// Whether every consecutive pair of `path` is adjacent.
    pub fn is_valid_path(&self, path: &[NodeId]) -> bool {
        self.path_cost(path).is_some()
    }

    #[inline]
    fn check(&self, id: NodeId) -> Result<(), GraphError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(id))
        }
    }
}
