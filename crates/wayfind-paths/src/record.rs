//! Per-search bookkeeping: predecessor and cost arrays indexed by
//! [`NodeId`], plus path reconstruction.

use wayfind_core::NodeId;

/// An ordered sequence of nodes from start to end, both inclusive.
pub type Path = Vec<NodeId>;

/// How a node was reached during the last search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parent {
    /// Never discovered.
    #[default]
    Undiscovered,
    /// The search root.
    Root,
    /// Discovered from the given node.
    From(NodeId),
}

/// Search-tree state left behind by the last run of a strategy.
///
/// The arrays are parallel to the graph's node arena and are reset at the
/// start of every search, reusing their allocation.
#[derive(Debug, Clone, Default)]
pub struct SearchRecord {
    parent: Vec<Parent>,
    cost: Vec<f32>,
    expanded: Vec<NodeId>,
    discovered: usize,
}

impl SearchRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything and size the arrays for a graph of `len` nodes.
    pub(crate) fn reset(&mut self, len: usize) {
        self.parent.clear();
        self.parent.resize(len, Parent::Undiscovered);
        self.cost.clear();
        self.cost.resize(len, f32::INFINITY);
        self.expanded.clear();
        self.discovered = 0;
    }

    /// Mark `id` as the root of the search tree with zero cost.
    pub(crate) fn set_root(&mut self, id: NodeId) {
        self.set_parent(id, Parent::Root);
        self.cost[id.index()] = 0.0;
    }

    pub(crate) fn set_parent(&mut self, id: NodeId, parent: Parent) {
        let slot = &mut self.parent[id.index()];
        if *slot == Parent::Undiscovered {
            self.discovered += 1;
        }
        *slot = parent;
    }

    pub(crate) fn set_cost(&mut self, id: NodeId, cost: f32) {
        self.cost[id.index()] = cost;
    }

    /// Recorded cost of `id`, infinite when unknown or overflowed.
    pub(crate) fn raw_cost(&self, id: NodeId) -> f32 {
        self.cost.get(id.index()).copied().unwrap_or(f32::INFINITY)
    }

    pub(crate) fn push_expanded(&mut self, id: NodeId) {
        self.expanded.push(id);
    }

    /// How `id` was reached. Absent handles report
    /// [`Parent::Undiscovered`].
    #[inline]
    pub fn parent(&self, id: NodeId) -> Parent {
        self.parent.get(id.index()).copied().unwrap_or_default()
    }

    /// Whether `id` was discovered by the last search.
    #[inline]
    pub fn is_discovered(&self, id: NodeId) -> bool {
        self.parent(id) != Parent::Undiscovered
    }

    /// Best known accumulated cost of `id`.
    ///
    /// Only cost-driven strategies (Dijkstra, A*) fill this in; the others
    /// report `None` for every node except the root.
    #[inline]
    pub fn cost(&self, id: NodeId) -> Option<f32> {
        match self.cost.get(id.index()) {
            Some(&c) if c.is_finite() => Some(c),
            _ => None,
        }
    }

    /// Nodes taken off the frontier and expanded, in order.
    ///
    /// The goal is not included: a search stops as soon as it pops it.
    #[inline]
    pub fn expanded(&self) -> &[NodeId] {
        &self.expanded
    }

    /// Number of distinct nodes discovered.
    #[inline]
    pub fn discovered_count(&self) -> usize {
        self.discovered
    }

    /// Walk predecessor links back from `end` to `start`.
    ///
    /// Returns `None` if `end` was never discovered, or if the links from
    /// `end` do not lead to `start` (the record belongs to a different run).
    pub fn reconstruct(&self, start: NodeId, end: NodeId) -> Option<Path> {
        if !self.is_discovered(end) {
            return None;
        }
        let mut path = Vec::new();
        let mut current = end;
        while current != start {
            path.push(current);
            match self.parent(current) {
                Parent::From(prev) => current = prev,
                Parent::Root | Parent::Undiscovered => return None,
            }
            if path.len() > self.parent.len() {
                return None;
            }
        }
        path.push(start);
        path.reverse();
        Some(path)
    }
}
