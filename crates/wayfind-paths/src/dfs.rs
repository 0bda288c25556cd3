use std::time::Duration;

use wayfind_core::{Graph, NodeId};

use crate::contract::{Engine, Pathfinder, StepSearch, run_to_end};
use crate::record::{Parent, Path, SearchRecord};
use crate::strategy::Algorithm;

/// Depth-first search.
///
/// Uses a LIFO stack, so the most recently discovered node is expanded
/// next and the neighbour listed last is explored first. Finds a path
/// whenever one exists, but not necessarily a short one.
#[derive(Debug, Clone, Default)]
pub struct Dfs {
    frontier: Vec<NodeId>,
    record: SearchRecord,
}

impl Dfs {
    /// Create a depth-first pathfinder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for Dfs {
    fn kind(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn begin(&mut self, graph: &Graph, start: NodeId, _end: NodeId) {
        self.frontier.clear();
        self.record.reset(graph.len());
        self.record.set_root(start);
        self.frontier.push(start);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.frontier.pop()
    }

    fn expand(
        &mut self,
        graph: &Graph,
        current: NodeId,
        _end: NodeId,
        on_frontier: &mut dyn FnMut(NodeId),
    ) {
        self.record.push_expanded(current);
        // A node is claimed when first pushed, so it enters the stack once.
        for &next in graph.neighbors(current) {
            if self.record.is_discovered(next) || !graph.contains(next) {
                continue;
            }
            self.record.set_parent(next, Parent::From(current));
            self.frontier.push(next);
            on_frontier(next);
        }
    }

    fn search_record(&self) -> &SearchRecord {
        &self.record
    }
}

impl Pathfinder for Dfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn find_path(&mut self, graph: &Graph, start: NodeId, end: NodeId) -> Option<Path> {
        run_to_end(self, graph, start, end)
    }

    fn find_path_step_by_step<'a>(
        &'a mut self,
        graph: &'a Graph,
        start: NodeId,
        end: NodeId,
        delay: Duration,
    ) -> StepSearch<'a> {
        StepSearch::new(self, graph, start, end, delay)
    }

    fn record(&self) -> &SearchRecord {
        &self.record
    }
}
