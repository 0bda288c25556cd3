use std::collections::VecDeque;
use std::time::Duration;

use wayfind_core::{Graph, NodeId};

use crate::contract::{Engine, Pathfinder, StepSearch, run_to_end};
use crate::record::{Parent, Path, SearchRecord};
use crate::strategy::Algorithm;

/// Breadth-first search.
///
/// Expands nodes in discovery order from a FIFO queue, so the returned path
/// has the fewest edges. Positions and penalties are ignored.
#[derive(Debug, Clone, Default)]
pub struct Bfs {
    frontier: VecDeque<NodeId>,
    record: SearchRecord,
}

impl Bfs {
    /// Create a breadth-first pathfinder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for Bfs {
    fn kind(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn begin(&mut self, graph: &Graph, start: NodeId, _end: NodeId) {
        self.frontier.clear();
        self.record.reset(graph.len());
        self.record.set_root(start);
        self.frontier.push_back(start);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.frontier.pop_front()
    }

    fn expand(
        &mut self,
        graph: &Graph,
        current: NodeId,
        _end: NodeId,
        on_frontier: &mut dyn FnMut(NodeId),
    ) {
        self.record.push_expanded(current);
        for &next in graph.neighbors(current) {
            if self.record.is_discovered(next) || !graph.contains(next) {
                continue;
            }
            self.record.set_parent(next, Parent::From(current));
            self.frontier.push_back(next);
            on_frontier(next);
        }
    }

    fn search_record(&self) -> &SearchRecord {
        &self.record
    }
}

impl Pathfinder for Bfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
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
