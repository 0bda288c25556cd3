//! Cost-ordered frontier shared by Dijkstra and A*.

use wayfind_core::{Graph, Node, NodeId};

use crate::queue::PriorityQueue;
use crate::record::{Parent, SearchRecord};

/// Priority queue plus cost bookkeeping with lazy deletion.
///
/// A node is relaxed by enqueueing it again; `open` marks which nodes still
/// await expansion at their current best cost, so outdated heap entries are
/// dropped when popped.
#[derive(Debug, Clone, Default)]
pub(crate) struct CostFrontier {
    queue: PriorityQueue<NodeId>,
    open: Vec<bool>,
    pub(crate) record: SearchRecord,
}

impl CostFrontier {
    pub(crate) fn begin(&mut self, graph: &Graph, start: NodeId, start_priority: f32) {
        self.queue.clear();
        self.open.clear();
        self.open.resize(graph.len(), false);
        self.record.reset(graph.len());

        self.record.set_root(start);
        self.open[start.index()] = true;
        self.queue.enqueue(start, start_priority);
    }

    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        while !self.queue.is_empty() {
            let id = self.queue.dequeue();
            if self.open[id.index()] {
                self.open[id.index()] = false;
                return Some(id);
            }
            log::trace!("skipping stale entry {id}");
        }
        None
    }

    /// Relax every neighbour of `current`.
    ///
    /// Entering `next` costs the straight-line distance scaled by `next`'s
    /// penalty. `estimate` adds a goal-directed term to the queue priority
    /// only; recorded costs stay exact.
    pub(crate) fn expand(
        &mut self,
        graph: &Graph,
        current: NodeId,
        estimate: impl Fn(&Node) -> f32,
        on_frontier: &mut dyn FnMut(NodeId),
    ) {
        let Some(cn) = graph.get(current) else {
            return;
        };
        // Costs may overflow to infinity on huge graphs; the node still
        // counts as discovered and is expanded.
        let current_cost = self.record.raw_cost(current);
        self.record.push_expanded(current);

        for &next in cn.neighbors() {
            let Some(nn) = graph.get(next) else {
                continue;
            };
            let new_cost = current_cost + graph.edge_cost(cn, nn);
            if self.record.is_discovered(next) && new_cost >= self.record.raw_cost(next) {
                continue;
            }

            self.record.set_cost(next, new_cost);
            self.record.set_parent(next, Parent::From(current));
            self.open[next.index()] = true;
            self.queue.enqueue(next, new_cost + estimate(nn));
            on_frontier(next);
        }
    }
}
