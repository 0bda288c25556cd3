use std::time::Duration;

use wayfind_core::{Graph, NodeId, Position};

use crate::contract::{Engine, Pathfinder, StepSearch, run_to_end};
use crate::record::{Path, SearchRecord};
use crate::strategy::Algorithm;
use crate::weighted::CostFrontier;

/// A* search with a straight-line heuristic.
///
/// Costs are those of [`Dijkstra`](crate::Dijkstra); the frontier priority
/// adds `weight * distance(next, end)`. The heuristic only stays admissible
/// while `weight` does not exceed the smallest penalty in the graph, so
/// graphs with penalties below 1 need a matching
/// [`with_heuristic_weight`](Self::with_heuristic_weight) to keep results
/// optimal.
#[derive(Debug, Clone)]
pub struct AStar {
    frontier: CostFrontier,
    weight: f32,
    goal: Position,
}

impl Default for AStar {
    fn default() -> Self {
        Self {
            frontier: CostFrontier::default(),
            weight: 1.0,
            goal: Position::ZERO,
        }
    }
}

impl AStar {
    /// Create an A* pathfinder with heuristic weight 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scale the heuristic by `weight`.
    ///
    /// Weights that are negative or not finite are replaced by 1.
    pub fn with_heuristic_weight(mut self, weight: f32) -> Self {
        if weight.is_finite() && weight >= 0.0 {
            self.weight = weight;
        } else {
            log::warn!("astar: ignoring heuristic weight {weight}, using 1");
            self.weight = 1.0;
        }
        self
    }

    /// The current heuristic weight.
    pub fn heuristic_weight(&self) -> f32 {
        self.weight
    }
}

impl Engine for AStar {
    fn kind(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn begin(&mut self, graph: &Graph, start: NodeId, end: NodeId) {
        self.goal = graph.get(end).map(|n| n.position()).unwrap_or_default();
        self.frontier.begin(graph, start, 0.0);
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
        let goal = self.goal;
        let weight = self.weight;
        self.frontier.expand(
            graph,
            current,
            |n| n.position().distance(goal) * weight,
            on_frontier,
        );
    }

    fn search_record(&self) -> &SearchRecord {
        &self.frontier.record
    }
}

impl Pathfinder for AStar {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
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
        &self.frontier.record
    }
}
