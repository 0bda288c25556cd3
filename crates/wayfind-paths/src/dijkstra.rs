use std::time::Duration;

use wayfind_core::{Graph, NodeId};

use crate::contract::{Engine, Pathfinder, StepSearch, run_to_end};
use crate::record::{Path, SearchRecord};
use crate::strategy::Algorithm;
use crate::weighted::CostFrontier;

/// Dijkstra's uniform-cost search.
///
/// Entering a node costs the Euclidean distance to it times its penalty.
/// With non-negative penalties the returned path has minimal total cost,
/// and the search stops as soon as the goal is popped.
#[derive(Debug, Clone, Default)]
pub struct Dijkstra {
    frontier: CostFrontier,
}

impl Dijkstra {
    /// Create a Dijkstra pathfinder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for Dijkstra {
    fn kind(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    fn begin(&mut self, graph: &Graph, start: NodeId, _end: NodeId) {
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
        self.frontier.expand(graph, current, |_| 0.0, on_frontier);
    }

    fn search_record(&self) -> &SearchRecord {
        &self.frontier.record
    }
}

impl Pathfinder for Dijkstra {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{SearchEvent, StepStatus};
    use crate::testgrid::TestGrid;
    use wayfind_core::Position;

    #[test]
    fn least_cost_on_open_grid() {
        let grid = TestGrid::new(3, 3, &[]);
        let mut dijkstra = Dijkstra::new();
        let (start, end) = (grid.at(0, 0), grid.at(2, 2));
        let path = dijkstra.find_path(&grid.graph, start, end).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(grid.graph.path_cost(&path), Some(4.0));
        assert_eq!(dijkstra.record().cost(end), Some(4.0));
    }

    #[test]
    fn avoids_penalised_cell() {
        let mut grid = TestGrid::new(3, 2, &[]);
        grid.graph.set_penalty(grid.at(1, 0), 10.0).unwrap();
        let mut dijkstra = Dijkstra::new();
        let path = dijkstra
            .find_path(&grid.graph, grid.at(0, 0), grid.at(2, 0))
            .unwrap();
        assert_eq!(
            path,
            vec![
                grid.at(0, 0),
                grid.at(0, 1),
                grid.at(1, 1),
                grid.at(2, 1),
                grid.at(2, 0)
            ]
        );
        assert_eq!(grid.graph.path_cost(&path), Some(4.0));
    }

    #[test]
    fn penalty_applies_on_entry() {
        // Leaving an expensive start costs nothing extra.
        let mut g = Graph::new();
        let a = g.add_node(Position::planar(0.0, 0.0), true, 9.0).unwrap();
        let b = g.add_node(Position::planar(2.0, 0.0), true, 0.5).unwrap();
        g.connect(a, b).unwrap();
        let mut dijkstra = Dijkstra::new();
        assert_eq!(dijkstra.find_path(&g, a, b), Some(vec![a, b]));
        assert_eq!(dijkstra.record().cost(b), Some(1.0));
    }

    #[test]
    fn relaxation_replaces_parent() {
        // x is found from s first, then reached more cheaply through the
        // low-penalty y.
        let mut g = Graph::new();
        let s = g.add_walkable(Position::planar(0.0, 0.0));
        let x = g.add_walkable(Position::planar(2.0, 0.0));
        let y = g.add_node(Position::planar(1.0, 1.0), true, 0.1).unwrap();
        let e = g.add_walkable(Position::planar(3.0, 0.0));
        g.connect(s, x).unwrap();
        g.connect(s, y).unwrap();
        g.connect(y, x).unwrap();
        g.connect(x, e).unwrap();

        let mut dijkstra = Dijkstra::new();
        let path = dijkstra.find_path(&g, s, e).unwrap();
        assert_eq!(path, vec![s, y, x, e]);

        let expected = 2.0_f32.sqrt() * 1.1 + 1.0;
        let cost = dijkstra.record().cost(e).unwrap();
        assert!((cost - expected).abs() < 1e-5);
        // The outdated entry for x is dropped, not expanded twice.
        let x_expansions = dijkstra.record().expanded().iter().filter(|&&n| n == x).count();
        assert_eq!(x_expansions, 1);
    }

    #[test]
    fn relaxed_node_is_reported_again() {
        let mut g = Graph::new();
        let s = g.add_walkable(Position::planar(0.0, 0.0));
        let x = g.add_walkable(Position::planar(2.0, 0.0));
        let y = g.add_node(Position::planar(1.0, 1.0), true, 0.1).unwrap();
        let e = g.add_walkable(Position::planar(3.0, 0.0));
        g.connect(s, x).unwrap();
        g.connect(s, y).unwrap();
        g.connect(y, x).unwrap();
        g.connect(x, e).unwrap();

        let mut dijkstra = Dijkstra::new();
        let events: Vec<SearchEvent> = dijkstra
            .find_path_step_by_step(&g, s, e, Duration::ZERO)
            .flatten()
            .collect();
        assert_eq!(
            events,
            vec![
                SearchEvent::Frontier(x),
                SearchEvent::Frontier(y),
                SearchEvent::Processing(y),
                SearchEvent::Frontier(x),
                SearchEvent::Processing(x),
                SearchEvent::Finished(Some(vec![s, y, x, e])),
            ]
        );
    }

    #[test]
    fn far_apart_nodes_stay_reachable() {
        // Squared distances here overflow f32.
        let mut g = Graph::new();
        let a = g.add_walkable(Position::planar(0.0, 0.0));
        let b = g.add_walkable(Position::planar(2.0e19, 0.0));
        let c = g.add_walkable(Position::planar(4.0e19, 0.0));
        g.connect(a, b).unwrap();
        g.connect(b, c).unwrap();
        let mut dijkstra = Dijkstra::new();
        assert_eq!(dijkstra.find_path(&g, a, c), Some(vec![a, b, c]));
        assert!(dijkstra.record().cost(c).is_some());

        // An edge too long for f32 still leads somewhere.
        let mut g = Graph::new();
        let a = g.add_walkable(Position::planar(-3.0e38, 0.0));
        let b = g.add_walkable(Position::planar(3.0e38, 0.0));
        let c = g.add_walkable(Position::planar(3.0e38, 1.0));
        g.connect(a, b).unwrap();
        g.connect(b, c).unwrap();
        assert_eq!(dijkstra.find_path(&g, a, c), Some(vec![a, b, c]));
        assert_eq!(dijkstra.record().cost(c), None);
    }

    #[test]
    fn unreachable_goal() {
        let grid = TestGrid::new(3, 3, &[(1, 0), (1, 1), (1, 2)]);
        let mut dijkstra = Dijkstra::new();
        assert_eq!(
            dijkstra.find_path(&grid.graph, grid.at(0, 0), grid.at(2, 0)),
            None
        );
    }

    #[test]
    fn invalid_handles_fail_closed() {
        let grid = TestGrid::new(2, 2, &[]);
        let ghost = NodeId::new(99);
        let mut dijkstra = Dijkstra::new();
        assert_eq!(dijkstra.find_path(&grid.graph, ghost, grid.at(0, 0)), None);
        assert_eq!(dijkstra.find_path(&grid.graph, grid.at(0, 0), ghost), None);

        let mut events = Vec::new();
        let mut run =
            dijkstra.find_path_step_by_step(&grid.graph, grid.at(0, 0), ghost, Duration::ZERO);
        assert_eq!(run.step(&mut events), StepStatus::Done);
        assert_eq!(events, vec![SearchEvent::Finished(None)]);
    }

    #[test]
    fn stepwise_matches_synchronous() {
        let mut grid = TestGrid::new(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        grid.graph.set_penalty(grid.at(1, 4), 3.0).unwrap();
        let (start, end) = (grid.at(0, 2), grid.at(4, 2));

        let mut dijkstra = Dijkstra::new();
        let expected = dijkstra.find_path(&grid.graph, start, end);
        let expected_expanded = dijkstra.record().expanded().to_vec();

        let mut processing = Vec::new();
        let path = dijkstra
            .find_path_step_by_step(&grid.graph, start, end, Duration::ZERO)
            .run(&mut crate::Callbacks::new(
                |n| processing.push(n),
                |_| {},
                |_| {},
            ));

        assert_eq!(path, expected);
        assert_eq!(dijkstra.record().expanded(), expected_expanded.as_slice());
        // Every expansion except the root's is announced.
        assert_eq!(processing.as_slice(), &expected_expanded[1..]);
    }
}
