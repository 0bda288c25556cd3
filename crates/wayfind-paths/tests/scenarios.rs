mod common;

use std::time::Duration;

use common::{Grid, approx_eq};
use wayfind_core::{NodeId, Position};
use wayfind_paths::{Algorithm, Callbacks, Pathfinder, PriorityQueue, QueueError};

const CELL: f32 = 1.2;

#[test]
fn open_three_by_three() {
    let grid = Grid::square(3, 3, CELL, &[]);
    let (start, end) = (grid.at(0, 0), grid.at(2, 2));

    for alg in [Algorithm::Dijkstra, Algorithm::AStar] {
        let mut finder = alg.pathfinder();
        let path = finder.find_path(&grid.graph, start, end).unwrap();
        let cost = grid.graph.path_cost(&path).unwrap();
        assert!(approx_eq(cost, 4.0 * CELL), "{alg}: {cost}");
    }

    let path = Algorithm::Bfs
        .pathfinder()
        .find_path(&grid.graph, start, end)
        .unwrap();
    assert_eq!(path.len() - 1, 4);
}

#[test]
fn blocked_centre_is_avoided() {
    let grid = Grid::square(3, 3, CELL, &[(1, 1)]);
    let (start, end) = (grid.at(0, 0), grid.at(2, 2));
    let centre = grid.at(1, 1);

    for alg in Algorithm::ALL {
        let path = alg.pathfinder().find_path(&grid.graph, start, end).unwrap();
        assert!(!path.contains(&centre), "{alg}");
        assert!(grid.graph.is_valid_path(&path), "{alg}");
        if alg != Algorithm::Dfs {
            assert_eq!(path.len() - 1, 4, "{alg}");
        }
    }
}

#[test]
fn start_equals_end() {
    let grid = Grid::square(3, 3, CELL, &[]);
    let node = grid.at(1, 2);

    for alg in Algorithm::ALL {
        let mut finder = alg.pathfinder();
        assert_eq!(finder.find_path(&grid.graph, node, node), Some(vec![node]));

        let mut processing = 0;
        let mut frontier = 0;
        let mut finished = Vec::new();
        finder
            .find_path_step_by_step(&grid.graph, node, node, Duration::from_millis(10))
            .run(&mut Callbacks::new(
                |_| processing += 1,
                |_| frontier += 1,
                |p| finished.push(p.map(<[NodeId]>::to_vec)),
            ));
        assert_eq!((processing, frontier), (0, 0), "{alg}");
        assert_eq!(finished, vec![Some(vec![node])], "{alg}");
    }
}

#[test]
fn disconnected_component_is_unreachable() {
    let mut grid = Grid::square(3, 3, CELL, &[]);
    let island = grid.graph.add_walkable(Position::planar(10.0, 10.0));
    let other = grid.graph.add_walkable(Position::planar(11.0, 10.0));
    grid.graph.connect(island, other).unwrap();

    for alg in Algorithm::ALL {
        let mut finder = alg.pathfinder();
        assert_eq!(finder.find_path(&grid.graph, grid.at(0, 0), other), None);

        let mut finished = Vec::new();
        let path = finder
            .find_path_step_by_step(&grid.graph, grid.at(0, 0), other, Duration::ZERO)
            .run(&mut Callbacks::new(
                |_| {},
                |_| {},
                |p| finished.push(p.map(<[NodeId]>::to_vec)),
            ));
        assert_eq!(path, None);
        assert_eq!(finished, vec![None], "{alg}");
    }
}

#[test]
fn absent_handles_fail_closed() {
    let grid = Grid::square(2, 2, CELL, &[]);
    let ghost = NodeId::new(grid.graph.len() + 3);
    for alg in Algorithm::ALL {
        let mut finder = alg.pathfinder();
        assert_eq!(finder.find_path(&grid.graph, ghost, grid.at(0, 0)), None);
        assert_eq!(finder.find_path(&grid.graph, grid.at(0, 0), ghost), None);
        let path = finder
            .find_path_step_by_step(&grid.graph, ghost, ghost, Duration::ZERO)
            .run(&mut ());
        assert_eq!(path, None);
    }
}

#[test]
fn disconnect_reroutes_next_search() {
    let mut grid = Grid::square(3, 1, CELL, &[]);
    let (a, b, c) = (grid.at(0, 0), grid.at(1, 0), grid.at(2, 0));
    let mut finder = Algorithm::Dijkstra.pathfinder();
    assert_eq!(finder.find_path(&grid.graph, a, c), Some(vec![a, b, c]));

    grid.graph.disconnect(b, c).unwrap();
    assert_eq!(finder.find_path(&grid.graph, a, c), None);
}

#[test]
fn empty_queue_is_a_contract_violation() {
    let mut q = PriorityQueue::<NodeId>::new();
    assert_eq!(q.try_dequeue(), Err(QueueError::Empty));
    let result = std::panic::catch_unwind(move || {
        q.dequeue();
    });
    assert!(result.is_err());
}
