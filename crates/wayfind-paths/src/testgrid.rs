//! Small square grids for unit tests.

use wayfind_core::{Graph, NodeId, Position};

pub(crate) struct TestGrid {
    pub(crate) graph: Graph,
    width: usize,
}

impl TestGrid {
    /// A `width` x `height` grid with 4-way adjacency and unit spacing.
    /// Cells listed in `blocked` are unwalkable and left unconnected.
    pub(crate) fn new(width: usize, height: usize, blocked: &[(usize, usize)]) -> Self {
        let mut graph = Graph::with_capacity(width * height);
        for z in 0..height {
            for x in 0..width {
                let walkable = !blocked.contains(&(x, z));
                graph
                    .add_node(Position::planar(x as f32, z as f32), walkable, 1.0)
                    .unwrap();
            }
        }
        let mut grid = Self { graph, width };
        for z in 0..height {
            for x in 0..width {
                let here = grid.at(x, z);
                if x > 0 {
                    let left = grid.at(x - 1, z);
                    grid.graph.try_connect(here, left).unwrap();
                }
                if z > 0 {
                    let up = grid.at(x, z - 1);
                    grid.graph.try_connect(here, up).unwrap();
                }
            }
        }
        grid
    }

    pub(crate) fn at(&self, x: usize, z: usize) -> NodeId {
        NodeId::new(z * self.width + x)
    }
}
