#![allow(dead_code)]

use std::collections::VecDeque;

use rand::prelude::*;
use wayfind_core::{Graph, NodeId, Position};

/// A square grid with 4-way adjacency.
pub struct Grid {
    pub graph: Graph,
    pub width: usize,
    pub height: usize,
}

impl Grid {
    /// Build a grid whose cells are `cell_size` apart. `blocked` cells are
    /// unwalkable and stay unconnected.
    pub fn square(width: usize, height: usize, cell_size: f32, blocked: &[(usize, usize)]) -> Self {
        let mut graph = Graph::with_capacity(width * height);
        for z in 0..height {
            for x in 0..width {
                let pos = Position::planar(x as f32 * cell_size, z as f32 * cell_size);
                graph.add_node(pos, !blocked.contains(&(x, z)), 1.0).unwrap();
            }
        }
        let grid = Self {
            graph,
            width,
            height,
        };
        grid.connected()
    }

    /// A seeded random grid: roughly `obstacle_pct` percent of cells are
    /// blocked and walkable cells get an integer penalty in `1..=max_penalty`.
    pub fn random(width: usize, height: usize, obstacle_pct: u32, max_penalty: u32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut graph = Graph::with_capacity(width * height);
        for z in 0..height {
            for x in 0..width {
                let walkable = rng.random_range(0..100) >= obstacle_pct;
                let penalty = rng.random_range(1..=max_penalty) as f32;
                graph
                    .add_node(Position::planar(x as f32, z as f32), walkable, penalty)
                    .unwrap();
            }
        }
        let grid = Self {
            graph,
            width,
            height,
        };
        grid.connected()
    }

    fn connected(mut self) -> Self {
        for z in 0..self.height {
            for x in 0..self.width {
                let here = self.at(x, z);
                if x > 0 {
                    let left = self.at(x - 1, z);
                    self.graph.try_connect(here, left).unwrap();
                }
                if z > 0 {
                    let up = self.at(x, z - 1);
                    self.graph.try_connect(here, up).unwrap();
                }
            }
        }
        self
    }

    pub fn at(&self, x: usize, z: usize) -> NodeId {
        NodeId::new(z * self.width + x)
    }

    /// Walkable cells, in id order.
    pub fn walkable(&self) -> Vec<NodeId> {
        self.graph
            .iter()
            .filter(|(_, n)| n.walkable())
            .map(|(id, _)| id)
            .collect()
    }
}

/// Reference hop distances from `start`, computed independently of the
/// strategies under test.
pub fn hop_distances(graph: &Graph, start: NodeId) -> Vec<Option<usize>> {
    let mut dist = vec![None; graph.len()];
    let mut queue = VecDeque::new();
    dist[start.index()] = Some(0);
    queue.push_back(start);
    while let Some(current) = queue.pop_front() {
        let d = dist[current.index()].unwrap();
        for &next in graph.neighbors(current) {
            if dist[next.index()].is_none() {
                dist[next.index()] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

/// Pick `count` (start, end) pairs among walkable cells.
pub fn pairs(grid: &Grid, count: usize, seed: u64) -> Vec<(NodeId, NodeId)> {
    let cells = grid.walkable();
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let a = cells[rng.random_range(0..cells.len())];
            let b = cells[rng.random_range(0..cells.len())];
            (a, b)
        })
        .collect()
}

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-4 * a.abs().max(b.abs()).max(1.0)
}
