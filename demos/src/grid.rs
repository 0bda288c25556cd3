//! Seeded square and hexagonal grid generation.

use rand::prelude::*;
use wayfind_core::{Graph, GraphError, NodeId, Position};

/// Cell arrangement of a generated grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Square cells, 4-way or 8-way adjacency.
    Square,
    /// Pointy-top hexagons in offset rows; odd rows shift half a cell.
    Hex,
}

/// Vertical distance between hex rows, relative to the cell size.
const HEX_ROW_SPACING: f32 = 0.866;

/// Parameters for [`GridMap::generate`].
#[derive(Debug, Clone)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    /// Distance between neighbouring cell centres.
    pub cell_size: f32,
    /// Probability (0.0–1.0) that a cell is an obstacle.
    pub obstacle_percent: f32,
    /// RNG seed; 0 draws a fresh one from the thread RNG.
    pub seed: u64,
    /// Square layout only: also connect diagonal neighbours.
    pub allow_diagonal: bool,
    pub layout: Layout,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 15,
            height: 15,
            cell_size: 1.2,
            obstacle_percent: 0.2,
            seed: 0,
            allow_diagonal: true,
            layout: Layout::Square,
        }
    }
}

/// A generated grid: the search graph plus the cell coordinates of every
/// node.
#[derive(Debug, Clone)]
pub struct GridMap {
    pub graph: Graph,
    width: usize,
    height: usize,
    cell_size: f32,
    layout: Layout,
}

impl GridMap {
    /// Build a grid from `config`.
    ///
    /// Nodes are laid out column-major in the graph arena, matching the
    /// `(x, z)` iteration order used to generate them.
    pub fn generate(config: &GridConfig) -> Result<Self, GraphError> {
        let mut rng = if config.seed != 0 {
            StdRng::seed_from_u64(config.seed)
        } else {
            StdRng::seed_from_u64(rand::rng().random())
        };

        let mut map = Self {
            graph: Graph::with_capacity(config.width * config.height),
            width: config.width,
            height: config.height,
            cell_size: config.cell_size,
            layout: config.layout,
        };

        for x in 0..config.width {
            for z in 0..config.height {
                let walkable = rng.random::<f32>() >= config.obstacle_percent;
                let pos = map.position(x, z);
                map.graph.add_node(pos, walkable, 1.0)?;
            }
        }

        match config.layout {
            Layout::Square => map.connect_square(config.allow_diagonal)?,
            Layout::Hex => map.connect_hex()?,
        }

        let walkable = map.graph.iter().filter(|(_, n)| n.walkable()).count();
        log::debug!(
            "generated {:?} grid {}x{}: {walkable} walkable of {}",
            config.layout,
            config.width,
            config.height,
            map.graph.len()
        );
        Ok(map)
    }

    /// Grid dimensions in cells.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Node at cell `(x, z)`, if inside the grid.
    pub fn at(&self, x: usize, z: usize) -> Option<NodeId> {
        (x < self.width && z < self.height).then(|| NodeId::new(x * self.height + z))
    }

    /// Cell coordinates of `id`.
    pub fn cell_of(&self, id: NodeId) -> Option<(usize, usize)> {
        self.graph
            .contains(id)
            .then(|| (id.index() / self.height, id.index() % self.height))
    }

    /// Map a world position to the closest node.
    ///
    /// Square grids round to the nearest cell; hex grids pick the nearest
    /// centre closer than `cell_size / √2`.
    pub fn node_at(&self, world: Position) -> Option<NodeId> {
        match self.layout {
            Layout::Square => {
                let x = (world.x / self.cell_size).round();
                let z = (world.z / self.cell_size).round();
                if x < 0.0 || z < 0.0 {
                    return None;
                }
                self.at(x as usize, z as usize)
            }
            Layout::Hex => self
                .graph
                .nearest(world, self.cell_size * std::f32::consts::FRAC_1_SQRT_2),
        }
    }

    /// Walkable nodes, in arena order.
    pub fn walkable(&self) -> Vec<NodeId> {
        self.graph
            .iter()
            .filter(|(_, n)| n.walkable())
            .map(|(id, _)| id)
            .collect()
    }

    fn position(&self, x: usize, z: usize) -> Position {
        match self.layout {
            Layout::Square => {
                Position::planar(x as f32 * self.cell_size, z as f32 * self.cell_size)
            }
            Layout::Hex => {
                let mut px = x as f32 * self.cell_size;
                if z % 2 != 0 {
                    px += self.cell_size * 0.5;
                }
                Position::planar(px, z as f32 * self.cell_size * HEX_ROW_SPACING)
            }
        }
    }

    fn connect_square(&mut self, diagonal: bool) -> Result<(), GraphError> {
        for x in 0..self.width {
            for z in 0..self.height {
                let here = NodeId::new(x * self.height + z);
                let mut others = Vec::with_capacity(4);
                if x > 0 {
                    others.push((x - 1, z));
                }
                if z > 0 {
                    others.push((x, z - 1));
                }
                if diagonal && x > 0 && z > 0 {
                    others.push((x - 1, z - 1));
                }
                if diagonal && x > 0 && z + 1 < self.height {
                    others.push((x - 1, z + 1));
                }
                for (ox, oz) in others {
                    let there = NodeId::new(ox * self.height + oz);
                    self.graph.try_connect(here, there)?;
                }
            }
        }
        Ok(())
    }

    fn connect_hex(&mut self) -> Result<(), GraphError> {
        const EVEN: [(isize, isize); 6] = [(-1, 0), (1, 0), (-1, -1), (0, -1), (-1, 1), (0, 1)];
        const ODD: [(isize, isize); 6] = [(-1, 0), (1, 0), (0, -1), (1, -1), (0, 1), (1, 1)];

        for x in 0..self.width {
            for z in 0..self.height {
                let here = NodeId::new(x * self.height + z);
                let offsets = if z % 2 == 0 { &EVEN } else { &ODD };
                for &(dx, dz) in offsets {
                    let (Some(nx), Some(nz)) =
                        (x.checked_add_signed(dx), z.checked_add_signed(dz))
                    else {
                        continue;
                    };
                    if let Some(there) = self.at(nx, nz) {
                        self.graph.try_connect(here, there)?;
                    }
                }
            }
        }
        Ok(())
    }
}
