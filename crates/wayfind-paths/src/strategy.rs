//! Strategy selection: the [`Algorithm`] tag and the [`Strategy`] variant
//! that dispatches to the concrete pathfinders.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use wayfind_core::{Graph, NodeId};

use crate::astar::AStar;
use crate::bfs::Bfs;
use crate::contract::{Pathfinder, StepSearch};
use crate::dfs::Dfs;
use crate::dijkstra::Dijkstra;
use crate::record::{Path, SearchRecord};

/// The four search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// Every algorithm, in a stable order.
    pub const ALL: [Algorithm; 4] = [Self::Bfs, Self::Dfs, Self::Dijkstra, Self::AStar];

    /// Short lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
        }
    }

    /// Whether the algorithm minimises total cost (as opposed to hops, or
    /// nothing at all).
    pub const fn is_weighted(self) -> bool {
        matches!(self, Self::Dijkstra | Self::AStar)
    }

    /// Build a fresh pathfinder running this algorithm.
    pub fn pathfinder(self) -> Strategy {
        match self {
            Self::Bfs => Strategy::Bfs(Bfs::new()),
            Self::Dfs => Strategy::Dfs(Dfs::new()),
            Self::Dijkstra => Strategy::Dijkstra(Dijkstra::new()),
            Self::AStar => Strategy::AStar(AStar::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \"{}\" (expected bfs, dfs, dijkstra or astar)",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::Bfs),
            "dfs" | "depth-first" => Ok(Self::Dfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Any of the four pathfinders, chosen at construction time.
#[derive(Debug, Clone)]
pub enum Strategy {
    Bfs(Bfs),
    Dfs(Dfs),
    Dijkstra(Dijkstra),
    AStar(AStar),
}

impl From<Algorithm> for Strategy {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.pathfinder()
    }
}

impl Pathfinder for Strategy {
    fn algorithm(&self) -> Algorithm {
        match self {
            Self::Bfs(p) => p.algorithm(),
            Self::Dfs(p) => p.algorithm(),
            Self::Dijkstra(p) => p.algorithm(),
            Self::AStar(p) => p.algorithm(),
        }
    }

    fn find_path(&mut self, graph: &Graph, start: NodeId, end: NodeId) -> Option<Path> {
        match self {
            Self::Bfs(p) => p.find_path(graph, start, end),
            Self::Dfs(p) => p.find_path(graph, start, end),
            Self::Dijkstra(p) => p.find_path(graph, start, end),
            Self::AStar(p) => p.find_path(graph, start, end),
        }
    }

    fn find_path_step_by_step<'a>(
        &'a mut self,
        graph: &'a Graph,
        start: NodeId,
        end: NodeId,
        delay: Duration,
    ) -> StepSearch<'a> {
        match self {
            Self::Bfs(p) => p.find_path_step_by_step(graph, start, end, delay),
            Self::Dfs(p) => p.find_path_step_by_step(graph, start, end, delay),
            Self::Dijkstra(p) => p.find_path_step_by_step(graph, start, end, delay),
            Self::AStar(p) => p.find_path_step_by_step(graph, start, end, delay),
        }
    }

    fn record(&self) -> &SearchRecord {
        match self {
            Self::Bfs(p) => p.record(),
            Self::Dfs(p) => p.record(),
            Self::Dijkstra(p) => p.record(),
            Self::AStar(p) => p.record(),
        }
    }
}
