//! Interchangeable graph-search strategies over a [`wayfind_core::Graph`].
//!
//! Four pathfinders share one contract, [`Pathfinder`]:
//!
//! - **Breadth-first** ([`Bfs`]): fewest edges
//! - **Depth-first** ([`Dfs`]): some path, cheapest in memory
//! - **Dijkstra** ([`Dijkstra`]): least total cost
//! - **A\*** ([`AStar`]): least total cost, goal-directed
//!
//! Every pathfinder can run to completion with
//! [`find_path`](Pathfinder::find_path), or as a [`StepSearch`] state
//! machine that pauses after each frontier pop and reports what it did as
//! [`SearchEvent`]s, for callers that animate the search.
//!
//! Bookkeeping is kept in arrays indexed by [`NodeId`](wayfind_core::NodeId)
//! and reused between calls on the same instance.
//!
//! # Example
//!
//! ```
//! use wayfind_core::{Graph, Position};
//! use wayfind_paths::{Algorithm, Pathfinder};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_walkable(Position::planar(0.0, 0.0));
//! let b = graph.add_walkable(Position::planar(1.0, 0.0));
//! let c = graph.add_walkable(Position::planar(2.0, 0.0));
//! graph.connect(a, b).unwrap();
//! graph.connect(b, c).unwrap();
//!
//! let mut finder = Algorithm::AStar.pathfinder();
//! assert_eq!(finder.find_path(&graph, a, c), Some(vec![a, b, c]));
//! ```

mod astar;
mod bfs;
mod contract;
mod dfs;
mod dijkstra;
mod queue;
mod record;
mod strategy;
mod weighted;

#[cfg(test)]
mod testgrid;

pub use astar::AStar;
pub use bfs::Bfs;
pub use contract::{Callbacks, Pathfinder, SearchEvent, SearchObserver, StepSearch, StepStatus};
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use queue::{PriorityQueue, QueueError};
pub use record::{Parent, Path, SearchRecord};
pub use strategy::{Algorithm, ParseAlgorithmError, Strategy};
