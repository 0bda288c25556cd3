//! **wayfind-core** — spatial graph types for the wayfind search engine.
//!
//! This crate provides the data the search strategies in `wayfind-paths`
//! operate on: [`Position`]s in search space, [`Node`]s carrying walkability
//! and a traversal penalty, and the [`Graph`] arena that owns them and keeps
//! adjacency symmetric.

pub mod geom;
pub mod graph;
pub mod node;

pub use geom::{Position, euclidean};
pub use graph::{Graph, GraphError};
pub use node::{DEFAULT_PENALTY, Node, NodeId};
