//! Demo consumers of the wayfind engine: seeded grid generation, an ASCII
//! view that follows a stepwise search, and the run configuration used by
//! the `wayfind-walk` binary.

pub mod grid;
pub mod view;

use std::time::Duration;

use wayfind_paths::Algorithm;

pub use grid::{GridConfig, GridMap, Layout};
pub use view::{Mark, Overlay};

/// How the demo runs a search.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub algorithm: Algorithm,
    /// Pause between steps.
    pub step_delay: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AStar,
            step_delay: Duration::from_millis(50),
        }
    }
}
