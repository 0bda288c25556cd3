//! ASCII rendering of a grid and the progress of a search over it.

use wayfind_core::NodeId;
use wayfind_paths::SearchObserver;

use crate::grid::{GridMap, Layout};

/// What a cell currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Open,
    Obstacle,
    Start,
    End,
    Processing,
    Visited,
    Frontier,
    Path,
}

impl Mark {
    pub fn glyph(self) -> char {
        match self {
            Self::Open => '.',
            Self::Obstacle => '#',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Processing => '@',
            Self::Visited => ':',
            Self::Frontier => 'o',
            Self::Path => '*',
        }
    }
}

/// Per-node marks, updated from search events.
///
/// The node being processed is shown as such until the next one is taken
/// off the frontier, after which it is shown as visited.
#[derive(Debug, Clone)]
pub struct Overlay {
    marks: Vec<Mark>,
    start: NodeId,
    end: NodeId,
    current: Option<NodeId>,
    finished: bool,
}

impl Overlay {
    /// Fresh marks for `map`, with `start` and `end` highlighted.
    pub fn new(map: &GridMap, start: NodeId, end: NodeId) -> Self {
        let mut marks: Vec<Mark> = map
            .graph
            .iter()
            .map(|(_, n)| if n.walkable() { Mark::Open } else { Mark::Obstacle })
            .collect();
        for (id, mark) in [(start, Mark::Start), (end, Mark::End)] {
            if let Some(m) = marks.get_mut(id.index()) {
                *m = mark;
            }
        }
        Self {
            marks,
            start,
            end,
            current: None,
            finished: false,
        }
    }

    pub fn mark(&self, id: NodeId) -> Option<Mark> {
        self.marks.get(id.index()).copied()
    }

    /// Whether the search has reported its result.
    pub fn finished(&self) -> bool {
        self.finished
    }

    fn set(&mut self, id: NodeId, mark: Mark) {
        if id == self.start || id == self.end {
            return;
        }
        if let Some(m) = self.marks.get_mut(id.index()) {
            *m = mark;
        }
    }

    /// Draw the grid, one text row per `z`, top row first. Hex rows with an
    /// odd index are indented by one column.
    pub fn render(&self, map: &GridMap) -> String {
        let (width, height) = map.size();
        let mut out = String::with_capacity((width * 2 + 2) * height);
        for z in (0..height).rev() {
            if map.layout() == Layout::Hex && z % 2 != 0 {
                out.push(' ');
            }
            for x in 0..width {
                let glyph = map
                    .at(x, z)
                    .and_then(|id| self.mark(id))
                    .map_or(' ', Mark::glyph);
                out.push(glyph);
                if x + 1 < width {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out
    }
}

impl SearchObserver for Overlay {
    fn on_processing(&mut self, node: NodeId) {
        if let Some(prev) = self.current.replace(node) {
            self.set(prev, Mark::Visited);
        }
        self.set(node, Mark::Processing);
    }

    fn on_frontier(&mut self, node: NodeId) {
        self.set(node, Mark::Frontier);
    }

    fn on_finished(&mut self, path: Option<&[NodeId]>) {
        if let Some(prev) = self.current.take() {
            self.set(prev, Mark::Visited);
        }
        for &id in path.unwrap_or(&[]) {
            self.set(id, Mark::Path);
        }
        self.finished = true;
    }
}
