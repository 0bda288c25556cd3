//! The contract every search strategy satisfies, and the stepwise driver
//! that turns a search into an observable state machine.

use std::time::Duration;

use wayfind_core::{Graph, NodeId};

use crate::record::{Path, SearchRecord};
use crate::strategy::Algorithm;

/// A graph-search strategy.
///
/// Each instance owns its frontier and [`SearchRecord`], which are cleared
/// at the start of every call. Sequential calls on one instance are fine;
/// a [`StepSearch`] holds the instance mutably until it is dropped, so runs
/// can never overlap.
pub trait Pathfinder {
    /// Which algorithm this instance runs.
    fn algorithm(&self) -> Algorithm;

    /// Search from `start` to `end` and return the path, or `None` if either
    /// handle is absent from `graph` or `end` is unreachable.
    fn find_path(&mut self, graph: &Graph, start: NodeId, end: NodeId) -> Option<Path>;

    /// Prepare the same search as [`find_path`](Self::find_path) as a
    /// cooperative sequence of steps.
    ///
    /// Nothing runs until the first [`StepSearch::step`]. Every suspension
    /// asks the caller to wait `delay` before resuming.
    fn find_path_step_by_step<'a>(
        &'a mut self,
        graph: &'a Graph,
        start: NodeId,
        end: NodeId,
        delay: Duration,
    ) -> StepSearch<'a>;

    /// Bookkeeping left behind by the last call.
    fn record(&self) -> &SearchRecord;
}

// ---------------------------------------------------------------------------
// Engine: the per-strategy frontier operations the drivers are built on
// ---------------------------------------------------------------------------

pub(crate) trait Engine {
    fn kind(&self) -> Algorithm;

    /// Clear all state and seed the frontier with `start`.
    fn begin(&mut self, graph: &Graph, start: NodeId, end: NodeId);

    /// Take the next node to expand off the frontier.
    fn pop(&mut self) -> Option<NodeId>;

    /// Push the neighbours of `current` that are new or newly improved,
    /// reporting each one to `on_frontier`.
    fn expand(
        &mut self,
        graph: &Graph,
        current: NodeId,
        end: NodeId,
        on_frontier: &mut dyn FnMut(NodeId),
    );

    fn search_record(&self) -> &SearchRecord;
}

fn log_finished(algorithm: Algorithm, record: &SearchRecord, path: Option<&Path>) {
    match path {
        Some(p) => log::debug!(
            "{algorithm}: found path of {} nodes after expanding {}",
            p.len(),
            record.expanded().len()
        ),
        None => log::debug!(
            "{algorithm}: goal unreachable after expanding {}",
            record.expanded().len()
        ),
    }
}

/// Run a search synchronously to completion.
pub(crate) fn run_to_end<E: Engine + ?Sized>(
    engine: &mut E,
    graph: &Graph,
    start: NodeId,
    end: NodeId,
) -> Option<Path> {
    if !graph.contains(start) || !graph.contains(end) {
        log::debug!(
            "{}: rejecting search {start} -> {end}, handle not in graph",
            engine.kind()
        );
        return None;
    }

    engine.begin(graph, start, end);
    while let Some(current) = engine.pop() {
        log::trace!("{}: pop {current}", engine.kind());
        if current == end {
            break;
        }
        engine.expand(graph, current, end, &mut |_: NodeId| {});
    }

    let path = engine.search_record().reconstruct(start, end);
    log_finished(engine.kind(), engine.search_record(), path.as_ref());
    path
}

// ---------------------------------------------------------------------------
// Events and observers
// ---------------------------------------------------------------------------

/// Something observable that happened during one step.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// A node was taken off the frontier for expansion. Never reported for
    /// the start or the end node.
    Processing(NodeId),
    /// A node was discovered, or reached more cheaply, and pushed onto the
    /// frontier. Never reported for the end node.
    Frontier(NodeId),
    /// The search is over. Reported exactly once per run.
    Finished(Option<Path>),
}

impl SearchEvent {
    /// Forward this event to the matching observer hook.
    pub fn dispatch(&self, observer: &mut impl SearchObserver) {
        match self {
            Self::Processing(id) => observer.on_processing(*id),
            Self::Frontier(id) => observer.on_frontier(*id),
            Self::Finished(path) => observer.on_finished(path.as_deref()),
        }
    }
}

/// Receives the events of a stepwise search.
///
/// All hooks default to doing nothing.
pub trait SearchObserver {
    fn on_processing(&mut self, _node: NodeId) {}
    fn on_frontier(&mut self, _node: NodeId) {}
    fn on_finished(&mut self, _path: Option<&[NodeId]>) {}
}

impl SearchObserver for () {}

/// A [`SearchObserver`] assembled from three closures.
pub struct Callbacks<P, F, D> {
    pub on_processing: P,
    pub on_frontier: F,
    pub on_finished: D,
}

impl<P, F, D> Callbacks<P, F, D>
where
    P: FnMut(NodeId),
    F: FnMut(NodeId),
    D: FnMut(Option<&[NodeId]>),
{
    pub fn new(on_processing: P, on_frontier: F, on_finished: D) -> Self {
        Self {
            on_processing,
            on_frontier,
            on_finished,
        }
    }
}

impl<P, F, D> SearchObserver for Callbacks<P, F, D>
where
    P: FnMut(NodeId),
    F: FnMut(NodeId),
    D: FnMut(Option<&[NodeId]>),
{
    fn on_processing(&mut self, node: NodeId) {
        (self.on_processing)(node);
    }

    fn on_frontier(&mut self, node: NodeId) {
        (self.on_frontier)(node);
    }

    fn on_finished(&mut self, path: Option<&[NodeId]>) {
        (self.on_finished)(path);
    }
}

// ---------------------------------------------------------------------------
// StepSearch
// ---------------------------------------------------------------------------

/// Result of one [`StepSearch::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The search paused; resume after the given delay.
    Suspended(Duration),
    /// The search is over (or was cancelled). Further steps do nothing.
    Done,
}

#[derive(Debug, Clone, Copy)]
enum State {
    NotStarted,
    /// Paused right after popping this node, before expanding it.
    Popped(NodeId),
    Done,
}

/// A search run as an explicit state machine.
///
/// Each [`step`](Self::step) resumes the search where it paused: it expands
/// the node popped last time, pops the next one, and pauses again. The
/// frontier, predecessor and cost transitions are exactly those of
/// [`Pathfinder::find_path`]; steps only add observation points.
pub struct StepSearch<'a> {
    engine: &'a mut dyn Engine,
    graph: &'a Graph,
    start: NodeId,
    end: NodeId,
    delay: Duration,
    state: State,
}

impl<'a> StepSearch<'a> {
    pub(crate) fn new(
        engine: &'a mut dyn Engine,
        graph: &'a Graph,
        start: NodeId,
        end: NodeId,
        delay: Duration,
    ) -> Self {
        Self {
            engine,
            graph,
            start,
            end,
            delay,
            state: State::NotStarted,
        }
    }

    /// Whether the run has finished or been cancelled.
    pub fn is_done(&self) -> bool {
        matches!(self.state, State::Done)
    }

    /// The delay handed out with every suspension.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Stop the run between steps. No [`SearchEvent::Finished`] is emitted.
    pub fn cancel(&mut self) {
        if !self.is_done() {
            log::debug!("{}: stepwise search cancelled", self.engine.kind());
        }
        self.state = State::Done;
    }

    /// Advance to the next suspension point, appending the events produced
    /// on the way to `events`.
    pub fn step(&mut self, events: &mut Vec<SearchEvent>) -> StepStatus {
        match std::mem::replace(&mut self.state, State::Done) {
            State::Done => StepStatus::Done,
            State::NotStarted => {
                if !self.graph.contains(self.start) || !self.graph.contains(self.end) {
                    log::debug!(
                        "{}: rejecting search {} -> {}, handle not in graph",
                        self.engine.kind(),
                        self.start,
                        self.end
                    );
                    events.push(SearchEvent::Finished(None));
                    return StepStatus::Done;
                }
                self.engine.begin(self.graph, self.start, self.end);
                self.advance(events)
            }
            State::Popped(current) => {
                let end = self.end;
                self.engine
                    .expand(self.graph, current, end, &mut |next: NodeId| {
                        if next != end {
                            events.push(SearchEvent::Frontier(next));
                        }
                    });
                self.advance(events)
            }
        }
    }

    fn advance(&mut self, events: &mut Vec<SearchEvent>) -> StepStatus {
        if let Some(current) = self.engine.pop() {
            log::trace!("{}: pop {current}", self.engine.kind());
            if current != self.start && current != self.end {
                events.push(SearchEvent::Processing(current));
            }
            if current != self.end {
                self.state = State::Popped(current);
                return StepStatus::Suspended(self.delay);
            }
        }

        let path = self.engine.search_record().reconstruct(self.start, self.end);
        log_finished(self.engine.kind(), self.engine.search_record(), path.as_ref());
        events.push(SearchEvent::Finished(path));
        self.state = State::Done;
        StepStatus::Done
    }

    /// Drive the run to completion without waiting, forwarding every event
    /// to `observer`. Returns the final path.
    pub fn run(self, observer: &mut impl SearchObserver) -> Option<Path> {
        self.run_with(observer, |_| {})
    }

    /// Drive the run to completion, calling `sleep` with the delay at every
    /// suspension.
    pub fn run_with(
        mut self,
        observer: &mut impl SearchObserver,
        mut sleep: impl FnMut(Duration),
    ) -> Option<Path> {
        let mut events = Vec::new();
        let mut result = None;
        loop {
            events.clear();
            let status = self.step(&mut events);
            for event in events.drain(..) {
                event.dispatch(&mut *observer);
                if let SearchEvent::Finished(path) = event {
                    result = path;
                }
            }
            match status {
                StepStatus::Suspended(delay) => sleep(delay),
                StepStatus::Done => return result,
            }
        }
    }
}

impl Iterator for StepSearch<'_> {
    type Item = Vec<SearchEvent>;

    /// Yield the events of each step until the run is over.
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done() {
            return None;
        }
        let mut events = Vec::new();
        self.step(&mut events);
        Some(events)
    }
}
