//! Step identifiers and the FALDO positions at either side of a step.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::storage::HandleGraph;
use super::{NodeHandle, PathIri, StepHandle};

/// IRI of one step of a path.
///
/// Carries its 1-based `rank` and 1-based sequence `position` so neither has
/// to be recomputed by walking the path. The graph reference is borrowed:
/// the graph must outlive the identifier.
#[derive(Clone)]
pub struct StepIri<'g> {
    graph: &'g dyn HandleGraph,
    handle: StepHandle,
    path: PathIri,
    base: Arc<str>,
    rank: u64,
    position: u64,
}

impl<'g> StepIri<'g> {
    pub fn new(
        graph: &'g dyn HandleGraph,
        handle: StepHandle,
        path: PathIri,
        base: Arc<str>,
        rank: u64,
        position: u64,
    ) -> Self {
        Self { graph, handle, path, base, rank, position }
    }

    pub fn handle(&self) -> StepHandle {
        self.handle
    }

    pub fn rank(&self) -> u64 {
        self.rank
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn path(&self) -> &PathIri {
        &self.path
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn graph(&self) -> &'g dyn HandleGraph {
        self.graph
    }

    /// The oriented node visited by this step.
    pub fn node_handle(&self) -> NodeHandle {
        self.graph.get_handle_of_step(self.handle)
    }

    pub fn begin(&self) -> StepBeginIri<'g> {
        StepBeginIri { step: self.clone() }
    }

    pub fn end(&self) -> StepEndIri<'g> {
        StepEndIri { step: self.clone() }
    }
}

impl PartialEq for StepIri<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle && self.base == other.base
    }
}

impl Eq for StepIri<'_> {}

impl Hash for StepIri<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.handle.hash(state);
    }
}

impl PartialOrd for StepIri<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StepIri<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.base
            .cmp(&other.base)
            .then_with(|| self.path.cmp(&other.path))
            .then(self.rank.cmp(&other.rank))
    }
}

impl fmt::Display for StepIri<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_absolute() {
            write!(f, "{}#step-{}", self.path, self.rank)
        } else {
            write!(f, "{}/step/{}", self.path, self.rank)
        }
    }
}

impl fmt::Debug for StepIri<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StepIri({self}, position={})", self.position)
    }
}

fn fmt_position(f: &mut fmt::Formatter<'_>, path: &PathIri, position: u64) -> fmt::Result {
    if path.is_absolute() {
        write!(f, "{path}#p{position}")
    } else {
        write!(f, "{path}/position/{position}")
    }
}

/// `faldo:begin` of a step: the step's own position.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StepBeginIri<'g> {
    step: StepIri<'g>,
}

impl<'g> StepBeginIri<'g> {
    pub fn step(&self) -> &StepIri<'g> {
        &self.step
    }

    pub fn rank(&self) -> u64 {
        self.step.rank
    }

    pub fn position(&self) -> u64 {
        self.step.position
    }

    pub fn path(&self) -> &PathIri {
        &self.step.path
    }
}

impl fmt::Display for StepBeginIri<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_position(f, self.path(), self.position())
    }
}

impl fmt::Debug for StepBeginIri<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StepBeginIri({self})")
    }
}

/// `faldo:end` of a step: the step's position plus its node length.
///
/// The length is read from the graph on every call, so callers that only
/// need the begin side never pay for it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StepEndIri<'g> {
    step: StepIri<'g>,
}

impl<'g> StepEndIri<'g> {
    pub fn step(&self) -> &StepIri<'g> {
        &self.step
    }

    pub fn rank(&self) -> u64 {
        self.step.rank
    }

    pub fn position(&self) -> u64 {
        let node = self.step.node_handle();
        self.step.position + self.step.graph.get_length(node) as u64
    }

    pub fn path(&self) -> &PathIri {
        &self.step.path
    }
}

impl fmt::Display for StepEndIri<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_position(f, self.path(), self.position())
    }
}

impl fmt::Debug for StepEndIri<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StepEndIri({self})")
    }
}
