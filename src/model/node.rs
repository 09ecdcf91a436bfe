//! Node identifier.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::{NodeHandle, NodeId};

/// IRI of a graph node: `{base}node/{id}`.
///
/// Equality, ordering and hashing use the node id and base, never the
/// orientation of the wrapped handle nor the string form.
#[derive(Debug, Clone)]
pub struct NodeIri {
    handle: NodeHandle,
    base: Arc<str>,
}

impl NodeIri {
    pub fn new(handle: NodeHandle, base: Arc<str>) -> Self {
        Self { handle, base }
    }

    pub fn handle(&self) -> NodeHandle {
        self.handle
    }

    pub fn id(&self) -> NodeId {
        self.handle.id()
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl PartialEq for NodeIri {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id() && self.base == other.base
    }
}

impl Eq for NodeIri {}

impl Hash for NodeIri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state);
        self.id().hash(state);
    }
}

impl PartialOrd for NodeIri {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NodeIri {
    fn cmp(&self, other: &Self) -> Ordering {
        self.base.cmp(&other.base).then(self.id().cmp(&other.id()))
    }
}

impl fmt::Display for NodeIri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}node/{}", self.base, self.id())
    }
}
