//! Opaque handles into a handle graph.
//!
//! Handles are plain values: copying one never touches the graph, and a
//! handle is only meaningful for the graph that produced it.

use serde::{Deserialize, Serialize};

/// Node identifier as stored by the graph.
pub type NodeId = u64;

/// Largest id a [`NodeHandle`] can carry next to its orientation bit.
pub const MAX_NODE_ID: NodeId = u64::MAX >> 1;

/// An oriented reference to a node.
///
/// The low bit carries the orientation, the remaining bits the node id,
/// the same packing libhandlegraph uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeHandle(u64);

impl NodeHandle {
    /// Ids above [`MAX_NODE_ID`] lose their top bit. Graphs reject them on
    /// insert.
    pub fn new(id: NodeId, is_reverse: bool) -> Self {
        Self((id << 1) | u64::from(is_reverse))
    }

    pub fn forward(id: NodeId) -> Self {
        Self::new(id, false)
    }

    pub fn id(self) -> NodeId {
        self.0 >> 1
    }

    pub fn is_reverse(self) -> bool {
        self.0 & 1 == 1
    }

    /// The same node, read in the other orientation.
    pub fn flip(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// The same node, read forward.
    pub fn unoriented(self) -> Self {
        Self(self.0 & !1)
    }
}

impl std::fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.id(), if self.is_reverse() { '-' } else { '+' })
    }
}

/// Opaque path identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PathHandle(pub u64);

impl std::fmt::Display for PathHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One occurrence of a node within a path.
///
/// `offset` is backend-defined; callers must only move between steps with
/// `HandleGraph::get_next_step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StepHandle {
    pub path: PathHandle,
    pub offset: u64,
}

impl StepHandle {
    pub fn new(path: PathHandle, offset: u64) -> Self {
        Self { path, offset }
    }
}
