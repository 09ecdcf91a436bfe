//! # Handle Graph Trait
//!
//! This is THE contract between the triple view and any graph engine.
//! The view only ever reads through it.
//!
//! ## Implementations
//!
//! | Backend | Module | Description |
//! |---------|--------|-------------|
//! | `MemoryGraph` | `memory` | In-memory for testing/embedding, loads GFA |
//!
//! Engines such as odgi or xg plug in by implementing [`HandleGraph`] over
//! their own handles.

pub mod memory;
pub mod gfa;

use crate::model::{NodeHandle, NodeId, PathHandle, StepHandle};

pub use memory::MemoryGraph;

// ============================================================================
// HandleGraph Trait
// ============================================================================

/// Read-only access to a sequence graph with embedded paths.
///
/// Callbacks return `true` to keep iterating and `false` to stop; the
/// iterating method returns `false` if it was stopped early.
///
/// Handles passed in must come from this graph. Methods taking a node id
/// require `has_node(id)`, methods taking a path handle require it to be a
/// handle this graph produced; a backend may panic otherwise.
pub trait HandleGraph: Send + Sync {
    // ========================================================================
    // Nodes
    // ========================================================================

    fn has_node(&self, id: NodeId) -> bool;

    fn get_handle(&self, id: NodeId, is_reverse: bool) -> NodeHandle;

    fn get_id(&self, handle: NodeHandle) -> NodeId {
        handle.id()
    }

    fn get_is_reverse(&self, handle: NodeHandle) -> bool {
        handle.is_reverse()
    }

    fn flip(&self, handle: NodeHandle) -> NodeHandle {
        handle.flip()
    }

    /// Sequence as read in the handle's orientation.
    fn get_sequence(&self, handle: NodeHandle) -> String;

    fn get_length(&self, handle: NodeHandle) -> usize;

    fn min_node_id(&self) -> NodeId;

    fn max_node_id(&self) -> NodeId;

    fn node_count(&self) -> usize;

    // ========================================================================
    // Edges
    // ========================================================================

    /// Visit the handles adjacent to `handle` on its right side, or on its
    /// left side when `go_left`.
    fn follow_edges(
        &self,
        handle: NodeHandle,
        go_left: bool,
        visit: &mut dyn FnMut(NodeHandle) -> bool,
    ) -> bool;

    // ========================================================================
    // Paths
    // ========================================================================

    fn for_each_path_handle(&self, visit: &mut dyn FnMut(PathHandle) -> bool) -> bool;

    fn get_path_name(&self, path: PathHandle) -> String;

    fn get_path_handle(&self, name: &str) -> Option<PathHandle>;

    fn has_path(&self, name: &str) -> bool {
        self.get_path_handle(name).is_some()
    }

    fn path_count(&self) -> usize;

    /// True if the path has no steps.
    fn is_empty(&self, path: PathHandle) -> bool;

    /// First step of a non-empty path.
    fn path_begin(&self, path: PathHandle) -> StepHandle;

    fn has_next_step(&self, step: StepHandle) -> bool;

    fn get_next_step(&self, step: StepHandle) -> StepHandle;

    fn get_handle_of_step(&self, step: StepHandle) -> NodeHandle;

    fn get_path_handle_of_step(&self, step: StepHandle) -> PathHandle;
}
