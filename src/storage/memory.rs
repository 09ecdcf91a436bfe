//! In-memory handle graph.
//!
//! This is the reference implementation of `HandleGraph`.
//! Nodes, edges and paths live in plain hash maps and vectors.
//!
//! ## Limitations
//!
//! - **Build, then freeze**: mutation goes through `&mut self` builder
//!   methods. Once handed to a store the graph is only read.
//! - **Linear paths**: a step handle is an offset into the path's vector, so
//!   step lookup is O(1) but there is no support for editing paths.
//!
//! Use this backend for:
//! - Testing the pattern dispatcher and the generators
//! - Embedding small graphs loaded from GFA

use std::io::BufRead;
use std::path::Path as FsPath;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::model::{MAX_NODE_ID, NodeHandle, NodeId, PathHandle, StepHandle};
use crate::{Error, Result};
use super::HandleGraph;

// ============================================================================
// MemoryGraph
// ============================================================================

/// In-memory sequence graph with embedded paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryGraph {
    sequences: HashMap<NodeId, String>,
    /// oriented handle → handles on its right side
    right: HashMap<NodeHandle, SmallVec<[NodeHandle; 4]>>,
    paths: Vec<MemoryPath>,
    path_names: HashMap<String, PathHandle>,
    min_id: Option<NodeId>,
    max_id: Option<NodeId>,
    edge_count: usize,
}

#[derive(Debug, Clone)]
struct MemoryPath {
    name: String,
    steps: Vec<NodeHandle>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a GFA 1.0 document.
    pub fn from_gfa(reader: impl BufRead) -> Result<Self> {
        super::gfa::parse(reader)
    }

    /// Load a GFA 1.0 file.
    pub fn load(path: impl AsRef<FsPath>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_gfa(std::io::BufReader::new(file))
    }

    // ========================================================================
    // Builder
    // ========================================================================

    /// Add a node with the given id and forward sequence.
    pub fn create_handle(&mut self, sequence: impl Into<String>, id: NodeId) -> Result<NodeHandle> {
        if id > MAX_NODE_ID {
            return Err(Error::Invariant(format!("node id {id} exceeds {MAX_NODE_ID}")));
        }
        if self.sequences.contains_key(&id) {
            return Err(Error::Invariant(format!("node {id} already exists")));
        }
        self.sequences.insert(id, sequence.into());
        self.min_id = Some(self.min_id.map_or(id, |m| m.min(id)));
        self.max_id = Some(self.max_id.map_or(id, |m| m.max(id)));
        Ok(NodeHandle::forward(id))
    }

    /// Connect the right side of `left` to the left side of `right`.
    ///
    /// Stored from both strands so `follow_edges` works from either
    /// orientation. Adding an edge twice is a no-op.
    pub fn create_edge(&mut self, left: NodeHandle, right: NodeHandle) -> Result<()> {
        for h in [left, right] {
            if !self.sequences.contains_key(&h.id()) {
                return Err(Error::Invariant(format!("edge endpoint {h} is not a node")));
            }
        }
        let forward = self.right.entry(left).or_default();
        if forward.contains(&right) {
            return Ok(());
        }
        forward.push(right);
        let (mirror_from, mirror_to) = (right.flip(), left.flip());
        if (mirror_from, mirror_to) != (left, right) {
            self.right.entry(mirror_from).or_default().push(mirror_to);
        }
        self.edge_count += 1;
        Ok(())
    }

    pub fn create_path(&mut self, name: impl Into<String>) -> Result<PathHandle> {
        let name = name.into();
        if self.path_names.contains_key(&name) {
            return Err(Error::Invariant(format!("path '{name}' already exists")));
        }
        let handle = PathHandle(self.paths.len() as u64);
        self.path_names.insert(name.clone(), handle);
        self.paths.push(MemoryPath { name, steps: Vec::new() });
        Ok(handle)
    }

    pub fn append_step(&mut self, path: PathHandle, handle: NodeHandle) -> Result<StepHandle> {
        if !self.sequences.contains_key(&handle.id()) {
            return Err(Error::Invariant(format!("step node {handle} is not a node")));
        }
        let p = self
            .paths
            .get_mut(path.0 as usize)
            .ok_or_else(|| Error::UnknownPath(path.to_string()))?;
        p.steps.push(handle);
        Ok(StepHandle::new(path, p.steps.len() as u64 - 1))
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn step_count(&self, path: PathHandle) -> usize {
        self.paths.get(path.0 as usize).map_or(0, |p| p.steps.len())
    }

    fn path(&self, path: PathHandle) -> &MemoryPath {
        &self.paths[path.0 as usize]
    }
}

/// Reverse complement of a nucleotide sequence. IUPAC codes other than
/// `ACGTN` are reversed but left uncomplemented.
pub fn reverse_complement(seq: &str) -> String {
    seq.chars()
        .rev()
        .map(|c| match c {
            'A' => 'T',
            'T' => 'A',
            'C' => 'G',
            'G' => 'C',
            'a' => 't',
            't' => 'a',
            'c' => 'g',
            'g' => 'c',
            other => other,
        })
        .collect()
}

// ============================================================================
// HandleGraph impl
// ============================================================================

impl HandleGraph for MemoryGraph {
    fn has_node(&self, id: NodeId) -> bool {
        self.sequences.contains_key(&id)
    }

    fn get_handle(&self, id: NodeId, is_reverse: bool) -> NodeHandle {
        NodeHandle::new(id, is_reverse)
    }

    fn get_sequence(&self, handle: NodeHandle) -> String {
        let seq = self.sequences.get(&handle.id()).map(String::as_str).unwrap_or_default();
        if handle.is_reverse() { reverse_complement(seq) } else { seq.to_owned() }
    }

    fn get_length(&self, handle: NodeHandle) -> usize {
        self.sequences.get(&handle.id()).map_or(0, String::len)
    }

    fn min_node_id(&self) -> NodeId {
        self.min_id.unwrap_or(1)
    }

    fn max_node_id(&self) -> NodeId {
        self.max_id.unwrap_or(0)
    }

    fn node_count(&self) -> usize {
        self.sequences.len()
    }

    fn follow_edges(
        &self,
        handle: NodeHandle,
        go_left: bool,
        visit: &mut dyn FnMut(NodeHandle) -> bool,
    ) -> bool {
        let (from, flip) = if go_left { (handle.flip(), true) } else { (handle, false) };
        let Some(next) = self.right.get(&from) else { return true };
        for &h in next {
            if !visit(if flip { h.flip() } else { h }) {
                return false;
            }
        }
        true
    }

    fn for_each_path_handle(&self, visit: &mut dyn FnMut(PathHandle) -> bool) -> bool {
        (0..self.paths.len() as u64).all(|i| visit(PathHandle(i)))
    }

    fn get_path_name(&self, path: PathHandle) -> String {
        self.path(path).name.clone()
    }

    fn get_path_handle(&self, name: &str) -> Option<PathHandle> {
        self.path_names.get(name).copied()
    }

    fn path_count(&self) -> usize {
        self.paths.len()
    }

    fn is_empty(&self, path: PathHandle) -> bool {
        self.path(path).steps.is_empty()
    }

    fn path_begin(&self, path: PathHandle) -> StepHandle {
        StepHandle::new(path, 0)
    }

    fn has_next_step(&self, step: StepHandle) -> bool {
        (step.offset as usize + 1) < self.path(step.path).steps.len()
    }

    fn get_next_step(&self, step: StepHandle) -> StepHandle {
        StepHandle::new(step.path, step.offset + 1)
    }

    fn get_handle_of_step(&self, step: StepHandle) -> NodeHandle {
        self.path(step.path).steps[step.offset as usize]
    }

    fn get_path_handle_of_step(&self, step: StepHandle) -> PathHandle {
        step.path
    }
}

// ============================================================================
// Tests
// ============================================================================
