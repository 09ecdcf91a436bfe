//! Path index.
//!
//! Built once when a store is opened. Every path gets exactly one
//! [`PathIri`], so path identifiers stay stable for the lifetime of the
//! store, and path IRIs resolve back to handles without re-reading names
//! from the graph.

use std::sync::Arc;

use hashbrown::HashMap;
use tracing::debug;

use crate::model::{PathHandle, PathIri};
use crate::storage::HandleGraph;
use crate::{Error, Result};

/// Immutable snapshot of the paths of a graph.
#[derive(Debug, Clone, Default)]
pub struct PathIndex {
    paths: Vec<PathIri>,
    by_handle: HashMap<PathHandle, usize>,
    by_uri: HashMap<Arc<str>, usize>,
    by_name: HashMap<Arc<str>, usize>,
}

impl PathIndex {
    /// Enumerate every path of `graph` and build its identifier.
    pub fn build(graph: &dyn HandleGraph, base: &str) -> Self {
        let mut index = PathIndex::default();
        graph.for_each_path_handle(&mut |handle| {
            let name = graph.get_path_name(handle);
            let iri = PathIri::new(handle, &name, base);
            let slot = index.paths.len();
            index.by_handle.insert(handle, slot);
            index.by_uri.insert(Arc::from(iri.uri()), slot);
            index.by_name.insert(Arc::from(iri.name()), slot);
            index.paths.push(iri);
            true
        });
        debug!(paths = index.paths.len(), base, "built path index");
        index
    }

    /// The identifier of a path that existed when the index was built.
    pub fn resolve(&self, handle: PathHandle) -> Result<&PathIri> {
        self.by_handle
            .get(&handle)
            .map(|&slot| &self.paths[slot])
            .ok_or_else(|| Error::UnknownPath(format!("path handle {handle}")))
    }

    /// All paths, in graph enumeration order.
    pub fn all(&self) -> std::slice::Iter<'_, PathIri> {
        self.paths.iter()
    }

    pub fn by_uri(&self, uri: &str) -> Option<&PathIri> {
        self.by_uri.get(uri).map(|&slot| &self.paths[slot])
    }

    pub fn by_name(&self, name: &str) -> Option<&PathIri> {
        self.by_name.get(name).map(|&slot| &self.paths[slot])
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
