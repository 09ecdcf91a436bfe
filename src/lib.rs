//! # spodgi: triple-pattern view over a sequence variation graph
//!
//! Answers `(subject?, predicate?, object?)` patterns over a read-only handle
//! graph as if the graph were an RDF store, without ever materializing the
//! triples.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `HandleGraph` is the contract between the query layer and the graph
//! 2. **Identifiers carry handles**: a term handed back to the store is routed without parsing
//! 3. **Graph-agnostic planner**: classifying a pattern never touches the graph
//! 4. **Lazy execution**: nothing is walked until the caller pulls
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spodgi::{MemoryGraph, Pattern, StoreConfig, Term, VgStore, rdf};
//!
//! # fn example() -> spodgi::Result<()> {
//! let graph = MemoryGraph::load("test.gfa")?;
//! let store = VgStore::open(graph, StoreConfig::default())?;
//!
//! let node = Term::iri("http://example.org/vg/node/2");
//! for quad in store.triples(Pattern::any().with_subject(node).with_predicate(rdf::VALUE)) {
//!     let (triple, _context) = quad?;
//!     println!("{triple}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## IRI forms
//!
//! | Entity | IRI |
//! |--------|-----|
//! | Node | `{base}node/{id}` |
//! | Path | `{base}path/{name}`, or the name itself if it is an absolute URI |
//! | Step | `{path}/step/{rank}`, or `{path}#step-{rank}` |
//! | Position | `{path}/position/{n}`, or `{path}#p{n}` |

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod planner;
pub mod execution;
pub mod storage;
pub mod index;
pub mod namespace;
pub mod export;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Iri, Literal, Term, Triple, Quad, Pattern,
    MAX_NODE_ID, NodeHandle, NodeId, PathHandle, StepHandle,
    NodeIri, PathIri, StepIri, StepBeginIri, StepEndIri,
    faldo, rdf, rdfs, vg, xsd,
};

// ============================================================================
// Re-exports: Storage, Execution
// ============================================================================

pub use storage::{HandleGraph, MemoryGraph};
pub use index::PathIndex;
pub use execution::{StepWalk, Triples};
pub use namespace::NamespaceManager;
pub use export::{export_ntriples, export_turtle};

// ============================================================================
// Configuration
// ============================================================================

pub const DEFAULT_BASE: &str = "http://example.org/vg/";

/// Store configuration, fixed at open time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base IRI under which nodes and synthetic paths are named.
    pub base: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { base: DEFAULT_BASE.to_owned() }
    }
}

impl StoreConfig {
    pub fn with_base(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// The base with a trailing `/` unless it already ends in `/` or `#`.
    pub fn normalized_base(&self) -> Result<String> {
        if self.base.is_empty() {
            return Err(Error::Config("base IRI must not be empty".into()));
        }
        if self.base.ends_with(['/', '#']) {
            Ok(self.base.clone())
        } else {
            Ok(format!("{}/", self.base))
        }
    }
}

// ============================================================================
// Top-level store handle
// ============================================================================

/// The primary entry point. A `VgStore` owns a graph and answers triple
/// patterns over it.
///
/// The path index is built once in [`VgStore::open`]; the graph is not
/// expected to change afterwards.
pub struct VgStore<G: HandleGraph> {
    graph: G,
    index: PathIndex,
    base: Arc<str>,
    config: StoreConfig,
    namespaces: NamespaceManager,
}

impl<G: HandleGraph> VgStore<G> {
    pub fn open(graph: G, config: StoreConfig) -> Result<Self> {
        let base: Arc<str> = Arc::from(config.normalized_base()?);
        let index = PathIndex::build(&graph, &base);
        let namespaces = NamespaceManager::new();
        for (prefix, namespace) in namespace::default_bindings(&base) {
            namespaces.bind(prefix, namespace);
        }
        debug!(
            base = %base,
            nodes = graph.node_count(),
            paths = index.len(),
            "opened store"
        );
        Ok(Self { graph, index, base, config, namespaces })
    }

    /// Every fact matching `pattern`, lazily.
    ///
    /// Unknown subjects and unsupported patterns give an empty iterator. An
    /// `Err` item means the graph broke an invariant; it is the last item.
    pub fn triples<'g>(&'g self, pattern: impl Into<Pattern<'g>>) -> Triples<'g> {
        let pattern = pattern.into();
        let plan = planner::plan(&pattern);
        execution::execute(self.view(), plan, pattern)
    }

    fn view(&self) -> execution::GraphView<'_> {
        execution::GraphView { graph: &self.graph, index: &self.index, base: &self.base }
    }

    /// Identifier of node `id`, if the graph has it.
    pub fn node_iri(&self, id: NodeId) -> Option<NodeIri> {
        self.graph
            .has_node(id)
            .then(|| NodeIri::new(self.graph.get_handle(id, false), Arc::clone(&self.base)))
    }

    pub fn path_iri(&self, name: &str) -> Option<&PathIri> {
        self.index.by_name(name)
    }

    /// Identifier of the step of path `name` with the given 1-based rank.
    /// Walks the path.
    pub fn step_iri(&self, name: &str, rank: u64) -> Option<StepIri<'_>> {
        let path = self.index.by_name(name)?;
        execution::step::locate_step(self.view(), path, rank)
    }

    /// Turn a plain IRI into the identifier it names in this graph.
    pub fn resolve(&self, iri: &str) -> Option<Term<'_>> {
        execution::resolve_iri(self.view(), iri)
    }

    // ------------------------------------------------------------------
    // Namespaces
    // ------------------------------------------------------------------

    pub fn bind(&self, prefix: impl Into<String>, namespace: impl Into<Iri>) {
        self.namespaces.bind(prefix, namespace)
    }

    pub fn namespace(&self, prefix: &str) -> Option<Iri> {
        self.namespaces.namespace(prefix)
    }

    pub fn prefix(&self, namespace: &str) -> Option<String> {
        self.namespaces.prefix(namespace)
    }

    pub fn namespaces(&self) -> Vec<(String, Iri)> {
        self.namespaces.namespaces()
    }

    pub fn namespace_manager(&self) -> &NamespaceManager {
        &self.namespaces
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn path_index(&self) -> &PathIndex {
        &self.index
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown path: {0}")]
    UnknownPath(String),

    #[error("Graph invariant violated: {0}")]
    Invariant(String),

    #[error("GFA parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("RDF serialization error: {0}")]
    Rdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
