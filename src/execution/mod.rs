//! Pattern execution.
//!
//! Runs a [`Plan`] against a graph. Every generator is a lazy iterator that
//! borrows the graph and the path index; dropping it mid-way is the only
//! cancellation there is.

pub mod edge;
pub mod node;
pub mod path;
pub mod step;

use std::sync::Arc;

use tracing::trace;

use crate::index::PathIndex;
use crate::model::{Iri, NodeHandle, NodeId, NodeIri, Pattern, Quad, Term, Triple};
use crate::planner::Plan;
use crate::storage::HandleGraph;
use crate::Result;

pub use step::StepWalk;

/// Lazy sequence of matching facts. An `Err` item means the graph broke an
/// invariant; no items follow it.
pub type Triples<'g> = Box<dyn Iterator<Item = Result<Quad<'g>>> + 'g>;

/// What a generator needs to read: the graph, its path index and the base.
#[derive(Clone, Copy)]
pub struct GraphView<'g> {
    pub graph: &'g dyn HandleGraph,
    pub index: &'g PathIndex,
    pub base: &'g Arc<str>,
}

impl<'g> GraphView<'g> {
    pub fn node_iri(&self, handle: NodeHandle) -> NodeIri {
        NodeIri::new(handle, Arc::clone(self.base))
    }
}

pub(crate) fn fact<'g>(subject: impl Into<Term<'g>>, predicate: Iri, object: impl Into<Term<'g>>) -> Result<Quad<'g>> {
    Ok((Triple::new(subject, predicate, object), None))
}

pub(crate) fn empty<'g>() -> Triples<'g> {
    Box::new(std::iter::empty())
}

/// Execute a plan. Nothing touches the graph until the first item is pulled.
pub fn execute<'g>(view: GraphView<'g>, plan: Plan, pattern: Pattern<'g>) -> Triples<'g> {
    if plan == Plan::Empty {
        return empty();
    }
    let mut stopped = false;
    let inner = std::iter::once_with(move || run(view, plan, pattern)).flatten();
    // Stop after the first error.
    Box::new(inner.take_while(move |item| {
        let keep = !stopped;
        stopped |= item.is_err();
        keep
    }))
}

fn run<'g>(view: GraphView<'g>, plan: Plan, mut pattern: Pattern<'g>) -> Triples<'g> {
    let resolved = match &pattern.subject {
        Some(Term::Iri(iri)) => Some(resolve_iri(view, iri.as_str())),
        _ => None,
    };
    if let Some(resolved) = resolved {
        match resolved {
            Some(term) => pattern.subject = Some(term),
            None => {
                trace!(subject = ?pattern.subject, "subject is not in the graph");
                return empty();
            }
        }
    }

    match plan {
        Plan::Nodes => node::triples(view, pattern),
        Plan::Paths => path::triples(view, pattern),
        Plan::Steps => step::triples(view, pattern),
        Plan::All => Box::new(
            node::triples(view, pattern.clone())
                .chain(step::triples(view, pattern.clone()))
                .chain(path::triples(view, pattern)),
        ),
        Plan::BySubject => match &pattern.subject {
            Some(Term::Node(_)) => node::triples(view, pattern),
            Some(Term::Path(_)) => path::triples(view, pattern),
            Some(Term::Step(_) | Term::StepBegin(_) | Term::StepEnd(_)) => step::triples(view, pattern),
            _ => empty(),
        },
        Plan::Empty => empty(),
    }
}

// ============================================================================
// IRI resolution
// ============================================================================

/// Turn a plain IRI into the identifier it names, or `None` if it names
/// nothing in this graph.
///
/// Recognized forms, with `{path}` the IRI of an indexed path:
/// - `{base}node/{id}`
/// - `{path}` itself
/// - `{path}/step/{rank}` and `{path}/position/{n}` for synthetic paths
/// - `{path}#step-{rank}` and `{path}#p{n}` for paths named by an absolute URI
pub fn resolve_iri<'g>(view: GraphView<'g>, iri: &str) -> Option<Term<'g>> {
    if let Some(path) = view.index.by_uri(iri) {
        return Some(Term::Path(path.clone()));
    }

    if let Some(rest) = iri.strip_prefix(&**view.base) {
        if let Some(id) = rest.strip_prefix("node/") {
            return resolve_node(view, id).map(Term::Node);
        }
        if rest.starts_with("path/") {
            let synthetic = |uri: &str| view.index.by_uri(uri).filter(|p| !p.is_absolute());
            if let Some((uri, rank)) = iri.rsplit_once("/step/") {
                if let Some(path) = synthetic(uri) {
                    return step::locate_step(view, path, canonical_u64(rank)?).map(Term::Step);
                }
            }
            if let Some((uri, position)) = iri.rsplit_once("/position/") {
                if let Some(path) = synthetic(uri) {
                    return step::locate_position(view, path, canonical_u64(position)?);
                }
            }
        }
    }

    let (uri, fragment) = iri.rsplit_once('#')?;
    let path = view.index.by_uri(uri).filter(|p| p.is_absolute())?;
    if let Some(rank) = fragment.strip_prefix("step-") {
        return step::locate_step(view, path, canonical_u64(rank)?).map(Term::Step);
    }
    let position = canonical_u64(fragment.strip_prefix('p')?)?;
    step::locate_position(view, path, position)
}

/// A node IRI's trailing id, checked against the graph before a handle is
/// taken.
fn resolve_node(view: GraphView<'_>, id: &str) -> Option<NodeIri> {
    let id: NodeId = canonical_u64(id)?;
    view.graph
        .has_node(id)
        .then(|| view.node_iri(view.graph.get_handle(id, false)))
}

/// A number written the way identifiers render it: plain decimal digits,
/// no sign, no leading zero.
fn canonical_u64(digits: &str) -> Option<u64> {
    let canonical = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'));
    if !canonical {
        return None;
    }
    digits.parse().ok()
}
