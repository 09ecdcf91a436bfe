//! Edge classifier.
//!
//! An edge between two oriented handles is reported under the directional
//! predicate for its pair of orientations, and again under the plain
//! `vg:links`.

use smallvec::SmallVec;

use crate::model::{Iri, NodeHandle, Pattern, Quad, Term, vg};
use crate::planner::is_link;
use crate::Result;
use super::{GraphView, fact};

/// Directional link predicate for an edge leaving `from` and entering `to`.
pub fn link_predicate(from_reverse: bool, to_reverse: bool) -> Iri {
    match (from_reverse, to_reverse) {
        (false, false) => vg::LINKS_FORWARD_TO_FORWARD,
        (false, true) => vg::LINKS_FORWARD_TO_REVERSE,
        (true, false) => vg::LINKS_REVERSE_TO_FORWARD,
        (true, true) => vg::LINKS_REVERSE_TO_REVERSE,
    }
}

/// The predicates an edge is reported under, filtered by the pattern's
/// predicate.
pub fn classify(from: NodeHandle, to: NodeHandle, pattern: &Pattern<'_>) -> SmallVec<[Iri; 2]> {
    [link_predicate(from.is_reverse(), to.is_reverse()), vg::LINKS]
        .into_iter()
        .filter(|p| pattern.allows_predicate(p))
        .collect()
}

/// Edge facts with `node` as subject.
///
/// Edges are read from the right side of the forward handle, then from the
/// right side of the reverse handle. The second pass keeps only edges that
/// land on a forward handle; the others are the mirror of an edge already
/// seen from the first pass.
pub fn edge_facts<'g>(view: GraphView<'g>, node: NodeHandle, pattern: &Pattern<'g>) -> Vec<Result<Quad<'g>>> {
    if pattern.predicate.as_ref().is_some_and(|p| !is_link(p)) {
        return Vec::new();
    }
    let graph = view.graph;
    let forward = graph.get_handle(graph.get_id(node), false);
    let reverse = graph.flip(forward);

    let mut edges: Vec<(NodeHandle, NodeHandle)> = Vec::new();
    graph.follow_edges(forward, false, &mut |to| {
        edges.push((forward, to));
        true
    });
    graph.follow_edges(reverse, false, &mut |to| {
        if !graph.get_is_reverse(to) {
            edges.push((reverse, to));
        }
        true
    });

    let subject = Term::Node(view.node_iri(forward));
    let mut out = Vec::new();
    for (from, to) in edges {
        let object = Term::Node(view.node_iri(to));
        if !pattern.allows_object(&object) {
            continue;
        }
        for predicate in classify(from, to, pattern) {
            out.push(fact(subject.clone(), predicate, object.clone()));
        }
    }
    out
}
