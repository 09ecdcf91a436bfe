//! Node generator.

use std::rc::Rc;

use crate::model::{NodeHandle, Pattern, Term, rdf, vg};
use super::{GraphView, Triples, edge, empty, fact};

pub(super) fn triples<'g>(view: GraphView<'g>, pattern: Pattern<'g>) -> Triples<'g> {
    let graph = view.graph;
    let bound = match &pattern.subject {
        None => None,
        // An identifier minted under another base, or for a missing id,
        // names nothing here.
        Some(Term::Node(node)) if node.base() == &**view.base && graph.has_node(node.id()) => Some(node.id()),
        Some(_) => return empty(),
    };
    let pattern = Rc::new(pattern);
    match bound {
        Some(id) => node_facts(view, graph.get_handle(id, false), pattern),
        None => {
            let ids = graph.min_node_id()..=graph.max_node_id();
            Box::new(
                ids.filter(move |&id| graph.has_node(id))
                    .flat_map(move |id| node_facts(view, graph.get_handle(id, false), Rc::clone(&pattern))),
            )
        }
    }
}

/// Type, sequence and edge facts of one node, in that order. The edge walk
/// only happens once the first two have been consumed.
fn node_facts<'g>(view: GraphView<'g>, handle: NodeHandle, pattern: Rc<Pattern<'g>>) -> Triples<'g> {
    let subject = Term::Node(view.node_iri(handle));
    let mut head = Vec::with_capacity(2);

    if pattern.allows_predicate(&rdf::TYPE) && pattern.allows_object_iri(&vg::NODE_CLASS) {
        head.push(fact(subject.clone(), rdf::TYPE, vg::NODE_CLASS));
    }
    // A bound non-literal object can never be a sequence.
    if pattern.allows_predicate(&rdf::VALUE) && pattern.object.as_ref().is_none_or(Term::is_literal) {
        let value = Term::literal(view.graph.get_sequence(handle));
        if pattern.allows_object(&value) {
            head.push(fact(subject, rdf::VALUE, value));
        }
    }

    let edges = std::iter::once_with(move || edge::edge_facts(view, handle, &pattern)).flatten();
    Box::new(head.into_iter().chain(edges))
}
