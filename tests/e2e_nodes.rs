//! End-to-end tests for node patterns.
//!
//! Each test exercises: plan -> execute -> node generator against the
//! 15-node fixture graph loaded from GFA.

mod common;

use common::{node, tiny_store};
use pretty_assertions::assert_eq;
use spodgi::{HandleGraph, Iri, Pattern, Term, Triple, rdf, vg};

fn collect<'g>(it: impl Iterator<Item = spodgi::Result<spodgi::Quad<'g>>>) -> Vec<Triple<'g>> {
    it.map(|q| {
        let (triple, context) = q.unwrap();
        assert!(context.is_none());
        triple
    })
    .collect()
}

// ============================================================================
// 1. Sequence value of a bound node
// ============================================================================

#[test]
fn test_value_of_node_2() {
    let store = tiny_store();
    let pattern = Pattern::any().with_subject(Term::iri(node(2))).with_predicate(rdf::VALUE);
    let triples = collect(store.triples(pattern));

    assert_eq!(triples.len(), 1);
    assert_eq!(triples[0].object, Term::literal("A"));
    assert_eq!(triples[0].subject.to_string(), format!("<{}>", node(2)));
}

#[test]
fn test_every_node_has_one_type_and_one_value() {
    let store = tiny_store();
    for id in 1..=15 {
        let subject = store.node_iri(id).unwrap();

        let typed = Pattern::any()
            .with_subject(subject.clone())
            .with_predicate(rdf::TYPE)
            .with_object(vg::NODE_CLASS);
        assert_eq!(store.triples(typed).count(), 1, "node {id}");

        let values = collect(store.triples(Pattern::any().with_subject(subject.clone()).with_predicate(rdf::VALUE)));
        assert_eq!(values.len(), 1);
        let expected = store.graph().get_sequence(store.graph().get_handle(id, false));
        assert_eq!(values[0].object, Term::literal(expected));
    }
}

// ============================================================================
// 2. Node scan
// ============================================================================

#[test]
fn test_type_scan_lists_all_nodes_in_id_order() {
    let store = tiny_store();
    let pattern = Pattern::any().with_predicate(rdf::TYPE).with_object(vg::NODE_CLASS);
    let subjects: Vec<String> = collect(store.triples(pattern))
        .into_iter()
        .map(|t| t.subject.to_string())
        .collect();
    let expected: Vec<String> = (1..=15).map(|id| format!("<{}>", node(id))).collect();
    assert_eq!(subjects, expected);
}

#[test]
fn test_value_scan_with_bound_object() {
    let store = tiny_store();
    let pattern = Pattern::any().with_predicate(rdf::VALUE).with_object(Term::literal("A"));
    let ids: Vec<String> = collect(store.triples(pattern))
        .into_iter()
        .map(|t| t.subject.to_string())
        .collect();
    assert_eq!(ids, vec![format!("<{}>", node(2)), format!("<{}>", node(7)), format!("<{}>", node(10)), format!("<{}>", node(13))]);
}

// ============================================================================
// 3. Edges
// ============================================================================

#[test]
fn test_edges_of_node_1() {
    let store = tiny_store();
    let pattern = Pattern::any().with_subject(Term::iri(node(1))).with_predicate(vg::LINKS_FORWARD_TO_FORWARD);
    let objects: Vec<String> = collect(store.triples(pattern))
        .into_iter()
        .map(|t| t.object.to_string())
        .collect();
    assert_eq!(objects, vec![format!("<{}>", node(2)), format!("<{}>", node(3))]);
}

#[test]
fn test_generic_links_accompany_directional_links() {
    let store = tiny_store();
    let links = store.triples(Pattern::any().with_predicate(vg::LINKS)).count();
    let directional = store.triples(Pattern::any().with_predicate(vg::LINKS_FORWARD_TO_FORWARD)).count();
    assert_eq!(links, 20);
    assert_eq!(directional, 20);
    assert_eq!(store.triples(Pattern::any().with_predicate(vg::LINKS_REVERSE_TO_REVERSE)).count(), 0);
}

#[test]
fn test_edge_with_bound_object() {
    let store = tiny_store();
    let pattern = Pattern::any()
        .with_predicate(vg::LINKS)
        .with_object(Term::iri(node(15)));
    let subjects: Vec<String> = collect(store.triples(pattern))
        .into_iter()
        .map(|t| t.subject.to_string())
        .collect();
    assert_eq!(subjects, vec![format!("<{}>", node(13)), format!("<{}>", node(14))]);
}

#[test]
fn test_full_node_description_order() {
    let store = tiny_store();
    let predicates: Vec<Iri> = collect(store.triples(Pattern::any().with_subject(Term::iri(node(12)))))
        .into_iter()
        .map(|t| t.predicate)
        .collect();
    assert_eq!(
        predicates,
        vec![
            rdf::TYPE,
            rdf::VALUE,
            vg::LINKS_FORWARD_TO_FORWARD,
            vg::LINKS,
            vg::LINKS_FORWARD_TO_FORWARD,
            vg::LINKS,
        ]
    );
}

// ============================================================================
// 4. Not found is empty, never an error
// ============================================================================

#[test]
fn test_unknown_node_is_empty() {
    let store = tiny_store();
    for iri in [
        node(0),
        node(16),
        format!("{}node/x", common::BASE),
        format!("{}node/", common::BASE),
        format!("{}node/02", common::BASE),
        format!("{}node/+2", common::BASE),
        format!("{}node/9223372036854775809", common::BASE),
    ] {
        assert_eq!(store.triples(Pattern::any().with_subject(Term::iri(iri))).count(), 0);
    }
    assert!(store.node_iri(99).is_none());
}

#[test]
fn test_reverse_edges_are_reported() {
    let mut graph = common::tiny_graph();
    graph
        .create_edge(spodgi::NodeHandle::new(4, true), spodgi::NodeHandle::forward(13))
        .unwrap();
    let store = spodgi::VgStore::open(graph, spodgi::StoreConfig::default()).unwrap();

    let pattern = Pattern::any().with_predicate(vg::LINKS_REVERSE_TO_FORWARD);
    let pairs: Vec<(String, String)> = collect(store.triples(pattern))
        .into_iter()
        .map(|t| (t.subject.to_string(), t.object.to_string()))
        .collect();
    // 4- -> 13+ is also 13- -> 4+
    assert_eq!(
        pairs,
        vec![
            (format!("<{}>", node(4)), format!("<{}>", node(13))),
            (format!("<{}>", node(13)), format!("<{}>", node(4))),
        ]
    );
}
