//! End-to-end tests for pattern dispatch: paths, full scans, identifier
//! subjects, and the patterns that must come back empty.

mod common;

use std::collections::HashSet;

use common::{BASE, node, step, tiny_graph, tiny_store};
use pretty_assertions::assert_eq;
use spodgi::{
    Error, HandleGraph, Iri, MemoryGraph, NodeHandle, NodeId, PathHandle, Pattern, StepHandle,
    StoreConfig, Term, VgStore, rdf, rdfs, vg,
};

fn strings<'g>(it: impl Iterator<Item = spodgi::Result<spodgi::Quad<'g>>>) -> Vec<String> {
    it.map(|q| q.unwrap().0.to_string()).collect()
}

// ============================================================================
// 1. Paths
// ============================================================================

#[test]
fn test_path_type_and_label() {
    let store = tiny_store();
    let typed = Pattern::any().with_predicate(rdf::TYPE).with_object(vg::PATH_CLASS);
    assert_eq!(strings(store.triples(typed)), vec![format!(
        "<{BASE}path/x> <{}> <{}> .",
        rdf::TYPE,
        vg::PATH_CLASS
    )]);

    let label = Pattern::any().with_predicate(rdfs::LABEL).with_object(Term::literal("x"));
    assert_eq!(store.triples(label).count(), 1);
    let wrong = Pattern::any().with_predicate(rdfs::LABEL).with_object(Term::literal("y"));
    assert_eq!(store.triples(wrong).count(), 0);
}

#[test]
fn test_bound_path_subject() {
    let store = tiny_store();
    let path = Term::iri(format!("{BASE}path/x"));
    let predicates: Vec<Iri> = store
        .triples(Pattern::any().with_subject(path))
        .map(|q| q.unwrap().0.predicate)
        .collect();
    assert_eq!(predicates, vec![rdf::TYPE, rdfs::LABEL]);
}

// ============================================================================
// 2. Full scans
// ============================================================================

#[test]
fn test_full_scan_is_union_of_generators() {
    let store = tiny_store();
    let all: Vec<String> = strings(store.triples(Pattern::any()));

    let mut expected = Vec::new();
    for id in 1..=15 {
        expected.extend(strings(store.triples(Pattern::any().with_subject(Term::iri(node(id))))));
    }
    for rank in 1..=10 {
        let s = store.step_iri("x", rank).unwrap();
        expected.extend(strings(store.triples(Pattern::any().with_subject(s.clone()))));
        expected.extend(strings(store.triples(Pattern::any().with_subject(s.begin()))));
        if rank == 10 {
            expected.extend(strings(store.triples(Pattern::any().with_subject(s.end()))));
        }
    }
    expected.extend(strings(store.triples(Pattern::any().with_subject(Term::iri(format!("{BASE}path/x"))))));

    assert_eq!(all, expected);
}

#[test]
fn test_full_scan_has_no_duplicates() {
    let store = tiny_store();
    let all = strings(store.triples(Pattern::any()));
    let distinct: HashSet<&String> = all.iter().collect();
    assert_eq!(distinct.len(), all.len());
    assert_eq!(all.len(), 196);
}

#[test]
fn test_type_scan_covers_every_kind() {
    let store = tiny_store();
    let types: HashSet<String> = store
        .triples(Pattern::any().with_predicate(rdf::TYPE))
        .map(|q| q.unwrap().0.object.to_string())
        .collect();
    assert_eq!(types.len(), 6);
    assert_eq!(store.triples(Pattern::any().with_predicate(rdf::TYPE)).count(), 15 + 10 * 2 + 11 * 2 + 1);
}

#[test]
fn test_repeated_queries_are_identical() {
    let store = tiny_store();
    let first = strings(store.triples(Pattern::any()));
    let second = strings(store.triples(Pattern::any()));
    assert_eq!(first, second);
}

#[test]
fn test_dropping_mid_scan() {
    let store = tiny_store();
    let head: Vec<_> = store.triples(Pattern::any()).take(3).collect();
    assert_eq!(head.len(), 3);
    assert_eq!(store.triples(Pattern::any()).nth(2).unwrap().unwrap().0, head[2].as_ref().unwrap().0);
}

// ============================================================================
// 3. Identifier subjects bypass IRI parsing
// ============================================================================

#[test]
fn test_identifier_subjects_round_trip() {
    let store = tiny_store();
    let objects: Vec<Term<'_>> = store
        .triples(Pattern::any().with_subject(Term::iri(step(3))).with_predicate(vg::NODE))
        .map(|q| q.unwrap().0.object)
        .collect();
    let node_term = objects.into_iter().next().unwrap();
    assert!(matches!(node_term, Term::Node(_)));

    // feed the returned identifier back in
    let values = strings(store.triples(Pattern::any().with_subject(node_term).with_predicate(rdf::VALUE)));
    assert_eq!(values, vec![format!("<{}> <{}> \"C\" .", node(5), rdf::VALUE)]);
}

#[test]
fn test_resolve_plain_iris() {
    let store = tiny_store();
    assert!(matches!(store.resolve(&node(3)), Some(Term::Node(_))));
    assert!(matches!(store.resolve(&step(10)), Some(Term::Step(_))));
    assert!(matches!(store.resolve(&format!("{BASE}path/x/position/51")), Some(Term::StepEnd(_))));
    assert!(store.resolve("http://elsewhere.org/node/3").is_none());
}

// ============================================================================
// 4. Empty results
// ============================================================================

#[test]
fn test_unsupported_patterns_are_empty() {
    let store = tiny_store();
    let unknown = Iri::new("http://example.org/unknown");
    let cases = vec![
        Pattern::any().with_predicate(unknown.clone()),
        Pattern::any().with_predicate(rdf::TYPE).with_object(Term::iri("http://example.org/Thing")),
        Pattern::any().with_object(Term::literal("A")),
        Pattern::any().with_subject(Term::BlankNode("b0".into())),
        Pattern::any().with_predicate(rdf::VALUE).with_object(Term::BlankNode("b0".into())),
        Pattern::any().with_subject(Term::literal("A")),
        Pattern::any().with_subject(Term::iri(node(1))).with_predicate(unknown),
        Pattern::any().with_subject(Term::iri("http://elsewhere.org/a")),
    ];
    for pattern in cases {
        assert_eq!(store.triples(pattern.clone()).count(), 0, "{pattern:?}");
    }
}

#[test]
fn test_custom_base() {
    let store = VgStore::open(tiny_graph(), StoreConfig::with_base("http://example.com/g")).unwrap();
    assert_eq!(store.base(), "http://example.com/g/");
    let pattern = Pattern::any()
        .with_subject(Term::iri("http://example.com/g/node/2"))
        .with_predicate(rdf::VALUE);
    assert_eq!(store.triples(pattern).count(), 1);
    let old_base = Pattern::any().with_subject(Term::iri(node(2)));
    assert_eq!(store.triples(old_base).count(), 0);
}

// ============================================================================
// 5. Broken graphs surface as errors
// ============================================================================

/// Reports every step as belonging to a path that was never enumerated.
struct OrphanSteps(MemoryGraph);

impl HandleGraph for OrphanSteps {
    fn has_node(&self, id: NodeId) -> bool { self.0.has_node(id) }
    fn get_handle(&self, id: NodeId, is_reverse: bool) -> NodeHandle { self.0.get_handle(id, is_reverse) }
    fn get_sequence(&self, handle: NodeHandle) -> String { self.0.get_sequence(handle) }
    fn get_length(&self, handle: NodeHandle) -> usize { self.0.get_length(handle) }
    fn min_node_id(&self) -> NodeId { self.0.min_node_id() }
    fn max_node_id(&self) -> NodeId { self.0.max_node_id() }
    fn node_count(&self) -> usize { self.0.node_count() }
    fn follow_edges(&self, handle: NodeHandle, go_left: bool, visit: &mut dyn FnMut(NodeHandle) -> bool) -> bool {
        self.0.follow_edges(handle, go_left, visit)
    }
    fn for_each_path_handle(&self, visit: &mut dyn FnMut(PathHandle) -> bool) -> bool {
        self.0.for_each_path_handle(visit)
    }
    fn get_path_name(&self, path: PathHandle) -> String { self.0.get_path_name(path) }
    fn get_path_handle(&self, name: &str) -> Option<PathHandle> { self.0.get_path_handle(name) }
    fn path_count(&self) -> usize { self.0.path_count() }
    fn is_empty(&self, path: PathHandle) -> bool { self.0.is_empty(path) }
    fn path_begin(&self, path: PathHandle) -> StepHandle { self.0.path_begin(path) }
    fn has_next_step(&self, step: StepHandle) -> bool { self.0.has_next_step(step) }
    fn get_next_step(&self, step: StepHandle) -> StepHandle { self.0.get_next_step(step) }
    fn get_handle_of_step(&self, step: StepHandle) -> NodeHandle { self.0.get_handle_of_step(step) }
    fn get_path_handle_of_step(&self, _step: StepHandle) -> PathHandle { PathHandle(999) }
}

#[test]
fn test_orphan_step_is_an_invariant_error() {
    let store = VgStore::open(OrphanSteps(tiny_graph()), StoreConfig::default()).unwrap();
    let items: Vec<_> = store.triples(Pattern::any().with_predicate(vg::PATH)).collect();
    assert_eq!(items.len(), 1);
    assert!(matches!(items[0], Err(Error::Invariant(_))));

    // Facts that do not need the owning path are unaffected.
    assert_eq!(store.triples(Pattern::any().with_predicate(vg::RANK)).count(), 10);
}
