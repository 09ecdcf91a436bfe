//! Path generator. Enumerates the path index, never the graph, so a path
//! keeps the same identifier for as long as the store is open.

use crate::model::{PathIri, Pattern, Quad, Term, rdf, rdfs, vg};
use crate::Result;
use super::{GraphView, Triples, empty, fact};

pub(super) fn triples<'g>(view: GraphView<'g>, pattern: Pattern<'g>) -> Triples<'g> {
    let bound = match &pattern.subject {
        None => None,
        Some(Term::Path(path)) => match view.index.by_uri(path.uri()) {
            Some(indexed) => Some(indexed),
            None => return empty(),
        },
        Some(_) => return empty(),
    };
    match bound {
        Some(path) => Box::new(path_facts(path, &pattern).into_iter()),
        None => Box::new(view.index.all().flat_map(move |path| path_facts(path, &pattern))),
    }
}

fn path_facts<'g>(path: &PathIri, pattern: &Pattern<'g>) -> Vec<Result<Quad<'g>>> {
    let mut out = Vec::with_capacity(2);
    if pattern.allows_predicate(&rdf::TYPE) && pattern.allows_object_iri(&vg::PATH_CLASS) {
        out.push(fact(path.clone(), rdf::TYPE, vg::PATH_CLASS));
    }
    let label = Term::literal(path.name());
    if pattern.allows(&rdfs::LABEL, &label) {
        out.push(fact(path.clone(), rdfs::LABEL, label));
    }
    out
}
