//! Step generator.
//!
//! Steps have no random access: every step is reached by walking its path
//! from the first step, carrying rank and position along.

use std::rc::Rc;

use smallvec::SmallVec;

use crate::model::{PathIri, Pattern, Quad, StepHandle, StepIri, Term, faldo, rdf, vg};
use crate::{Error, Result};
use super::{GraphView, Triples, empty, fact};

// ============================================================================
// StepWalk
// ============================================================================

/// Walks a path from its first step, yielding one identifier per step.
///
/// Rank starts at 1 and grows by one per step; position starts at 1 and
/// grows by the length of the node just left.
pub struct StepWalk<'g> {
    view: GraphView<'g>,
    path: PathIri,
    next: Option<StepHandle>,
    rank: u64,
    position: u64,
}

impl<'g> StepWalk<'g> {
    pub fn new(view: GraphView<'g>, path: PathIri) -> Self {
        let graph = view.graph;
        let next = (!graph.is_empty(path.handle())).then(|| graph.path_begin(path.handle()));
        Self { view, path, next, rank: 1, position: 1 }
    }
}

impl<'g> Iterator for StepWalk<'g> {
    type Item = StepIri<'g>;

    fn next(&mut self) -> Option<StepIri<'g>> {
        let graph = self.view.graph;
        let step = self.next.take()?;
        let iri = StepIri::new(
            graph,
            step,
            self.path.clone(),
            self.view.base.clone(),
            self.rank,
            self.position,
        );
        self.rank += 1;
        self.position += graph.get_length(graph.get_handle_of_step(step)) as u64;
        if graph.has_next_step(step) {
            self.next = Some(graph.get_next_step(step));
        }
        Some(iri)
    }
}

/// The step of `path` with the given 1-based rank.
pub fn locate_step<'g>(view: GraphView<'g>, path: &PathIri, rank: u64) -> Option<StepIri<'g>> {
    let skip = usize::try_from(rank.checked_sub(1)?).ok()?;
    StepWalk::new(view, path.clone()).nth(skip)
}

/// The FALDO position of `path` at `position`, if a step begins or the last
/// step ends there.
pub fn locate_position<'g>(view: GraphView<'g>, path: &PathIri, position: u64) -> Option<Term<'g>> {
    let mut last = None;
    for step in StepWalk::new(view, path.clone()) {
        if step.position() == position {
            return Some(Term::StepBegin(step.begin()));
        }
        if step.position() > position {
            return None;
        }
        last = Some(step);
    }
    last.map(|step| step.end())
        .filter(|end| end.position() == position)
        .map(Term::StepEnd)
}

// ============================================================================
// Generator
// ============================================================================

pub(super) fn triples<'g>(view: GraphView<'g>, pattern: Pattern<'g>) -> Triples<'g> {
    match pattern.subject.clone() {
        None => {
            let pattern = Rc::new(pattern);
            Box::new(view.index.all().flat_map(move |path| {
                let pattern = Rc::clone(&pattern);
                StepWalk::new(view, path.clone())
                    .flat_map(move |step| step_facts(view, step, &pattern, true))
            }))
        }
        Some(Term::Step(step)) => Box::new(step_facts(view, step, &pattern, false).into_iter()),
        Some(subject @ (Term::StepBegin(_) | Term::StepEnd(_))) => {
            let mut out = Vec::new();
            if let Some((path, position)) = subject.as_position() {
                let path = path.clone();
                position_facts(&mut out, subject, position, &path, &pattern);
            }
            Box::new(out.into_iter())
        }
        Some(_) => empty(),
    }
}

type Facts<'g> = SmallVec<[Result<Quad<'g>>; 8]>;

/// Facts about one step, in a fixed order: types, node, rank, position,
/// path, begin, end. With `expand`, the begin position's own facts follow,
/// and the end position's too on the last step of a path. An inner end is
/// the next step's begin.
fn step_facts<'g>(view: GraphView<'g>, step: StepIri<'g>, pattern: &Pattern<'g>, expand: bool) -> Facts<'g> {
    let mut out = Facts::new();
    let subject = Term::Step(step.clone());

    for class in [vg::STEP_CLASS, faldo::REGION] {
        if pattern.allows_predicate(&rdf::TYPE) && pattern.allows_object_iri(&class) {
            out.push(fact(subject.clone(), rdf::TYPE, class));
        }
    }

    if pattern.allows_predicate(&vg::NODE) || pattern.allows_predicate(&vg::REVERSE_OF_NODE) {
        let handle = step.node_handle();
        let predicate = if view.graph.get_is_reverse(handle) { vg::REVERSE_OF_NODE } else { vg::NODE };
        let node = Term::Node(view.node_iri(handle));
        if pattern.allows(&predicate, &node) {
            out.push(fact(subject.clone(), predicate, node));
        }
    }

    let literals = [(vg::RANK, step.rank()), (vg::POSITION, step.position())];
    for (predicate, value) in literals {
        if pattern.allows_predicate(&predicate) {
            let value = Term::literal(value);
            if pattern.allows_object(&value) {
                out.push(fact(subject.clone(), predicate, value));
            }
        }
    }

    let wants_owner = pattern.allows_predicate(&vg::PATH) || (expand && pattern.allows_predicate(&faldo::REFERENCE));
    let owner = if wants_owner {
        match owning_path(view, &step) {
            Ok(path) => Some(path),
            Err(e) => {
                out.push(Err(e));
                return out;
            }
        }
    } else {
        None
    };

    if let Some(owner) = &owner {
        let path = Term::Path(owner.clone());
        if pattern.allows(&vg::PATH, &path) {
            out.push(fact(subject.clone(), vg::PATH, path));
        }
    }

    let begin = Term::StepBegin(step.begin());
    let end = Term::StepEnd(step.end());
    for (predicate, position) in [(faldo::BEGIN, &begin), (faldo::END, &end)] {
        if pattern.allows(&predicate, position) {
            out.push(fact(subject.clone(), predicate, position.clone()));
        }
    }

    if expand {
        let reference = owner.as_ref().unwrap_or(step.path());
        position_facts(&mut out, begin, step.position(), reference, pattern);
        if !view.graph.has_next_step(step.handle()) {
            let end_position = step.end().position();
            position_facts(&mut out, end, end_position, reference, pattern);
        }
    }
    out
}

/// FALDO facts of one position: its offset, its two types and the path it
/// is a position on.
fn position_facts<'g>(
    out: &mut impl Extend<Result<Quad<'g>>>,
    subject: Term<'g>,
    position: u64,
    reference: &PathIri,
    pattern: &Pattern<'g>,
) {
    if pattern.allows_predicate(&faldo::POSITION) {
        let value = Term::literal(position);
        if pattern.allows_object(&value) {
            out.extend([fact(subject.clone(), faldo::POSITION, value)]);
        }
    }
    for class in [faldo::EXACT_POSITION, faldo::POSITION_CLASS] {
        if pattern.allows_predicate(&rdf::TYPE) && pattern.allows_object_iri(&class) {
            out.extend([fact(subject.clone(), rdf::TYPE, class)]);
        }
    }
    let path = Term::Path(reference.clone());
    if pattern.allows(&faldo::REFERENCE, &path) {
        out.extend([fact(subject, faldo::REFERENCE, path)]);
    }
}

/// The indexed path a step belongs to, read back from the graph.
fn owning_path(view: GraphView<'_>, step: &StepIri<'_>) -> Result<PathIri> {
    let handle = view.graph.get_path_handle_of_step(step.handle());
    view.index
        .resolve(handle)
        .cloned()
        .map_err(|e| Error::Invariant(format!("step {step} has no indexed owning path: {e}")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::index::PathIndex;
    use crate::model::NodeHandle;
    use crate::storage::{HandleGraph, MemoryGraph};

    fn graph() -> MemoryGraph {
        let mut g = MemoryGraph::new();
        let a = g.create_handle("CAAATAAG", 1).unwrap();
        let b = g.create_handle("A", 2).unwrap();
        let c = g.create_handle("GT", 3).unwrap();
        let x = g.create_path("x").unwrap();
        g.append_step(x, a).unwrap();
        g.append_step(x, b.flip()).unwrap();
        g.append_step(x, c).unwrap();
        g.create_path("empty").unwrap();
        g
    }

    #[test]
    fn test_walk_accumulates_rank_and_position() {
        let g = graph();
        let base: Arc<str> = Arc::from("http://example.org/vg/");
        let index = PathIndex::build(&g, &base);
        let view = GraphView { graph: &g, index: &index, base: &base };

        let x = index.by_name("x").unwrap().clone();
        let walked: Vec<(u64, u64)> = StepWalk::new(view, x).map(|s| (s.rank(), s.position())).collect();
        assert_eq!(walked, vec![(1, 1), (2, 9), (3, 10)]);

        let empty = index.by_name("empty").unwrap().clone();
        assert_eq!(StepWalk::new(view, empty).count(), 0);
    }

    #[test]
    fn test_step_facts_in_order() {
        let g = graph();
        let base: Arc<str> = Arc::from("http://example.org/vg/");
        let index = PathIndex::build(&g, &base);
        let view = GraphView { graph: &g, index: &index, base: &base };

        let x = index.by_name("x").unwrap();
        let second = locate_step(view, x, 2).unwrap();
        assert_eq!(g.get_handle_of_step(second.handle()), NodeHandle::new(2, true));

        let predicates: Vec<_> = triples(view, Pattern::any().with_subject(second))
            .map(|q| q.unwrap().0.predicate)
            .collect();
        assert_eq!(
            predicates,
            vec![
                rdf::TYPE,
                rdf::TYPE,
                vg::REVERSE_OF_NODE,
                vg::RANK,
                vg::POSITION,
                vg::PATH,
                faldo::BEGIN,
                faldo::END,
            ]
        );
    }

    #[test]
    fn test_position_block_of_an_end() {
        let g = graph();
        let base: Arc<str> = Arc::from("http://example.org/vg/");
        let index = PathIndex::build(&g, &base);
        let view = GraphView { graph: &g, index: &index, base: &base };

        let x = index.by_name("x").unwrap();
        let end = locate_position(view, x, 12).unwrap();
        assert!(matches!(end, Term::StepEnd(_)));
        let facts: Vec<_> = triples(view, Pattern::any().with_subject(end))
            .map(|q| q.unwrap().0)
            .collect();
        assert_eq!(facts.len(), 4);
        assert_eq!(facts[0].object, Term::literal(12u64));
        assert_eq!(facts[3].object, Term::Path(x.clone()));
    }

    #[test]
    fn test_unbound_walk_covers_every_step() {
        let g = graph();
        let base: Arc<str> = Arc::from("http://example.org/vg/");
        let index = PathIndex::build(&g, &base);
        let view = GraphView { graph: &g, index: &index, base: &base };

        let pattern = Pattern::any().with_predicate(rdf::TYPE).with_object(vg::STEP_CLASS);
        assert_eq!(triples(view, pattern).count(), 3);

        // three begins and the end of the last step
        let positions: Vec<_> = triples(view, Pattern::any().with_predicate(faldo::POSITION))
            .map(|q| q.unwrap().0.object)
            .collect();
        assert_eq!(
            positions,
            vec![Term::literal(1u64), Term::literal(9u64), Term::literal(10u64), Term::literal(12u64)]
        );
    }

    #[test]
    fn test_rank_zero_and_past_the_end() {
        let g = graph();
        let base: Arc<str> = Arc::from("http://example.org/vg/");
        let index = PathIndex::build(&g, &base);
        let view = GraphView { graph: &g, index: &index, base: &base };

        let x = index.by_name("x").unwrap();
        assert!(locate_step(view, x, 0).is_none());
        assert!(locate_step(view, x, 4).is_none());
        assert!(locate_position(view, x, 5).is_none());
    }
}
