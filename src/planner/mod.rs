//! Query planner: classifies a triple pattern into the generator that
//! answers it.
//!
//! The planner is graph-agnostic. It only looks at the predicate, the
//! object and the *kind* of the subject; it never parses IRIs and never
//! touches the graph. Predicate classification always wins over subject
//! classification.

use tracing::trace;

use crate::model::{Iri, Pattern, Term, faldo, rdf, rdfs, vg};

// ============================================================================
// Classification tables
// ============================================================================

/// Predicates answerable from a single node and its outgoing edges.
pub static NODE_RELATED_PREDICATES: [Iri; 6] = [
    rdf::VALUE,
    vg::LINKS_FORWARD_TO_FORWARD,
    vg::LINKS_FORWARD_TO_REVERSE,
    vg::LINKS_REVERSE_TO_FORWARD,
    vg::LINKS_REVERSE_TO_REVERSE,
    vg::LINKS,
];

/// Predicates the edge classifier can emit.
pub static LINK_PREDICATES: [Iri; 5] = [
    vg::LINKS_FORWARD_TO_FORWARD,
    vg::LINKS_FORWARD_TO_REVERSE,
    vg::LINKS_REVERSE_TO_FORWARD,
    vg::LINKS_REVERSE_TO_REVERSE,
    vg::LINKS,
];

/// Predicates answerable only by walking the steps of a path.
pub static STEP_ASSOCIATED_PREDICATES: [Iri; 9] = [
    vg::RANK,
    vg::POSITION,
    vg::PATH,
    vg::NODE,
    vg::REVERSE_OF_NODE,
    faldo::BEGIN,
    faldo::END,
    faldo::REFERENCE,
    faldo::POSITION,
];

/// `rdf:type` objects owned by the step generator.
pub static STEP_ASSOCIATED_TYPES: [Iri; 4] = [
    vg::STEP_CLASS,
    faldo::REGION,
    faldo::EXACT_POSITION,
    faldo::POSITION_CLASS,
];

pub fn is_node_related(predicate: &Iri) -> bool {
    NODE_RELATED_PREDICATES.contains(predicate)
}

pub fn is_link(predicate: &Iri) -> bool {
    LINK_PREDICATES.contains(predicate)
}

pub fn is_step_associated(predicate: &Iri) -> bool {
    STEP_ASSOCIATED_PREDICATES.contains(predicate)
}

// ============================================================================
// Plan
// ============================================================================

/// Which generator answers a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// Node generator.
    Nodes,
    /// Path generator.
    Paths,
    /// Step generator.
    Steps,
    /// Node, step and path generators, in that order.
    All,
    /// Route on the kind of the bound subject.
    BySubject,
    /// Nothing can match.
    Empty,
}

/// Classify a pattern.
pub fn plan(pattern: &Pattern<'_>) -> Plan {
    let plan = classify(pattern);
    trace!(?plan, predicate = ?pattern.predicate.as_ref().map(Iri::as_str), "planned pattern");
    plan
}

fn classify(pattern: &Pattern<'_>) -> Plan {
    let Pattern { subject, predicate, object } = pattern;

    // This store has no blank nodes, and literals are never subjects.
    if subject.as_ref().is_some_and(|s| s.is_blank_node() || s.is_literal())
        || object.as_ref().is_some_and(Term::is_blank_node)
    {
        return Plan::Empty;
    }

    if let (Some(p), Some(o)) = (predicate, object) {
        if *p == rdf::TYPE {
            return classify_type(o);
        }
    }

    if let Some(p) = predicate {
        if is_node_related(p) {
            return Plan::Nodes;
        }
        if is_step_associated(p) {
            return Plan::Steps;
        }
        if *p == rdfs::LABEL {
            return Plan::Paths;
        }
    }

    match (subject, predicate, object) {
        (None, None, None) => Plan::All,
        // `?s a ?t`: every generator can contribute a type triple.
        (None, Some(p), None) if *p == rdf::TYPE => Plan::All,
        (Some(_), _, _) => Plan::BySubject,
        _ => Plan::Empty,
    }
}

fn classify_type(object: &Term<'_>) -> Plan {
    if object.is_iri(&vg::NODE_CLASS) {
        Plan::Nodes
    } else if object.is_iri(&vg::PATH_CLASS) {
        Plan::Paths
    } else if STEP_ASSOCIATED_TYPES.iter().any(|t| object.is_iri(t)) {
        Plan::Steps
    } else {
        Plan::Empty
    }
}
