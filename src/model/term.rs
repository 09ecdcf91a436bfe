//! RDF terms, triples and triple patterns.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::vocab::xsd;
use super::{NodeIri, PathIri, StepBeginIri, StepEndIri, StepIri};

// ============================================================================
// Iri
// ============================================================================

/// An absolute IRI.
///
/// Vocabulary constants borrow a `'static` string; IRIs coming from callers
/// own theirs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(Cow<'static, str>);

impl Iri {
    pub const fn new_static(iri: &'static str) -> Self {
        Self(Cow::Borrowed(iri))
    }

    pub fn new(iri: impl Into<String>) -> Self {
        Self(Cow::Owned(iri.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Iri {
    fn from(v: &str) -> Self { Iri::new(v) }
}

impl From<String> for Iri {
    fn from(v: String) -> Self { Iri::new(v) }
}

// ============================================================================
// Literal
// ============================================================================

/// A literal value.
///
/// `Typed` never holds an `xsd:string` or a well-formed `xsd:integer`:
/// [`Literal::typed`] folds those into `String` and `Integer` so that
/// derived equality is value equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Literal {
    String(String),
    Integer(i64),
    Typed { lexical: String, datatype: Iri },
}

impl Literal {
    pub fn typed(lexical: impl Into<String>, datatype: Iri) -> Self {
        let lexical = lexical.into();
        if datatype == xsd::STRING {
            return Literal::String(lexical);
        }
        if datatype == xsd::INTEGER {
            if let Ok(v) = lexical.trim().parse::<i64>() {
                return Literal::Integer(v);
            }
        }
        Literal::Typed { lexical, datatype }
    }

    pub fn lexical(&self) -> Cow<'_, str> {
        match self {
            Literal::String(s) => Cow::Borrowed(s),
            Literal::Integer(i) => Cow::Owned(i.to_string()),
            Literal::Typed { lexical, .. } => Cow::Borrowed(lexical),
        }
    }

    pub fn datatype(&self) -> Iri {
        match self {
            Literal::String(_) => xsd::STRING,
            Literal::Integer(_) => xsd::INTEGER,
            Literal::Typed { datatype, .. } => datatype.clone(),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Literal::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }
}

/// N-Triples form: `"lexical"` or `"lexical"^^<datatype>`.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", escape_literal(&self.lexical()))?;
        match self {
            Literal::String(_) => Ok(()),
            _ => write!(f, "^^<{}>", self.datatype()),
        }
    }
}

impl From<&str> for Literal {
    fn from(v: &str) -> Self { Literal::String(v.to_owned()) }
}
impl From<String> for Literal {
    fn from(v: String) -> Self { Literal::String(v) }
}
impl From<i64> for Literal {
    fn from(v: i64) -> Self { Literal::Integer(v) }
}
impl From<u64> for Literal {
    fn from(v: u64) -> Self { Literal::Integer(i64::try_from(v).unwrap_or(i64::MAX)) }
}

fn escape_literal(s: &str) -> Cow<'_, str> {
    if !s.contains(['"', '\\', '\n', '\r']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

// ============================================================================
// Term
// ============================================================================

/// Any subject or object position value.
///
/// The identifier variants carry graph handles so that a term handed back to
/// the store (e.g. by a query engine joining on it) is routed without parsing
/// its string form. `'g` is the lifetime of the graph those handles point
/// into; the graph must outlive every term derived from it.
#[derive(Debug, Clone)]
pub enum Term<'g> {
    /// An IRI with no graph handle attached.
    Iri(Iri),
    Literal(Literal),
    BlankNode(String),
    Node(NodeIri),
    Path(PathIri),
    Step(StepIri<'g>),
    StepBegin(StepBeginIri<'g>),
    StepEnd(StepEndIri<'g>),
}

impl<'g> Term<'g> {
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(Iri::new(iri))
    }

    pub fn literal(lit: impl Into<Literal>) -> Self {
        Term::Literal(lit.into())
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// True for the variants that already carry a graph handle.
    pub fn is_identifier(&self) -> bool {
        matches!(
            self,
            Term::Node(_) | Term::Path(_) | Term::Step(_) | Term::StepBegin(_) | Term::StepEnd(_)
        )
    }

    /// Canonical IRI string, `None` for literals and blank nodes.
    pub fn iri_str(&self) -> Option<Cow<'_, str>> {
        match self {
            Term::Iri(iri) => Some(Cow::Borrowed(iri.as_str())),
            Term::Path(p) => Some(Cow::Borrowed(p.uri())),
            Term::Node(n) => Some(Cow::Owned(n.to_string())),
            Term::Step(s) => Some(Cow::Owned(s.to_string())),
            Term::StepBegin(b) => Some(Cow::Owned(b.to_string())),
            Term::StepEnd(e) => Some(Cow::Owned(e.to_string())),
            Term::Literal(_) | Term::BlankNode(_) => None,
        }
    }

    /// True if this term names exactly `iri`.
    pub fn is_iri(&self, iri: &Iri) -> bool {
        match self {
            Term::Iri(own) => own == iri,
            other => other.iri_str().is_some_and(|s| s == iri.as_str()),
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(l) => Some(l),
            _ => None,
        }
    }

    /// The (path, position) pair of a FALDO position term.
    pub fn as_position(&self) -> Option<(&PathIri, u64)> {
        match self {
            Term::StepBegin(b) => Some((b.path(), b.position())),
            Term::StepEnd(e) => Some((e.path(), e.position())),
            _ => None,
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Term::Literal(_) => 1,
            Term::BlankNode(_) => 2,
            _ => 0,
        }
    }
}

impl PartialEq for Term<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Term::Iri(a), Term::Iri(b)) => a == b,
            (Term::Literal(a), Term::Literal(b)) => a == b,
            (Term::BlankNode(a), Term::BlankNode(b)) => a == b,
            (Term::Node(a), Term::Node(b)) => a == b,
            (Term::Path(a), Term::Path(b)) => a == b,
            (Term::Step(a), Term::Step(b)) => a == b,
            // The end of step N is the begin of step N+1.
            (
                Term::StepBegin(_) | Term::StepEnd(_),
                Term::StepBegin(_) | Term::StepEnd(_),
            ) => match (self.as_position(), other.as_position()) {
                (Some((pa, a)), Some((pb, b))) => a == b && pa == pb,
                _ => false,
            },
            (Term::Literal(_) | Term::BlankNode(_), _) | (_, Term::Literal(_) | Term::BlankNode(_)) => false,
            _ => self.iri_str() == other.iri_str(),
        }
    }
}

impl Eq for Term<'_> {}

/// Consistent with `PartialEq`: every IRI-like term hashes its canonical
/// string, so an identifier and the plain IRI it equals collide.
impl Hash for Term<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind_rank().hash(state);
        match self {
            Term::Literal(l) => l.hash(state),
            Term::BlankNode(b) => b.hash(state),
            other => other.iri_str().hash(state),
        }
    }
}

impl PartialOrd for Term<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// IRI-like terms first, ordered by canonical string whatever their variant,
/// then literals, then blank nodes.
impl Ord for Term<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind_rank().cmp(&other.kind_rank()).then_with(|| match (self, other) {
            (Term::Literal(a), Term::Literal(b)) => a.cmp(b),
            (Term::BlankNode(a), Term::BlankNode(b)) => a.cmp(b),
            _ => self.iri_str().cmp(&other.iri_str()),
        })
    }
}

/// N-Triples form of the term.
impl fmt::Display for Term<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Literal(l) => write!(f, "{l}"),
            Term::BlankNode(b) => write!(f, "_:{b}"),
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::Node(n) => write!(f, "<{n}>"),
            Term::Path(p) => write!(f, "<{p}>"),
            Term::Step(s) => write!(f, "<{s}>"),
            Term::StepBegin(b) => write!(f, "<{b}>"),
            Term::StepEnd(e) => write!(f, "<{e}>"),
        }
    }
}

impl From<Iri> for Term<'_> {
    fn from(v: Iri) -> Self { Term::Iri(v) }
}
impl From<Literal> for Term<'_> {
    fn from(v: Literal) -> Self { Term::Literal(v) }
}
impl From<NodeIri> for Term<'_> {
    fn from(v: NodeIri) -> Self { Term::Node(v) }
}
impl From<PathIri> for Term<'_> {
    fn from(v: PathIri) -> Self { Term::Path(v) }
}
impl<'g> From<StepIri<'g>> for Term<'g> {
    fn from(v: StepIri<'g>) -> Self { Term::Step(v) }
}
impl<'g> From<StepBeginIri<'g>> for Term<'g> {
    fn from(v: StepBeginIri<'g>) -> Self { Term::StepBegin(v) }
}
impl<'g> From<StepEndIri<'g>> for Term<'g> {
    fn from(v: StepEndIri<'g>) -> Self { Term::StepEnd(v) }
}

// ============================================================================
// Triple / Quad
// ============================================================================

/// A subject-predicate-object fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple<'g> {
    pub subject: Term<'g>,
    pub predicate: Iri,
    pub object: Term<'g>,
}

impl<'g> Triple<'g> {
    pub fn new(subject: impl Into<Term<'g>>, predicate: Iri, object: impl Into<Term<'g>>) -> Self {
        Self { subject: subject.into(), predicate, object: object.into() }
    }
}

impl fmt::Display for Triple<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> {} .", self.subject, self.predicate, self.object)
    }
}

/// A triple paired with its named graph. This store has no named graphs, so
/// the context is always `None`.
pub type Quad<'g> = (Triple<'g>, Option<Iri>);

// ============================================================================
// Pattern
// ============================================================================

/// A triple pattern; `None` is an unbound position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pattern<'g> {
    pub subject: Option<Term<'g>>,
    pub predicate: Option<Iri>,
    pub object: Option<Term<'g>>,
}

impl<'g> Pattern<'g> {
    pub fn new(subject: Option<Term<'g>>, predicate: Option<Iri>, object: Option<Term<'g>>) -> Self {
        Self { subject, predicate, object }
    }

    /// `(?s, ?p, ?o)`
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_subject(mut self, subject: impl Into<Term<'g>>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_predicate(mut self, predicate: Iri) -> Self {
        self.predicate = Some(predicate);
        self
    }

    pub fn with_object(mut self, object: impl Into<Term<'g>>) -> Self {
        self.object = Some(object.into());
        self
    }

    pub fn is_unbound(&self) -> bool {
        self.subject.is_none() && self.predicate.is_none() && self.object.is_none()
    }

    pub fn allows_predicate(&self, predicate: &Iri) -> bool {
        self.predicate.as_ref().is_none_or(|p| p == predicate)
    }

    pub fn allows_object(&self, object: &Term<'_>) -> bool {
        self.object.as_ref().is_none_or(|o| o == object)
    }

    /// Cheap check for an object that is one of the vocabulary IRIs.
    pub fn allows_object_iri(&self, iri: &Iri) -> bool {
        self.object.as_ref().is_none_or(|o| o.is_iri(iri))
    }

    pub fn allows(&self, predicate: &Iri, object: &Term<'_>) -> bool {
        self.allows_predicate(predicate) && self.allows_object(object)
    }

    pub fn matches(&self, triple: &Triple<'_>) -> bool {
        self.subject.as_ref().is_none_or(|s| *s == triple.subject)
            && self.allows(&triple.predicate, &triple.object)
    }
}

impl<'g> From<(Option<Term<'g>>, Option<Iri>, Option<Term<'g>>)> for Pattern<'g> {
    fn from((subject, predicate, object): (Option<Term<'g>>, Option<Iri>, Option<Term<'g>>)) -> Self {
        Self { subject, predicate, object }
    }
}
