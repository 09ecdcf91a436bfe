//! RDF export: serialize every fact of a store.
//!
//! Both writers drive the full scan `(?s, ?p, ?o)` through sophia's
//! serializers, so the output is exactly what a query engine would see.
//!
//! ```text
//! GFA → MemoryGraph → VgStore → export_ntriples() → one fact per line
//!                             → export_turtle()   → prefix block + prefixed facts
//! ```

use std::io::{self, Write};

use sophia::api::prefix::{Prefix, PrefixMapPair};
use sophia::api::serializer::TripleSerializer;
use sophia::api::source::StreamError;
use sophia::api::term::{BnodeId, SimpleTerm};
use sophia::iri::{Iri as CheckedIri, IriRef};
use sophia::turtle::serializer::nt::NtSerializer;
use sophia::turtle::serializer::turtle::{TurtleConfig, TurtleSerializer};
use tracing::warn;

use crate::model::{Pattern, Term};
use crate::namespace::NamespaceManager;
use crate::storage::HandleGraph;
use crate::{Error, Result, VgStore};

/// Write every fact as N-Triples. Returns the number of facts written.
pub fn export_ntriples<G: HandleGraph>(store: &VgStore<G>, writer: &mut dyn Write) -> Result<usize> {
    let mut serializer = NtSerializer::new(writer);
    serialize(store, &mut serializer)
}

/// Write every fact as Turtle, using the store's prefixes. Returns the
/// number of facts written.
pub fn export_turtle<G: HandleGraph>(store: &VgStore<G>, writer: &mut dyn Write) -> Result<usize> {
    let config = TurtleConfig::new().with_own_prefix_map(prefix_map(store.namespace_manager()));
    let mut serializer = TurtleSerializer::new_with_config(writer, config);
    serialize(store, &mut serializer)
}

fn serialize<G, S>(store: &VgStore<G>, serializer: &mut S) -> Result<usize>
where
    G: HandleGraph,
    S: TripleSerializer<Error = io::Error>,
{
    let mut written = 0;
    let source = store.triples(Pattern::any()).map(|quad| {
        let (triple, _) = quad?;
        let rdf = [to_rdf(&triple.subject)?, iri_term(triple.predicate.as_str())?, to_rdf(&triple.object)?];
        written += 1;
        Ok::<_, Error>(rdf)
    });
    serializer.serialize_triples(source).map_err(|e| match e {
        StreamError::SourceError(e) => e,
        StreamError::SinkError(e) => Error::Io(e),
    })?;
    Ok(written)
}

fn to_rdf(term: &Term<'_>) -> Result<SimpleTerm<'static>> {
    if let Some(iri) = term.iri_str() {
        return iri_term(&iri);
    }
    match term {
        Term::Literal(literal) => {
            let datatype = literal.datatype();
            check_iri(datatype.as_str())?;
            Ok(SimpleTerm::LiteralDatatype(
                literal.lexical().into_owned().into(),
                IriRef::new_unchecked(datatype.as_str().to_owned().into()),
            ))
        }
        Term::BlankNode(label) => {
            BnodeId::new(label.as_str()).map_err(|e| Error::Rdf(format!("_:{label}: {e}")))?;
            Ok(SimpleTerm::BlankNode(BnodeId::new_unchecked(label.clone().into())))
        }
        other => Err(Error::Rdf(format!("{other} has no RDF form"))),
    }
}

fn iri_term(iri: &str) -> Result<SimpleTerm<'static>> {
    check_iri(iri)?;
    Ok(SimpleTerm::Iri(IriRef::new_unchecked(iri.to_owned().into())))
}

fn check_iri(iri: &str) -> Result<()> {
    CheckedIri::new(iri)
        .map(|_| ())
        .map_err(|e| Error::Rdf(format!("<{iri}> is not a valid IRI: {e}")))
}

/// The store's bindings in sophia's form. Bindings sophia rejects are left
/// out of the document.
fn prefix_map(namespaces: &NamespaceManager) -> Vec<PrefixMapPair> {
    namespaces
        .namespaces()
        .into_iter()
        .filter_map(|(prefix, namespace)| {
            let pair = Prefix::new(Box::<str>::from(prefix.as_str()))
                .ok()
                .zip(CheckedIri::new(Box::<str>::from(namespace.as_str())).ok());
            if pair.is_none() {
                warn!(prefix = %prefix, namespace = %namespace, "skipping binding with no Turtle form");
            }
            pair
        })
        .collect()
}
