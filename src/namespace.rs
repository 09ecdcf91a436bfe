//! Namespace prefixes for pretty-printing.
//!
//! Prefixes play no part in query semantics. They only shorten IRIs when a
//! store is written out as Turtle.

use parking_lot::RwLock;

use crate::model::Iri;

/// Prefix ↔ namespace bindings, shared behind a lock so a store can be
/// queried and printed from several threads.
#[derive(Debug, Default)]
pub struct NamespaceManager {
    bindings: RwLock<Vec<(String, Iri)>>,
}

impl NamespaceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `prefix` to `namespace`. Rebinding a prefix replaces it, and a
    /// namespace keeps only its latest prefix.
    pub fn bind(&self, prefix: impl Into<String>, namespace: impl Into<Iri>) {
        let (prefix, namespace) = (prefix.into(), namespace.into());
        let mut bindings = self.bindings.write();
        bindings.retain(|(p, ns)| *p != prefix && *ns != namespace);
        bindings.push((prefix, namespace));
    }

    pub fn namespace(&self, prefix: &str) -> Option<Iri> {
        self.bindings
            .read()
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, ns)| ns.clone())
    }

    pub fn prefix(&self, namespace: &str) -> Option<String> {
        self.bindings
            .read()
            .iter()
            .find(|(_, ns)| ns.as_str() == namespace)
            .map(|(p, _)| p.clone())
    }

    /// Every binding, in the order it was made.
    pub fn namespaces(&self) -> Vec<(String, Iri)> {
        self.bindings.read().clone()
    }
}

/// Bindings every store starts with.
pub(crate) fn default_bindings(base: &str) -> Vec<(&'static str, Iri)> {
    use crate::model::vocab::{FALDO_NS, RDFS_NS, RDF_NS, VG_NS, XSD_NS};
    vec![
        ("rdf", Iri::new_static(RDF_NS)),
        ("rdfs", Iri::new_static(RDFS_NS)),
        ("xsd", Iri::new_static(XSD_NS)),
        ("vg", Iri::new_static(VG_NS)),
        ("faldo", Iri::new_static(FALDO_NS)),
        ("node", Iri::new(format!("{base}node/"))),
        ("path", Iri::new(format!("{base}path/"))),
    ]
}
