//! Path identifier.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use super::PathHandle;

/// Bytes escaped in a synthetic path name: everything an IRI forbids, plus
/// the delimiters that would end the path component.
const NAME_ESCAPES: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// IRI of a named path.
///
/// A path whose name is already an absolute hierarchical URI keeps that URI;
/// any other name becomes `{base}path/{name}`, percent-encoded so the result
/// is always a valid IRI. Built once per path when the store is opened.
#[derive(Debug, Clone)]
pub struct PathIri {
    uri: Arc<str>,
    name: Arc<str>,
    handle: PathHandle,
    absolute: bool,
}

impl PathIri {
    pub fn new(handle: PathHandle, name: &str, base: &str) -> Self {
        let absolute = is_absolute_uri(name);
        let uri: Arc<str> = if absolute {
            Arc::from(name)
        } else {
            Arc::from(format!("{base}path/{}", utf8_percent_encode(name, NAME_ESCAPES)))
        };
        Self { uri, name: Arc::from(name), handle, absolute }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handle(&self) -> PathHandle {
        self.handle
    }

    /// True if the path name was used verbatim as the IRI.
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }
}

/// Absolute and hierarchical, e.g. `http://host/x`, and usable as an IRI
/// as written. Names such as `chr1:100` parse as URLs with scheme `chr1`
/// and are not accepted.
fn is_absolute_uri(name: &str) -> bool {
    let iri_safe = !name.contains(|c: char| {
        c.is_control() || matches!(c, ' ' | '"' | '<' | '>' | '\\' | '^' | '`' | '{' | '|' | '}')
    });
    iri_safe && url::Url::parse(name).is_ok_and(|u| !u.cannot_be_a_base())
}

impl PartialEq for PathIri {
    fn eq(&self, other: &Self) -> bool {
        (self.handle == other.handle && Arc::ptr_eq(&self.uri, &other.uri)) || self.uri == other.uri
    }
}

impl Eq for PathIri {}

impl Hash for PathIri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uri.hash(state);
    }
}

impl PartialOrd for PathIri {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PathIri {
    fn cmp(&self, other: &Self) -> Ordering {
        self.uri.cmp(&other.uri)
    }
}

impl fmt::Display for PathIri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}
