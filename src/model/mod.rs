//! # RDF View Model
//!
//! Handles into the graph, RDF terms, and the identifier set that carries
//! handles through a query.
//!
//! Design rule: nothing in here walks the graph. The only graph calls are
//! the lazy end-position and node lookups on step identifiers.

pub mod handle;
pub mod term;
pub mod node;
pub mod path;
pub mod step;
pub mod vocab;

pub use handle::{MAX_NODE_ID, NodeHandle, NodeId, PathHandle, StepHandle};
pub use term::{Iri, Literal, Pattern, Quad, Term, Triple};
pub use node::NodeIri;
pub use path::PathIri;
pub use step::{StepBeginIri, StepEndIri, StepIri};
pub use vocab::{faldo, rdf, rdfs, vg, xsd};
