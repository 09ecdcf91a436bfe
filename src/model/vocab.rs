//! Fixed vocabulary: `rdf`, `rdfs`, `xsd`, `vg` and `faldo`.

use super::Iri;

pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";
pub const VG_NS: &str = "http://biohackathon.org/resource/vg#";
pub const FALDO_NS: &str = "http://biohackathon.org/resource/faldo#";

pub mod rdf {
    use super::Iri;

    pub const TYPE: Iri = Iri::new_static("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
    pub const VALUE: Iri = Iri::new_static("http://www.w3.org/1999/02/22-rdf-syntax-ns#value");
}

pub mod rdfs {
    use super::Iri;

    pub const LABEL: Iri = Iri::new_static("http://www.w3.org/2000/01/rdf-schema#label");
}

pub mod xsd {
    use super::Iri;

    pub const STRING: Iri = Iri::new_static("http://www.w3.org/2001/XMLSchema#string");
    pub const INTEGER: Iri = Iri::new_static("http://www.w3.org/2001/XMLSchema#integer");
}

pub mod vg {
    use super::Iri;

    macro_rules! vg {
        ($local:literal) => {
            Iri::new_static(concat!("http://biohackathon.org/resource/vg#", $local))
        };
    }

    // Classes
    pub const NODE_CLASS: Iri = vg!("Node");
    pub const PATH_CLASS: Iri = vg!("Path");
    pub const STEP_CLASS: Iri = vg!("Step");

    // Step properties
    pub const NODE: Iri = vg!("node");
    pub const REVERSE_OF_NODE: Iri = vg!("reverseOfNode");
    pub const PATH: Iri = vg!("path");
    pub const RANK: Iri = vg!("rank");
    pub const POSITION: Iri = vg!("position");

    // Node properties
    pub const LINKS: Iri = vg!("links");
    pub const LINKS_FORWARD_TO_FORWARD: Iri = vg!("linksForwardToForward");
    pub const LINKS_FORWARD_TO_REVERSE: Iri = vg!("linksForwardToReverse");
    pub const LINKS_REVERSE_TO_FORWARD: Iri = vg!("linksReverseToForward");
    pub const LINKS_REVERSE_TO_REVERSE: Iri = vg!("linksReverseToReverse");
}

pub mod faldo {
    use super::Iri;

    macro_rules! faldo {
        ($local:literal) => {
            Iri::new_static(concat!("http://biohackathon.org/resource/faldo#", $local))
        };
    }

    pub const REGION: Iri = faldo!("Region");
    pub const POSITION_CLASS: Iri = faldo!("Position");
    pub const EXACT_POSITION: Iri = faldo!("ExactPosition");

    pub const BEGIN: Iri = faldo!("begin");
    pub const END: Iri = faldo!("end");
    pub const REFERENCE: Iri = faldo!("reference");
    pub const POSITION: Iri = faldo!("position");
}
