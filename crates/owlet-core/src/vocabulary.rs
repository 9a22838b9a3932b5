//! RDF, RDFS, DAML+OIL and OWL vocabulary IRIs

use crate::model::Node;

pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const DAML_NS: &str = "http://www.daml.org/2001/03/daml+oil#";
pub const OWL_NS: &str = "http://www.w3.org/2002/07/owl#";

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDF_PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";

pub const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
pub const RDFS_RESOURCE: &str = "http://www.w3.org/2000/01/rdf-schema#Resource";
pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
pub const RDFS_SUBPROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";
pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";

pub const DAML_CLASS: &str = "http://www.daml.org/2001/03/daml+oil#Class";
pub const DAML_RESTRICTION: &str = "http://www.daml.org/2001/03/daml+oil#Restriction";
pub const DAML_THING: &str = "http://www.daml.org/2001/03/daml+oil#Thing";
pub const DAML_NOTHING: &str = "http://www.daml.org/2001/03/daml+oil#Nothing";
pub const DAML_PROPERTY: &str = "http://www.daml.org/2001/03/daml+oil#Property";
pub const DAML_OBJECT_PROPERTY: &str = "http://www.daml.org/2001/03/daml+oil#ObjectProperty";
pub const DAML_DATATYPE_PROPERTY: &str = "http://www.daml.org/2001/03/daml+oil#DatatypeProperty";
pub const DAML_TRANSITIVE_PROPERTY: &str =
    "http://www.daml.org/2001/03/daml+oil#TransitiveProperty";
pub const DAML_UNIQUE_PROPERTY: &str = "http://www.daml.org/2001/03/daml+oil#UniqueProperty";
pub const DAML_UNAMBIGUOUS_PROPERTY: &str =
    "http://www.daml.org/2001/03/daml+oil#UnambiguousProperty";
pub const DAML_SUBCLASS_OF: &str = "http://www.daml.org/2001/03/daml+oil#subClassOf";
pub const DAML_SUBPROPERTY_OF: &str = "http://www.daml.org/2001/03/daml+oil#subPropertyOf";
pub const DAML_TYPE: &str = "http://www.daml.org/2001/03/daml+oil#type";
pub const DAML_DOMAIN: &str = "http://www.daml.org/2001/03/daml+oil#domain";
pub const DAML_RANGE: &str = "http://www.daml.org/2001/03/daml+oil#range";
pub const DAML_SAME_CLASS_AS: &str = "http://www.daml.org/2001/03/daml+oil#sameClassAs";
pub const DAML_SAME_PROPERTY_AS: &str = "http://www.daml.org/2001/03/daml+oil#samePropertyAs";
pub const DAML_SAME_INDIVIDUAL_AS: &str =
    "http://www.daml.org/2001/03/daml+oil#sameIndividualAs";
pub const DAML_EQUIVALENT_TO: &str = "http://www.daml.org/2001/03/daml+oil#equivalentTo";
pub const DAML_INVERSE_OF: &str = "http://www.daml.org/2001/03/daml+oil#inverseOf";

pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";
pub const OWL_NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
pub const OWL_TRANSITIVE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#TransitiveProperty";
pub const OWL_EQUIVALENT_CLASS: &str = "http://www.w3.org/2002/07/owl#equivalentClass";
pub const OWL_EQUIVALENT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#equivalentProperty";
pub const OWL_SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";
pub const OWL_INVERSE_OF: &str = "http://www.w3.org/2002/07/owl#inverseOf";

pub fn rdf_type() -> Node {
    Node::iri(RDF_TYPE)
}

pub fn rdfs_subclass_of() -> Node {
    Node::iri(RDFS_SUBCLASS_OF)
}

pub fn rdfs_subproperty_of() -> Node {
    Node::iri(RDFS_SUBPROPERTY_OF)
}

pub fn daml_thing() -> Node {
    Node::iri(DAML_THING)
}

pub fn daml_equivalent_to() -> Node {
    Node::iri(DAML_EQUIVALENT_TO)
}

pub fn daml_same_class_as() -> Node {
    Node::iri(DAML_SAME_CLASS_AS)
}

pub fn daml_same_property_as() -> Node {
    Node::iri(DAML_SAME_PROPERTY_AS)
}

pub fn daml_same_individual_as() -> Node {
    Node::iri(DAML_SAME_INDIVIDUAL_AS)
}

pub fn daml_inverse_of() -> Node {
    Node::iri(DAML_INVERSE_OF)
}

/// DAML+OIL restates several RDF/RDFS properties in its own namespace and
/// declares them `samePropertyAs` the originals. Returns the other half of
/// such a pair.
pub fn builtin_alias(iri: &str) -> Option<&'static str> {
    match iri {
        DAML_SUBCLASS_OF => Some(RDFS_SUBCLASS_OF),
        RDFS_SUBCLASS_OF => Some(DAML_SUBCLASS_OF),
        DAML_SUBPROPERTY_OF => Some(RDFS_SUBPROPERTY_OF),
        RDFS_SUBPROPERTY_OF => Some(DAML_SUBPROPERTY_OF),
        DAML_TYPE => Some(RDF_TYPE),
        RDF_TYPE => Some(DAML_TYPE),
        DAML_DOMAIN => Some(RDFS_DOMAIN),
        RDFS_DOMAIN => Some(DAML_DOMAIN),
        DAML_RANGE => Some(RDFS_RANGE),
        RDFS_RANGE => Some(DAML_RANGE),
        _ => None,
    }
}

/// True for either spelling of the sub-property relation
pub fn is_subproperty_of(node: &Node) -> bool {
    matches!(node.as_iri(), Some(RDFS_SUBPROPERTY_OF) | Some(DAML_SUBPROPERTY_OF))
}
