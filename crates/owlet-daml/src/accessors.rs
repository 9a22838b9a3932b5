//! Ontology queries expressed as property closures

use crate::kind::NodeKind;
use crate::model::DamlModel;
use crate::property_iter::PropertyIterator;
use crate::resolver::EquivalenceResolver;
use owlet_core::vocabulary::{
    self, DAML_INVERSE_OF, DAML_TRANSITIVE_PROPERTY, OWL_INVERSE_OF, OWL_TRANSITIVE_PROPERTY,
};
use owlet_core::{Node, TripleSource};
use tracing::warn;

impl<S: TripleSource> DamlModel<S> {
    /// Declared `daml:TransitiveProperty` or `owl:TransitiveProperty`
    pub fn is_transitive_property(&self, property: &Node) -> bool {
        self.declared_types(property)
            .iter()
            .any(|ty| ty.is_iri(DAML_TRANSITIVE_PROPERTY) || ty.is_iri(OWL_TRANSITIVE_PROPERTY))
    }

    /// The property declared inverse to `property`, read in either direction
    pub fn inverse_of(&self, property: &Node) -> Option<Node> {
        for relation in [DAML_INVERSE_OF, OWL_INVERSE_OF].map(Node::iri) {
            let lookups = [
                self.store().objects_of(property, &relation),
                self.store().subjects_of(property, &relation),
            ];
            for lookup in lookups {
                match lookup {
                    Ok(found) => {
                        if let Some(inverse) = found.into_iter().find(|n| n.is_resource()) {
                            return Some(inverse);
                        }
                    }
                    Err(e) => warn!(property = %property, error = %e, "inverse lookup failed"),
                }
            }
        }
        None
    }

    pub fn super_classes(&self, class: &Node, closed: bool) -> PropertyIterator<'_> {
        PropertyIterator::new(
            self,
            class.clone(),
            Some(vocabulary::rdfs_subclass_of()),
            None,
            closed,
            false,
        )
    }

    pub fn sub_classes(&self, class: &Node, closed: bool) -> PropertyIterator<'_> {
        PropertyIterator::new(
            self,
            class.clone(),
            None,
            Some(vocabulary::rdfs_subclass_of()),
            closed,
            false,
        )
    }

    pub fn super_properties(&self, property: &Node, closed: bool) -> PropertyIterator<'_> {
        PropertyIterator::new(
            self,
            property.clone(),
            Some(vocabulary::rdfs_subproperty_of()),
            None,
            closed,
            false,
        )
    }

    pub fn sub_properties(&self, property: &Node, closed: bool) -> PropertyIterator<'_> {
        PropertyIterator::new(
            self,
            property.clone(),
            None,
            Some(vocabulary::rdfs_subproperty_of()),
            closed,
            false,
        )
    }

    /// Classes `individual` belongs to. The closed form adds every
    /// super-class of a direct type. `daml:Thing` is always produced, last if
    /// nothing else reaches it.
    pub fn types_of(&self, individual: &Node, closed: bool) -> PropertyIterator<'_> {
        let direct = PropertyIterator::new(
            self,
            individual.clone(),
            Some(vocabulary::rdf_type()),
            None,
            false,
            false,
        );

        let iter = if closed {
            let direct: Vec<Node> = direct.collect();
            PropertyIterator::with_roots(
                self,
                direct,
                Some(vocabulary::rdfs_subclass_of()),
                None,
                true,
                true,
                true,
            )
        } else {
            direct
        };
        iter.with_default_value(vocabulary::daml_thing())
    }

    /// Individuals declared the same as `individual`, not including itself
    pub fn same_individuals(&self, individual: &Node) -> Vec<Node> {
        self.equivalents_as(individual, NodeKind::Instance)
            .into_iter()
            .filter(|n| n != individual)
            .collect()
    }

    /// Values of `property` on `subject`. Follows chains when the property is
    /// declared transitive, and reads statements of its declared inverse
    /// backwards.
    pub fn property_values(&self, subject: &Node, property: &Node) -> PropertyIterator<'_> {
        let transitive = self.is_transitive_property(property);
        let inverse = self.inverse_of(property);

        PropertyIterator::new(
            self,
            subject.clone(),
            Some(property.clone()),
            inverse,
            transitive,
            false,
        )
    }
}
