//! Equivalence resolution capability

use crate::kind::NodeKind;
use owlet_core::{Node, TripleSource};

/// Computes the nodes a node is declared interchangeable with.
///
/// Implementations decide a node's [`NodeKind`] from the graph and follow the
/// same-as relations appropriate to it. All answers honour the
/// [`equivalence_enabled`](Self::equivalence_enabled) switch: when it is off
/// every node is only equivalent to itself.
pub trait EquivalenceResolver {
    /// Global equivalence toggle of the owning model
    fn equivalence_enabled(&self) -> bool;

    fn node_kind(&self, node: &Node) -> NodeKind;

    /// Equivalence class of `node` treated as a node of `kind`. The node
    /// itself comes first.
    fn equivalents_as(&self, node: &Node, kind: NodeKind) -> Vec<Node>;

    /// Equivalence class of `node` under its own kind. The node itself comes
    /// first.
    fn equivalents_of(&self, node: &Node) -> Vec<Node> {
        self.equivalents_as(node, self.node_kind(node))
    }

    /// Transitive sub-properties of `property`
    fn sub_properties_of(&self, property: &Node) -> Vec<Node>;
}

/// A graph that can both answer statement patterns and resolve equivalence;
/// what a [`crate::PropertyIterator`] needs from its context.
pub trait OntologyGraph: TripleSource + EquivalenceResolver {}

impl<T: TripleSource + EquivalenceResolver + ?Sized> OntologyGraph for T {}
