//! Lazy closure of a property over a graph, widened by declared equivalences
//!
//! A [`PropertyIterator`] walks from one or more root nodes along a property
//! (and optionally along the incoming edges of an inverse property), in
//! breadth-first discovery order. Each node is produced at most once. When
//! equivalence is in effect, every node discovered pulls in its equivalence
//! class, edges are followed from every member of a node's class, and the
//! property itself is widened to its equivalents and sub-properties.
//!
//! Work is done on demand: a node's neighbours are looked up when that node is
//! taken off the queue, not when the iterator is built.

use crate::kind::NodeKind;
use crate::resolver::OntologyGraph;
use crate::DamlError;
use owlet_core::{vocabulary, Node};
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::iter::FusedIterator;
use tracing::{debug, trace, warn};

/// Breadth-first closure of a property from a set of roots.
///
/// Construction fixes the property sets that will be followed: with
/// equivalence in effect, `property` and `inverse` are each replaced by their
/// equivalence class plus the sub-properties of every member. The sets do not
/// change afterwards, even if the graph would now give a different answer.
///
/// The iterator borrows its graph for its whole life, so the graph cannot be
/// mutated mid-iteration.
///
/// When equivalence declarations are contradictory or cyclic the iterator
/// still terminates, but which nodes it reaches may depend on traversal order.
pub struct PropertyIterator<'g> {
    graph: Option<&'g (dyn OntologyGraph + 'g)>,
    /// Predicates followed outward (`node p ?y`)
    forward: Vec<Node>,
    /// Predicates followed inward (`?y q node`)
    inverse: Vec<Node>,
    transitive: bool,
    use_equivalence: bool,
    roots: HashSet<Node>,
    queue: VecDeque<Node>,
    seen: HashSet<Node>,
    default_value: Option<Node>,
}

impl<'g> PropertyIterator<'g> {
    /// Closure from a single root, using equivalence if the graph allows it
    pub fn new<G: OntologyGraph>(
        graph: &'g G,
        root: Node,
        property: Option<Node>,
        inverse: Option<Node>,
        transitive: bool,
        reflexive: bool,
    ) -> Self {
        Self::with_roots(graph, [root], property, inverse, transitive, reflexive, true)
    }

    /// Closure from several roots.
    ///
    /// Equivalence is used only if `use_equivalence` is set *and* the graph
    /// has equivalence enabled.
    pub fn with_roots<G, I>(
        graph: &'g G,
        roots: I,
        property: Option<Node>,
        inverse: Option<Node>,
        transitive: bool,
        reflexive: bool,
        use_equivalence: bool,
    ) -> Self
    where
        G: OntologyGraph,
        I: IntoIterator<Item = Node>,
    {
        let graph: &'g (dyn OntologyGraph + 'g) = graph;
        let use_equivalence = use_equivalence && graph.equivalence_enabled();
        let forward = Self::property_set(graph, property, use_equivalence);
        let inverse = Self::property_set(graph, inverse, use_equivalence);

        Self::start(Some(graph), roots, forward, inverse, transitive, reflexive, use_equivalence)
    }

    /// Closure with no graph behind it.
    ///
    /// Every lookup yields nothing: a non-reflexive iterator is empty and a
    /// reflexive one produces exactly its roots.
    pub fn detached<I>(
        roots: I,
        property: Option<Node>,
        inverse: Option<Node>,
        transitive: bool,
        reflexive: bool,
    ) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        Self::start(
            None,
            roots,
            property.into_iter().collect(),
            inverse.into_iter().collect(),
            transitive,
            reflexive,
            false,
        )
    }

    /// Closure over fixed predicate sets with equivalence switched off.
    ///
    /// Used to compute equivalence classes themselves, where widening would
    /// recurse.
    pub(crate) fn over_predicates<G, I>(
        graph: &'g G,
        roots: I,
        forward: Vec<Node>,
        inverse: Vec<Node>,
        transitive: bool,
        reflexive: bool,
    ) -> Self
    where
        G: OntologyGraph,
        I: IntoIterator<Item = Node>,
    {
        let graph: &'g (dyn OntologyGraph + 'g) = graph;
        Self::start(Some(graph), roots, forward, inverse, transitive, reflexive, false)
    }

    fn start<I>(
        graph: Option<&'g (dyn OntologyGraph + 'g)>,
        roots: I,
        forward: Vec<Node>,
        inverse: Vec<Node>,
        transitive: bool,
        reflexive: bool,
        use_equivalence: bool,
    ) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let roots: Vec<Node> = roots.into_iter().collect();

        debug!(
            roots = roots.len(),
            forward = forward.len(),
            inverse = inverse.len(),
            transitive,
            reflexive,
            use_equivalence,
            detached = graph.is_none(),
            "starting property closure"
        );

        let mut iter = Self {
            graph,
            forward,
            inverse,
            transitive,
            use_equivalence,
            roots: roots.iter().cloned().collect(),
            queue: VecDeque::new(),
            seen: HashSet::new(),
            default_value: None,
        };

        for root in roots {
            if reflexive {
                iter.enqueue(root);
            } else {
                iter.expand(&root);
            }
        }

        iter
    }

    /// The predicates a property stands for during this traversal.
    ///
    /// Sub-properties are not folded in when the property is (equivalent to)
    /// the sub-property relation itself, since computing them would need this
    /// very set.
    fn property_set(
        graph: &dyn OntologyGraph,
        property: Option<Node>,
        use_equivalence: bool,
    ) -> Vec<Node> {
        let Some(property) = property else {
            return Vec::new();
        };
        if !use_equivalence {
            return vec![property];
        }

        let mut set = graph.equivalents_as(&property, NodeKind::Property);
        if !set.contains(&property) {
            set.insert(0, property);
        }
        if set.iter().any(vocabulary::is_subproperty_of) {
            return set;
        }

        // Sub-properties stand in predicate position here, so their
        // equivalents are taken as properties whatever their declared types.
        let mut next = 0;
        while next < set.len() {
            let member = set[next].clone();
            next += 1;
            for sub in graph.sub_properties_of(&member) {
                for equivalent in graph.equivalents_as(&sub, NodeKind::Property) {
                    if !set.contains(&equivalent) {
                        set.push(equivalent);
                    }
                }
            }
        }
        set
    }

    /// Add a node (and, with equivalence, its class) to the queue unless
    /// already seen
    fn enqueue(&mut self, node: Node) {
        let mut pending = VecDeque::from([node]);

        while let Some(next) = pending.pop_front() {
            if !self.seen.insert(next.clone()) {
                continue;
            }
            if self.use_equivalence && next.is_resource() {
                if let Some(graph) = self.graph {
                    pending.extend(graph.equivalents_of(&next));
                }
            }
            self.queue.push_back(next);
        }
    }

    /// Enqueue the neighbours of `node`: outgoing edges along the forward
    /// predicates first, then incoming edges along the inverse ones.
    ///
    /// A failed lookup is logged and contributes nothing.
    fn expand(&mut self, node: &Node) {
        let Some(graph) = self.graph else {
            return;
        };

        let sources = if self.use_equivalence && node.is_resource() {
            graph.equivalents_of(node)
        } else {
            vec![node.clone()]
        };

        let mut found = Vec::new();
        for source in sources.iter().filter(|s| s.is_resource()) {
            for predicate in &self.forward {
                match graph.objects_of(source, predicate) {
                    Ok(objects) => found.extend(objects),
                    Err(e) => warn!(
                        node = %source,
                        property = %predicate,
                        error = %e,
                        "forward lookup failed, skipping"
                    ),
                }
            }
        }
        for source in &sources {
            for predicate in &self.inverse {
                match graph.subjects_of(source, predicate) {
                    Ok(subjects) => found.extend(subjects),
                    Err(e) => warn!(
                        node = %source,
                        property = %predicate,
                        error = %e,
                        "inverse lookup failed, skipping"
                    ),
                }
            }
        }

        trace!(node = %node, neighbours = found.len(), "expanded");

        for neighbour in found {
            self.enqueue(neighbour);
        }
    }

    fn pending_default(&self) -> Option<&Node> {
        self.default_value.as_ref().filter(|d| !self.seen.contains(*d))
    }

    /// True while the queue holds nodes or an unseen default remains
    pub fn has_next(&self) -> bool {
        !self.queue.is_empty() || self.pending_default().is_some()
    }

    /// Next node, or [`DamlError::Exhausted`] once nothing remains
    pub fn next_node(&mut self) -> Result<Node, DamlError> {
        self.next().ok_or(DamlError::Exhausted)
    }

    /// Always fails: nodes produced here are derived, there is no statement
    /// to delete.
    pub fn remove(&mut self) -> Result<(), DamlError> {
        Err(DamlError::UnsupportedOperation("remove"))
    }

    /// Guarantee `value` is produced exactly once: where it is reached
    /// naturally, otherwise after everything else. Set it before the first
    /// call to `next`.
    pub fn set_default_value(&mut self, value: Node) {
        self.default_value = Some(value);
    }

    pub fn with_default_value(mut self, value: Node) -> Self {
        self.set_default_value(value);
        self
    }

    pub fn has_default_value(&self) -> bool {
        self.default_value.is_some()
    }

    pub fn default_value(&self) -> Option<&Node> {
        self.default_value.as_ref()
    }

    pub fn is_transitive(&self) -> bool {
        self.transitive
    }

    /// Whether equivalence is in effect after applying the graph's toggle
    pub fn uses_equivalence(&self) -> bool {
        self.use_equivalence
    }

    /// Predicates followed outward, as fixed at construction
    pub fn properties(&self) -> &[Node] {
        &self.forward
    }

    /// Predicates followed inward, as fixed at construction
    pub fn inverse_properties(&self) -> &[Node] {
        &self.inverse
    }
}

impl Iterator for PropertyIterator<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        if let Some(node) = self.queue.pop_front() {
            if self.transitive || self.roots.contains(&node) {
                self.expand(&node);
            }
            return Some(node);
        }

        let default = self.pending_default()?.clone();
        self.seen.insert(default.clone());
        Some(default)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(self.pending_default().is_some());
        (self.queue.len() + pending, None)
    }
}

impl FusedIterator for PropertyIterator<'_> {}

impl fmt::Debug for PropertyIterator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyIterator")
            .field("detached", &self.graph.is_none())
            .field("forward", &self.forward)
            .field("inverse", &self.inverse)
            .field("transitive", &self.transitive)
            .field("use_equivalence", &self.use_equivalence)
            .field("queued", &self.queue.len())
            .field("seen", &self.seen.len())
            .field("default_value", &self.default_value)
            .finish()
    }
}
