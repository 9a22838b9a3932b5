use owlet_core::vocabulary::{self, *};
use owlet_core::{GraphError, Node, Triple, TripleSource};
use owlet_daml::{DamlConfig, DamlError, DamlModel, EquivalenceResolver, NodeKind, PropertyIterator};
use tracing_subscriber::EnvFilter;

fn ex(name: &str) -> Node {
    Node::iri(format!("http://example.org/{}", name))
}

fn stmt(subject: &str, predicate: &str, object: &str) -> Triple {
    Triple::new(ex(subject), ex(predicate), ex(object))
}

fn create_test_model(triples: Vec<Triple>) -> DamlModel {
    let mut model = DamlModel::empty();
    model.add_all(triples).unwrap();
    model
}

fn closure(model: &DamlModel, root: &str, property: &str, transitive: bool, reflexive: bool) -> Vec<Node> {
    PropertyIterator::new(model, ex(root), Some(ex(property)), None, transitive, reflexive).collect()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fails every lookup whose subject is the poisoned node
struct FlakySource {
    triples: Vec<Triple>,
    poisoned: Node,
}

impl TripleSource for FlakySource {
    fn find(
        &self,
        subject: Option<&Node>,
        predicate: Option<&Node>,
        object: Option<&Node>,
    ) -> Result<Vec<Triple>, GraphError> {
        if subject == Some(&self.poisoned) {
            return Err(GraphError::Unavailable(format!("{} is unreachable", self.poisoned)));
        }
        self.triples.find(subject, predicate, object)
    }
}

#[test]
fn test_cycle_terminates() {
    let model = create_test_model(vec![stmt("a", "p", "b"), stmt("b", "p", "a")]);

    assert_eq!(closure(&model, "a", "p", true, false), vec![ex("b"), ex("a")]);
}

#[test]
fn test_self_loop_terminates() {
    let model = create_test_model(vec![stmt("a", "p", "a")]);

    assert_eq!(closure(&model, "a", "p", true, false), vec![ex("a")]);
    assert_eq!(closure(&model, "a", "p", true, true), vec![ex("a")]);
}

#[test]
fn test_reflexive_includes_root() {
    let model = create_test_model(vec![stmt("a", "p", "b")]);

    assert_eq!(closure(&model, "a", "p", false, true), vec![ex("a"), ex("b")]);
    assert_eq!(closure(&model, "a", "p", false, false), vec![ex("b")]);
}

#[test]
fn test_reflexive_root_without_edges() {
    let model = create_test_model(vec![stmt("x", "p", "y")]);

    assert_eq!(closure(&model, "lonely", "p", true, true), vec![ex("lonely")]);
    assert!(closure(&model, "lonely", "p", true, false).is_empty());
}

#[test]
fn test_transitivity_gating() {
    let model = create_test_model(vec![stmt("a", "p", "b"), stmt("b", "p", "c"), stmt("c", "p", "d")]);

    assert_eq!(closure(&model, "a", "p", false, false), vec![ex("b")]);
    assert_eq!(closure(&model, "a", "p", false, true), vec![ex("a"), ex("b")]);
    assert_eq!(closure(&model, "a", "p", true, false), vec![ex("b"), ex("c"), ex("d")]);
}

#[test]
fn test_breadth_first_order() {
    let model = create_test_model(vec![
        stmt("a", "p", "b"),
        stmt("a", "p", "c"),
        stmt("b", "p", "d"),
        stmt("c", "p", "e"),
    ]);

    assert_eq!(
        closure(&model, "a", "p", true, false),
        vec![ex("b"), ex("c"), ex("d"), ex("e")]
    );
}

#[test]
fn test_inverse_only() {
    let model = create_test_model(vec![stmt("x", "p", "a"), stmt("y", "p", "x")]);

    let reached: Vec<Node> = PropertyIterator::new(&model, ex("a"), None, Some(ex("p")), true, false).collect();
    assert_eq!(reached, vec![ex("x"), ex("y")]);
}

#[test]
fn test_knows_scenario_with_inverse() {
    // Through the inverse edge out of B, A is reached as well
    let model = create_test_model(vec![stmt("A", "knows", "B"), stmt("B", "knows", "C")]);

    let reached: Vec<Node> =
        PropertyIterator::new(&model, ex("A"), Some(ex("knows")), Some(ex("knows")), true, false).collect();
    assert_eq!(reached, vec![ex("B"), ex("C"), ex("A")]);
}

#[test]
fn test_knows_scenario_forward_only() {
    let model = create_test_model(vec![stmt("A", "knows", "B"), stmt("B", "knows", "C")]);

    assert_eq!(closure(&model, "A", "knows", true, false), vec![ex("B"), ex("C")]);
}

#[test]
fn test_default_value_not_discovered() {
    let model = create_test_model(vec![stmt("a", "p", "b")]);

    let mut iter = PropertyIterator::new(&model, ex("a"), Some(ex("p")), None, false, false);
    assert!(!iter.has_default_value());
    iter.set_default_value(ex("z"));
    assert!(iter.has_default_value());

    assert_eq!(iter.next(), Some(ex("b")));
    assert!(iter.has_next());
    assert_eq!(iter.next(), Some(ex("z")));
    assert!(!iter.has_next());
    assert_eq!(iter.next(), None);
}

#[test]
fn test_default_value_discovered_once() {
    let model = create_test_model(vec![stmt("a", "p", "b"), stmt("a", "p", "c")]);

    let reached: Vec<Node> = PropertyIterator::new(&model, ex("a"), Some(ex("p")), None, false, false)
        .with_default_value(ex("b"))
        .collect();
    assert_eq!(reached, vec![ex("b"), ex("c")]);
}

#[test]
fn test_default_value_on_empty_closure() {
    let model = DamlModel::empty();

    let reached: Vec<Node> = PropertyIterator::new(&model, ex("a"), Some(ex("p")), None, true, false)
        .with_default_value(ex("z"))
        .collect();
    assert_eq!(reached, vec![ex("z")]);
}

#[test]
fn test_exhaustion_errors() {
    let model = create_test_model(vec![stmt("a", "p", "b")]);

    let mut iter = PropertyIterator::new(&model, ex("a"), Some(ex("p")), None, false, false);
    assert_eq!(iter.next_node(), Ok(ex("b")));
    assert!(!iter.has_next());
    assert_eq!(iter.next_node(), Err(DamlError::Exhausted));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_remove_is_unsupported() {
    let model = create_test_model(vec![stmt("a", "p", "b")]);

    let mut iter = PropertyIterator::new(&model, ex("a"), Some(ex("p")), None, false, false);
    assert_eq!(iter.remove(), Err(DamlError::UnsupportedOperation("remove")));
    iter.next();
    assert!(matches!(iter.remove(), Err(DamlError::UnsupportedOperation(_))));
}

#[test]
fn test_detached_iterator() {
    let mut reflexive = PropertyIterator::detached([ex("a"), ex("b")], Some(ex("p")), None, true, true);
    assert_eq!(reflexive.next(), Some(ex("a")));
    assert_eq!(reflexive.next(), Some(ex("b")));
    assert_eq!(reflexive.next(), None);

    let mut plain = PropertyIterator::detached([ex("a")], Some(ex("p")), None, true, false);
    assert!(!plain.has_next());
    assert_eq!(plain.next_node(), Err(DamlError::Exhausted));
    assert!(!plain.uses_equivalence());
}

#[test]
fn test_multiple_roots_share_seen_set() {
    let model = create_test_model(vec![stmt("a", "p", "c"), stmt("b", "p", "c"), stmt("b", "p", "d")]);

    let reached: Vec<Node> =
        PropertyIterator::with_roots(&model, [ex("a"), ex("b")], Some(ex("p")), None, false, true, true).collect();
    assert_eq!(reached, vec![ex("a"), ex("b"), ex("c"), ex("d")]);
}

#[test]
fn test_equivalent_root_widens_closure() {
    let model = create_test_model(vec![
        Triple::new(ex("x"), vocabulary::daml_equivalent_to(), ex("y")),
        stmt("y", "p", "z"),
    ]);

    assert_eq!(closure(&model, "x", "p", true, false), vec![ex("z")]);
    assert_eq!(closure(&model, "x", "p", true, true), vec![ex("x"), ex("y"), ex("z")]);
}

#[test]
fn test_equivalence_applies_in_reverse_direction() {
    let model = create_test_model(vec![
        Triple::new(ex("y"), vocabulary::daml_equivalent_to(), ex("x")),
        stmt("y", "p", "z"),
    ]);

    assert_eq!(closure(&model, "x", "p", true, false), vec![ex("z")]);
}

#[test]
fn test_same_individual_requires_instance_kind() {
    let person = ex("Person");
    let mut model = create_test_model(vec![
        Triple::new(ex("x"), vocabulary::daml_same_individual_as(), ex("y")),
        stmt("y", "p", "z"),
    ]);

    // Untyped nodes only honour equivalentTo
    assert!(closure(&model, "x", "p", true, false).is_empty());

    model.add(Triple::new(ex("x"), vocabulary::rdf_type(), person.clone())).unwrap();
    model.add(Triple::new(ex("y"), vocabulary::rdf_type(), person)).unwrap();
    assert_eq!(model.node_kind(&ex("x")), NodeKind::Instance);
    assert_eq!(closure(&model, "x", "p", true, false), vec![ex("z")]);
}

#[test]
fn test_equivalence_disabled_per_iterator() {
    let model = create_test_model(vec![
        Triple::new(ex("x"), vocabulary::daml_equivalent_to(), ex("y")),
        stmt("y", "p", "z"),
    ]);

    let iter = PropertyIterator::with_roots(&model, [ex("x")], Some(ex("p")), None, true, false, false);
    assert!(!iter.uses_equivalence());
    assert_eq!(iter.count(), 0);
}

#[test]
fn test_equivalence_disabled_by_config() {
    let mut model = create_test_model(vec![
        Triple::new(ex("x"), vocabulary::daml_equivalent_to(), ex("y")),
        stmt("y", "p", "z"),
    ]);
    model.set_use_equivalence(false);

    let iter = PropertyIterator::new(&model, ex("x"), Some(ex("p")), None, true, false);
    assert!(!iter.uses_equivalence());
    assert_eq!(iter.count(), 0);

    let disabled = DamlModel::with_config(model.into_store(), DamlConfig::without_equivalence());
    assert!(closure(&disabled, "x", "p", true, false).is_empty());
}

#[test]
fn test_equivalent_property_is_followed() {
    let model = create_test_model(vec![
        Triple::new(ex("q"), vocabulary::daml_same_property_as(), ex("p")),
        stmt("a", "q", "b"),
    ]);

    let iter = PropertyIterator::new(&model, ex("a"), Some(ex("p")), None, false, false);
    assert_eq!(iter.properties(), &[ex("p"), ex("q")]);
    assert_eq!(iter.collect::<Vec<_>>(), vec![ex("b")]);
}

#[test]
fn test_owl_equivalent_property_respects_config() {
    let triples = vec![
        Triple::new(ex("q"), Node::iri(OWL_EQUIVALENT_PROPERTY), ex("p")),
        stmt("a", "q", "b"),
    ];

    let with_owl = create_test_model(triples.clone());
    assert_eq!(closure(&with_owl, "a", "p", false, false), vec![ex("b")]);

    let config = DamlConfig {
        include_owl_equivalence: false,
        ..DamlConfig::default()
    };
    let mut store = owlet_store::GraphStore::new();
    store.add_all(triples).unwrap();
    let without_owl = DamlModel::with_config(store, config);
    assert!(closure(&without_owl, "a", "p", false, false).is_empty());
}

#[test]
fn test_sub_property_is_folded_in() {
    let model = create_test_model(vec![
        Triple::new(ex("q"), vocabulary::rdfs_subproperty_of(), ex("p")),
        Triple::new(ex("r"), Node::iri(DAML_SUBPROPERTY_OF), ex("q")),
        stmt("a", "r", "b"),
    ]);

    assert_eq!(model.sub_properties_of(&ex("p")), vec![ex("q"), ex("r")]);
    assert_eq!(closure(&model, "a", "p", false, false), vec![ex("b")]);
}

#[test]
fn test_equivalents_of_untyped_sub_property_are_followed() {
    let model = create_test_model(vec![
        Triple::new(ex("r"), vocabulary::rdfs_subproperty_of(), ex("p")),
        Triple::new(ex("s"), vocabulary::daml_same_property_as(), ex("r")),
        stmt("a", "s", "b"),
    ]);

    let iter = PropertyIterator::new(&model, ex("a"), Some(ex("p")), None, false, false);
    assert_eq!(iter.properties(), &[ex("p"), ex("r"), ex("s")]);
    assert_eq!(iter.collect::<Vec<_>>(), vec![ex("b")]);
}

#[test]
fn test_sub_properties_of_equivalent_sub_property_are_followed() {
    let model = create_test_model(vec![
        Triple::new(ex("r"), vocabulary::rdfs_subproperty_of(), ex("p")),
        Triple::new(ex("s"), vocabulary::daml_same_property_as(), ex("r")),
        Triple::new(ex("t"), vocabulary::rdfs_subproperty_of(), ex("s")),
        stmt("a", "t", "c"),
    ]);

    let iter = PropertyIterator::new(&model, ex("a"), Some(ex("p")), None, false, false);
    assert_eq!(iter.properties(), &[ex("p"), ex("r"), ex("s"), ex("t")]);
    assert_eq!(iter.collect::<Vec<_>>(), vec![ex("c")]);
}

#[test]
fn test_sub_property_relation_is_not_widened_recursively() {
    let model = create_test_model(vec![
        Triple::new(ex("a"), vocabulary::rdfs_subproperty_of(), ex("b")),
        Triple::new(ex("b"), Node::iri(DAML_SUBPROPERTY_OF), ex("c")),
    ]);

    let iter = PropertyIterator::new(
        &model,
        ex("a"),
        Some(vocabulary::rdfs_subproperty_of()),
        None,
        true,
        false,
    );
    assert_eq!(
        iter.properties(),
        &[Node::iri(RDFS_SUBPROPERTY_OF), Node::iri(DAML_SUBPROPERTY_OF)]
    );
    assert_eq!(iter.collect::<Vec<_>>(), vec![ex("b"), ex("c")]);
}

#[test]
fn test_literal_values_are_produced_not_expanded() {
    let model = create_test_model(vec![
        Triple::new(ex("a"), ex("label"), Node::literal("first")),
        Triple::new(ex("a"), ex("label"), Node::lang_literal("erste", "DE")),
    ]);

    assert_eq!(
        closure(&model, "a", "label", true, false),
        vec![Node::literal("first"), Node::lang_literal("erste", "de")]
    );
}

#[test]
fn test_failing_lookups_are_skipped() {
    init_tracing();

    let source = FlakySource {
        triples: vec![stmt("a", "p", "b"), stmt("b", "p", "c"), stmt("x", "p", "b")],
        poisoned: ex("b"),
    };
    let model = DamlModel::new(source);

    // b is reached, but nothing can be learned about where it leads
    assert_eq!(closure_over(&model, "a", Some("p"), None), vec![ex("b")]);
    // incoming edges are looked up by object and still work
    assert_eq!(closure_over(&model, "b", None, Some("p")), vec![ex("a"), ex("x")]);
}

fn closure_over<S: TripleSource>(
    model: &DamlModel<S>,
    root: &str,
    property: Option<&str>,
    inverse: Option<&str>,
) -> Vec<Node> {
    PropertyIterator::new(model, ex(root), property.map(ex), inverse.map(ex), true, false).collect()
}

#[test]
fn test_size_hint_and_debug() {
    let model = create_test_model(vec![stmt("a", "p", "b"), stmt("a", "p", "c")]);

    let iter = PropertyIterator::new(&model, ex("a"), Some(ex("p")), None, false, false)
        .with_default_value(ex("z"));
    assert_eq!(iter.size_hint(), (3, None));
    assert!(!iter.is_transitive());

    let rendered = format!("{:?}", iter);
    assert!(rendered.contains("PropertyIterator"));
    assert!(rendered.contains("queued: 2"));
}

#[test]
fn test_fused_after_exhaustion() {
    let model = create_test_model(vec![stmt("a", "p", "b")]);

    let mut iter = PropertyIterator::new(&model, ex("a"), Some(ex("p")), None, true, false);
    assert_eq!(iter.by_ref().count(), 1);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_graph_errors_convert() -> anyhow::Result<()> {
    let mut model = DamlModel::empty();
    let err = model
        .add(Triple::new(Node::literal("x"), ex("p"), ex("o")))
        .unwrap_err();
    assert!(matches!(err, DamlError::Graph(GraphError::InvalidStatement(_))));

    assert!(model.add(stmt("a", "p", "b"))?);
    assert!(!model.add(stmt("a", "p", "b"))?);
    assert_eq!(model.len(), 1);
    Ok(())
}
