//! Integration tests for the public catalog API.
//!
//! These exercise the end-to-end paths a consumer takes: filter the catalog
//! for a kind, project form fields, and seed a default configuration.

use float_cmp::approx_eq;
use proptest::prelude::*;

use dotform::{
    AttrValue, AttributeCatalog, CatalogError, DefaultSettings, ElementKind, Widget,
};

#[test]
fn test_area_on_node_end_to_end() {
    let catalog = AttributeCatalog::builtin();

    let node_attributes = catalog.for_kind(ElementKind::Node);
    let area = node_attributes["area"];
    assert!(area.engines().is_none());
    assert!(area.formats().is_none());

    let default = area.default_for(ElementKind::Node).unwrap();
    assert!(approx_eq!(f64, default.as_float().unwrap(), 1.0));

    let settings = DefaultSettings::from_catalog(&catalog).unwrap();
    let node_defaults = settings.for_kind(ElementKind::Node).unwrap();
    assert!(approx_eq!(
        f64,
        node_defaults["area"].as_float().unwrap(),
        1.0
    ));
}

#[test]
fn test_style_on_cluster_end_to_end() {
    let catalog = AttributeCatalog::builtin();

    let style = catalog.get("style").unwrap();
    assert_eq!(
        style.default_for(ElementKind::Cluster).unwrap(),
        &AttrValue::Str("black".into())
    );

    let fields = catalog.fields_for(ElementKind::Cluster).unwrap();
    let style_field = &fields["style"];
    assert_eq!(style_field.presentation.as_ref().unwrap().widget, Widget::Select);

    let expected = style
        .allowed_values_for(ElementKind::Cluster)
        .unwrap()
        .unwrap();
    let options = style_field.options.as_ref().unwrap();
    assert_eq!(options.len(), expected.len());
    for (option, value) in options.iter().zip(expected) {
        assert_eq!(&option.key, value);
        assert_eq!(&option.label, value);
    }

    // Graph is not among style's applicable kinds.
    assert!(!catalog.for_kind(ElementKind::Graph).contains_key("style"));
    let settings = DefaultSettings::from_catalog(&catalog).unwrap();
    assert!(
        !settings
            .for_kind(ElementKind::Graph)
            .unwrap()
            .contains_key("style")
    );
}

#[test]
fn test_malformed_catalog_fails_fast() {
    use dotform::{AttributeDefinition, DefaultValue};
    use indexmap::IndexMap;

    // A per-kind default that forgets the Node entry.
    let catalog = AttributeCatalog::new([AttributeDefinition::with_default(
        "fillcolor",
        [ElementKind::Node, ElementKind::Cluster],
        DefaultValue::PerKind(IndexMap::from([(
            ElementKind::Cluster,
            AttrValue::from("black"),
        )])),
    )]);

    let err = DefaultSettings::from_catalog(&catalog).unwrap_err();
    assert!(matches!(err, CatalogError::MissingKindEntry { .. }));
    assert!(catalog.fields_for(ElementKind::Node).is_err());
    // The well-formed kind still resolves.
    assert!(catalog.fields_for(ElementKind::Cluster).is_ok());
}

#[test]
fn test_builtin_catalog_is_well_formed() {
    // Every applicable kind of every attribute must resolve; this is the
    // guard that catches a malformed per-kind table at test time.
    let catalog = AttributeCatalog::builtin();
    for definition in catalog.attributes().values() {
        for &kind in definition.kinds() {
            definition.default_for(kind).unwrap();
            definition.allowed_values_for(kind).unwrap();
        }
    }
}

fn kind_strategy() -> impl Strategy<Value = ElementKind> {
    prop::sample::select(ElementKind::all().to_vec())
}

proptest! {
    #[test]
    fn filter_agrees_with_membership(kind in kind_strategy()) {
        let catalog = AttributeCatalog::builtin();
        let filtered = catalog.for_kind(kind);
        for (name, definition) in catalog.attributes() {
            prop_assert_eq!(
                filtered.contains_key(name.as_str()),
                definition.applies_to(kind)
            );
        }
    }

    #[test]
    fn fields_mirror_filtered_attributes(kind in kind_strategy()) {
        let catalog = AttributeCatalog::builtin();
        let fields = catalog.fields_for(kind).unwrap();
        let attributes = catalog.for_kind(kind);
        prop_assert_eq!(fields.len(), attributes.len());
        for name in attributes.keys() {
            prop_assert!(fields.contains_key(*name));
        }
    }
}
