//! Form-field projection.
//!
//! Turns the attribute subset for one element kind into form-field
//! descriptors an external form layer can render. This crate produces no
//! HTML itself; the descriptors carry everything the form layer needs:
//! the presentation metadata verbatim, an options list for choice widgets
//! and the resolved default.

use indexmap::{IndexMap, IndexSet};
use log::trace;
use serde::Serialize;

use crate::attribute::{AttributeDefinition, Presentation};
use crate::catalog::AttributeCatalog;
use crate::error::CatalogError;
use crate::kind::ElementKind;
use crate::value::AttrValue;

/// One selectable option of a choice widget.
///
/// Graphviz value lists carry no display names, so the value serves as both
/// key and label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub key: String,
    pub label: String,
}

impl ChoiceOption {
    fn self_paired(value: &str) -> Self {
        Self {
            key: value.to_string(),
            label: value.to_string(),
        }
    }
}

/// Presentation metadata plus resolved default and options for rendering
/// one attribute as an editable form field.
///
/// `presentation` is `None` for attributes that are not independently
/// editable; such fields still carry the resolved default so a settings
/// form can display or seed the value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub presentation: Option<Presentation>,
    /// Selectable options, present only for choice widgets.
    pub options: Option<Vec<ChoiceOption>>,
    pub default_value: AttrValue,
}

impl FieldDescriptor {
    fn build(
        definition: &AttributeDefinition,
        kind: ElementKind,
    ) -> Result<Self, CatalogError> {
        let presentation = definition.presentation().cloned();

        let options = match &presentation {
            Some(p) if p.widget.is_choice() => {
                let values = definition.allowed_values_for(kind)?.unwrap_or_default();
                Some(self_paired_options(values))
            }
            _ => None,
        };

        Ok(Self {
            presentation,
            options,
            default_value: definition.default_for(kind)?.clone(),
        })
    }
}

/// Pair each value with itself as key and label, dropping duplicates while
/// preserving order.
fn self_paired_options(values: &[String]) -> Vec<ChoiceOption> {
    let unique: IndexSet<&str> = values.iter().map(String::as_str).collect();
    unique.into_iter().map(ChoiceOption::self_paired).collect()
}

impl AttributeCatalog {
    /// Build form-field descriptors for every attribute applicable to
    /// `kind`, in catalog order.
    ///
    /// The result keys are exactly the keys of
    /// [`for_kind`](Self::for_kind). Fails only when the catalog itself is
    /// malformed (a per-kind table missing an entry for `kind`).
    pub fn fields_for(
        &self,
        kind: ElementKind,
    ) -> Result<IndexMap<String, FieldDescriptor>, CatalogError> {
        let mut fields = IndexMap::new();
        for (name, definition) in self.for_kind(kind) {
            fields.insert(name.to_string(), FieldDescriptor::build(definition, kind)?);
        }
        trace!(kind:%, count = fields.len(); "Projected form fields");
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Widget;

    #[test]
    fn test_field_keys_match_filtered_attributes() {
        let catalog = AttributeCatalog::builtin();
        for kind in ElementKind::all() {
            let fields = catalog.fields_for(kind).unwrap();
            let attribute_names: Vec<&str> =
                catalog.for_kind(kind).keys().copied().collect();
            let field_names: Vec<&str> = fields.keys().map(String::as_str).collect();
            assert_eq!(field_names, attribute_names);
        }
    }

    #[test]
    fn test_choice_widget_gets_self_paired_options() {
        let catalog = AttributeCatalog::builtin();
        let fields = catalog.fields_for(ElementKind::Edge).unwrap();

        let arrowhead = &fields["arrowhead"];
        let options = arrowhead.options.as_ref().unwrap();
        assert_eq!(options[0].key, "normal");
        assert_eq!(options[0].label, "normal");
        assert_eq!(options.len(), 19);
    }

    #[test]
    fn test_per_kind_options_use_kind_specific_list() {
        let catalog = AttributeCatalog::builtin();
        let fields = catalog.fields_for(ElementKind::Cluster).unwrap();

        let style = &fields["style"];
        let keys: Vec<&str> = style
            .options
            .as_ref()
            .unwrap()
            .iter()
            .map(|o| o.key.as_str())
            .collect();
        assert_eq!(
            keys,
            [
                "solid",
                "dashed",
                "dotted",
                "bold",
                "rounded",
                "diagonals",
                "filled",
                "striped",
                "wedged",
            ]
        );
        assert_eq!(style.default_value, AttrValue::Str("black".into()));
    }

    #[test]
    fn test_non_choice_widget_has_no_options() {
        let catalog = AttributeCatalog::builtin();
        let fields = catalog.fields_for(ElementKind::Graph).unwrap();

        let damping = &fields["damping"];
        assert_eq!(
            damping.presentation.as_ref().unwrap().widget,
            Widget::TextField
        );
        assert!(damping.options.is_none());
        assert_eq!(damping.default_value, AttrValue::Float(0.99));
    }

    #[test]
    fn test_attribute_without_presentation_still_appears() {
        let catalog = AttributeCatalog::builtin();
        let fields = catalog.fields_for(ElementKind::Node).unwrap();

        let dir = &fields["dir"];
        assert!(dir.presentation.is_none());
        assert!(dir.options.is_none());
        assert_eq!(dir.default_value, AttrValue::Str("forward".into()));
    }

    #[test]
    fn test_options_drop_duplicates_preserving_order() {
        let options = self_paired_options(&[
            "solid".to_string(),
            "dashed".to_string(),
            "solid".to_string(),
            "bold".to_string(),
        ]);
        let keys: Vec<&str> = options.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, ["solid", "dashed", "bold"]);
    }
}
