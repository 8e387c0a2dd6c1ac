//! Attribute definitions.
//!
//! Exported types:
//! - [`AttributeDefinition`]: one named attribute with its applicability,
//!   restrictions, default and presentation metadata
//! - [`DefaultValue`] / [`AllowedValues`]: flat-or-per-kind tagged variants
//! - [`Presentation`] / [`Widget`]: form widget metadata
//! - [`Engine`] / [`OutputFormat`]: restriction vocabularies
//!
//! # Flat versus per-kind
//!
//! Several Graphviz attributes mean different things on different element
//! kinds: `style` on an edge allows `dashed` but not `wedged`, and its
//! default differs between nodes and clusters. Rather than inspecting a
//! value's shape at runtime, the catalog stores an explicit tagged variant:
//! `Flat` applies to every applicable kind, `PerKind` carries one entry per
//! kind. A `PerKind` table must cover every kind that is ever queried;
//! a missing entry fails resolution with
//! [`CatalogError::MissingKindEntry`](crate::error::CatalogError).

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{CatalogError, CatalogTable};
use crate::kind::ElementKind;
use crate::value::AttrValue;

/// A Graphviz layout engine an attribute may be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Dot,
    Neato,
    Fdp,
    Sfdp,
    Twopi,
    Circo,
    Osage,
    Patchwork,
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dot => "dot",
            Self::Neato => "neato",
            Self::Fdp => "fdp",
            Self::Sfdp => "sfdp",
            Self::Twopi => "twopi",
            Self::Circo => "circo",
            Self::Osage => "osage",
            Self::Patchwork => "patchwork",
        };
        f.write_str(name)
    }
}

/// An output format an attribute may only affect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Svg,
    Map,
    Postscript,
    Png,
    Text,
}

/// The form widget used to edit an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Widget {
    TextField,
    Checkbox,
    Select,
    Radios,
}

impl Widget {
    /// Whether this widget presents a fixed set of choices and therefore
    /// needs an options list when projected into a form field.
    pub const fn is_choice(self) -> bool {
        matches!(self, Self::Select | Self::Radios)
    }
}

/// Display metadata for rendering an attribute as an editable form field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    /// The widget kind the form layer should render.
    pub widget: Widget,
    /// Field label.
    pub label: String,
    /// Field description, typically embedding a documentation reference
    /// produced by [`doc_reference`](crate::reference::doc_reference).
    pub description: String,
}

impl Presentation {
    pub fn new(
        widget: Widget,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            widget,
            label: label.into(),
            description: description.into(),
        }
    }
}

/// An attribute default: one value for every applicable kind, or one value
/// per kind.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    Flat(AttrValue),
    PerKind(IndexMap<ElementKind, AttrValue>),
}

impl DefaultValue {
    fn for_kind(&self, kind: ElementKind) -> Option<&AttrValue> {
        match self {
            Self::Flat(value) => Some(value),
            Self::PerKind(map) => map.get(&kind),
        }
    }
}

/// The set of values an attribute accepts: one ordered list for every
/// applicable kind, or a list per kind.
#[derive(Debug, Clone, PartialEq)]
pub enum AllowedValues {
    Flat(Vec<String>),
    PerKind(IndexMap<ElementKind, Vec<String>>),
}

impl AllowedValues {
    fn for_kind(&self, kind: ElementKind) -> Option<&[String]> {
        match self {
            Self::Flat(values) => Some(values.as_slice()),
            Self::PerKind(map) => map.get(&kind).map(Vec::as_slice),
        }
    }
}

/// One named Graphviz attribute and its catalog metadata.
///
/// Definitions are authored with a chaining builder:
///
/// ```
/// use dotform::attribute::{AttributeDefinition, Engine, Presentation, Widget};
/// use dotform::kind::ElementKind;
///
/// let damping = AttributeDefinition::new("damping", [ElementKind::Graph], 0.99)
///     .with_engines([Engine::Neato])
///     .with_presentation(Presentation::new(
///         Widget::TextField,
///         "Damping",
///         "Spring damping factor.",
///     ));
///
/// assert!(damping.applies_to(ElementKind::Graph));
/// assert!(!damping.applies_to(ElementKind::Edge));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDefinition {
    name: String,
    kinds: Vec<ElementKind>,
    engines: Option<Vec<Engine>>,
    formats: Option<Vec<OutputFormat>>,
    default: DefaultValue,
    values: Option<AllowedValues>,
    presentation: Option<Presentation>,
}

impl AttributeDefinition {
    /// Create a definition with a flat default.
    ///
    /// # Panics
    ///
    /// Panics if `kinds` is empty; an attribute applicable to nothing is a
    /// catalog-authoring bug.
    pub fn new(
        name: impl Into<String>,
        kinds: impl IntoIterator<Item = ElementKind>,
        default: impl Into<AttrValue>,
    ) -> Self {
        Self::with_default(name, kinds, DefaultValue::Flat(default.into()))
    }

    /// Create a definition with an explicit (possibly per-kind) default.
    ///
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    pub fn with_default(
        name: impl Into<String>,
        kinds: impl IntoIterator<Item = ElementKind>,
        default: DefaultValue,
    ) -> Self {
        let name = name.into();
        let kinds: Vec<ElementKind> = kinds.into_iter().collect();
        assert!(
            !kinds.is_empty(),
            "attribute `{name}` must apply to at least one element kind"
        );
        Self {
            name,
            kinds,
            engines: None,
            formats: None,
            default,
            values: None,
            presentation: None,
        }
    }

    /// Restrict the attribute to the given layout engines.
    ///
    /// Returns `self` for method chaining.
    pub fn with_engines(mut self, engines: impl IntoIterator<Item = Engine>) -> Self {
        self.engines = Some(engines.into_iter().collect());
        self
    }

    /// Restrict the attribute to the given output formats.
    ///
    /// Returns `self` for method chaining.
    pub fn with_formats(mut self, formats: impl IntoIterator<Item = OutputFormat>) -> Self {
        self.formats = Some(formats.into_iter().collect());
        self
    }

    /// Attach a flat allowed-value list.
    ///
    /// Returns `self` for method chaining.
    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = Some(AllowedValues::Flat(
            values.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Attach a per-kind allowed-value table.
    ///
    /// Returns `self` for method chaining.
    pub fn with_values_per_kind(
        mut self,
        values: IndexMap<ElementKind, Vec<String>>,
    ) -> Self {
        self.values = Some(AllowedValues::PerKind(values));
        self
    }

    /// Attach form presentation metadata.
    ///
    /// Returns `self` for method chaining.
    pub fn with_presentation(mut self, presentation: Presentation) -> Self {
        self.presentation = Some(presentation);
        self
    }

    /// The unique attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element kinds this attribute may be set on. Never empty.
    pub fn kinds(&self) -> &[ElementKind] {
        &self.kinds
    }

    /// The layout engines this attribute is meaningful for, or `None` for
    /// all engines.
    pub fn engines(&self) -> Option<&[Engine]> {
        self.engines.as_deref()
    }

    /// The output formats this attribute affects, or `None` for all formats.
    pub fn formats(&self) -> Option<&[OutputFormat]> {
        self.formats.as_deref()
    }

    /// The raw default table.
    pub fn default(&self) -> &DefaultValue {
        &self.default
    }

    /// The raw allowed-value table, if any.
    pub fn values(&self) -> Option<&AllowedValues> {
        self.values.as_ref()
    }

    /// Form presentation metadata, if the attribute is independently
    /// editable.
    pub fn presentation(&self) -> Option<&Presentation> {
        self.presentation.as_ref()
    }

    /// Exact membership test against the applicable kinds.
    pub fn applies_to(&self, kind: ElementKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Resolve the default value for `kind`.
    ///
    /// A flat default is returned unchanged for any kind. A per-kind table
    /// is looked up; a missing entry is a malformed catalog entry and
    /// resolution fails.
    pub fn default_for(&self, kind: ElementKind) -> Result<&AttrValue, CatalogError> {
        self.default
            .for_kind(kind)
            .ok_or_else(|| CatalogError::MissingKindEntry {
                attribute: self.name.clone(),
                kind,
                table: CatalogTable::Default,
            })
    }

    /// Resolve the allowed-value list for `kind`.
    ///
    /// Returns `Ok(None)` when the attribute has no value list at all.
    /// A per-kind table missing the entry for `kind` fails, matching
    /// [`default_for`](Self::default_for).
    pub fn allowed_values_for(
        &self,
        kind: ElementKind,
    ) -> Result<Option<&[String]>, CatalogError> {
        match &self.values {
            None => Ok(None),
            Some(values) => values
                .for_kind(kind)
                .map(Some)
                .ok_or_else(|| CatalogError::MissingKindEntry {
                    attribute: self.name.clone(),
                    kind,
                    table: CatalogTable::AllowedValues,
                }),
        }
    }
}
