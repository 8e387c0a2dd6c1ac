//! dotform - A static Graphviz attribute registry
//!
//! This library describes Graphviz attributes and their metadata: which
//! element kinds (graph, cluster, node, edge) an attribute applies to,
//! which layout engines and output formats it is restricted to, its default
//! value and allowed values (flat or per-kind), and the presentation
//! metadata an external form layer needs to render it as an editable field.
//!
//! It provides:
//!
//! - **Kinds**: The four fixed element kinds ([`kind::ElementKind`])
//! - **Catalog**: The attribute registry and its builtin Graphviz data
//!   ([`catalog::AttributeCatalog`])
//! - **Fields**: Form-field projection ([`fields::FieldDescriptor`])
//! - **Settings**: The default-settings snapshot
//!   ([`settings::DefaultSettings`])
//!
//! The catalog is constructed once and never mutated; every query is a
//! pure, bounded computation, safe to call from any thread.
//!
//! # Examples
//!
//! ```
//! use dotform::{AttributeCatalog, DefaultSettings, ElementKind};
//!
//! let catalog = AttributeCatalog::builtin();
//!
//! // Which attributes can be set on an edge?
//! let edge_attributes = catalog.for_kind(ElementKind::Edge);
//! assert!(edge_attributes.contains_key("arrowhead"));
//!
//! // Build the form fields for the node settings section.
//! let fields = catalog.fields_for(ElementKind::Node).expect("valid catalog");
//! assert!(fields.contains_key("color"));
//!
//! // Seed a fresh configuration.
//! let settings = DefaultSettings::from_catalog(&catalog).expect("valid catalog");
//! assert_eq!(settings.graph_type, "digraph");
//! ```

pub mod attribute;
pub mod catalog;
pub mod error;
pub mod fields;
pub mod kind;
pub mod reference;
pub mod settings;
pub mod value;

pub use attribute::{
    AllowedValues, AttributeDefinition, DefaultValue, Engine, OutputFormat, Presentation,
    Widget,
};
pub use catalog::AttributeCatalog;
pub use error::{CatalogError, CatalogTable};
pub use fields::{ChoiceOption, FieldDescriptor};
pub use kind::ElementKind;
pub use settings::{DEFAULT_GRAPH_TYPE, DEFAULT_OUTPUT_FORMAT, DefaultSettings};
pub use value::AttrValue;
