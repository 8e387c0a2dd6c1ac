//! Default settings snapshot.
//!
//! The snapshot seeds a fresh configuration for the external rendering
//! layer: every attribute applicable to every element kind, resolved to its
//! default, plus the two top-level choices that are independent of the
//! catalog (graph type and output format). It is recomputed on demand; the
//! cross-product is bounded by four kinds times a few dozen attributes, so
//! caching would buy nothing.

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::catalog::AttributeCatalog;
use crate::error::CatalogError;
use crate::kind::ElementKind;
use crate::value::AttrValue;

/// The graph type every fresh configuration starts with.
pub const DEFAULT_GRAPH_TYPE: &str = "digraph";

/// The output format every fresh configuration starts with. Text output
/// always works, regardless of how Graphviz was built.
pub const DEFAULT_OUTPUT_FORMAT: &str = "text";

/// A full default-settings snapshot across all element kinds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefaultSettings {
    /// Graph type, fixed to [`DEFAULT_GRAPH_TYPE`].
    pub graph_type: String,
    /// Output format, fixed to [`DEFAULT_OUTPUT_FORMAT`].
    pub output: String,
    /// Resolved defaults keyed by kind identifier, then attribute name.
    #[serde(flatten)]
    pub elements: IndexMap<String, IndexMap<String, AttrValue>>,
}

impl DefaultSettings {
    /// Compute the snapshot for `catalog`.
    ///
    /// Fails only on a malformed catalog entry (a per-kind default table
    /// missing an entry for an applicable kind).
    pub fn from_catalog(catalog: &AttributeCatalog) -> Result<Self, CatalogError> {
        let mut elements = IndexMap::new();
        for kind in ElementKind::all() {
            let mut defaults = IndexMap::new();
            for (name, definition) in catalog.for_kind(kind) {
                defaults.insert(name.to_string(), definition.default_for(kind)?.clone());
            }
            elements.insert(kind.id().to_string(), defaults);
        }
        debug!(kinds = elements.len(); "Computed default settings snapshot");
        Ok(Self {
            graph_type: DEFAULT_GRAPH_TYPE.to_string(),
            output: DEFAULT_OUTPUT_FORMAT.to_string(),
            elements,
        })
    }

    /// The resolved defaults for one kind, keyed by attribute name.
    pub fn for_kind(&self, kind: ElementKind) -> Option<&IndexMap<String, AttrValue>> {
        self.elements.get(kind.id())
    }
}
