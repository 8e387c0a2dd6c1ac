//! Error types for catalog resolution.
//!
//! There is exactly one runtime failure mode in this crate: a per-kind
//! default or allowed-value table that does not cover a kind the attribute
//! claims to be applicable to. That is a catalog-authoring bug, so
//! resolution fails fast instead of substituting a fallback.

use std::fmt;

use thiserror::Error;

use crate::kind::ElementKind;

/// Which per-kind table of an attribute definition was malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogTable {
    Default,
    AllowedValues,
}

impl fmt::Display for CatalogTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::AllowedValues => f.write_str("allowed-value"),
        }
    }
}

/// The error type for catalog resolution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// A per-kind mapping is missing the entry for a requested kind.
    #[error("attribute `{attribute}` has no {table} entry for element kind `{kind}`")]
    MissingKindEntry {
        attribute: String,
        kind: ElementKind,
        table: CatalogTable,
    },
}
