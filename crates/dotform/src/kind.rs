//! The fixed set of Graphviz element kinds.
//!
//! Every attribute in the catalog is applicable to one or more of these four
//! kinds. The set is closed: Graphviz itself knows no other attachment
//! points, so the kinds are modeled as an enum rather than open strings.

use std::fmt;

use serde::Serialize;

/// A structural category a Graphviz attribute may be attached to.
///
/// The variants are ordered the way the upstream attribute tables order
/// them: graph, cluster, node, edge. [`ElementKind::all`] returns them in
/// that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// The whole graph (top-level defaults).
    Graph,
    /// A cluster subgraph.
    Cluster,
    /// A node.
    Node,
    /// An edge.
    Edge,
}

impl ElementKind {
    /// All four kinds in their stable, documented order.
    pub const fn all() -> [ElementKind; 4] {
        [Self::Graph, Self::Cluster, Self::Node, Self::Edge]
    }

    /// The one-letter code used by the compact catalog notation (`G`, `C`,
    /// `N`, `E`).
    pub const fn code(self) -> &'static str {
        match self {
            Self::Graph => "G",
            Self::Cluster => "C",
            Self::Node => "N",
            Self::Edge => "E",
        }
    }

    /// The machine identifier used as a settings key.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Graph => "graph",
            Self::Cluster => "cluster",
            Self::Node => "node",
            Self::Edge => "edge",
        }
    }

    /// Human-readable title for form section headings.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Graph => "Graph specific default settings.",
            Self::Cluster => "Cluster",
            Self::Node => "Node",
            Self::Edge => "Edge",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
