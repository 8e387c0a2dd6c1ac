//! The attribute catalog: construction, builtin data and filtering.
//!
//! The catalog is built once at process start and never mutated. All query
//! operations borrow from it, so it is safe to share behind an `Arc` or a
//! `static` without synchronization.
//!
//! [`AttributeCatalog::builtin`] is the single source of truth for the
//! shipped attribute set, transcribed from the attribute tables on
//! graphviz.org. Tests that need an isolated catalog construct one with
//! [`AttributeCatalog::new`] instead of going through the builtin data.

use indexmap::IndexMap;
use log::debug;

use crate::attribute::{
    AttributeDefinition, DefaultValue, Engine, OutputFormat, Presentation, Widget,
};
use crate::kind::ElementKind;
use crate::reference::doc_reference;
use crate::value::AttrValue;

/// An immutable, insertion-ordered registry of attribute definitions.
#[derive(Debug, Clone, Default)]
pub struct AttributeCatalog {
    attributes: IndexMap<String, AttributeDefinition>,
}

impl AttributeCatalog {
    /// Build a catalog from the given definitions, preserving their order.
    ///
    /// # Panics
    ///
    /// Panics if two definitions share a name; attribute names are unique
    /// across the whole catalog.
    pub fn new(definitions: impl IntoIterator<Item = AttributeDefinition>) -> Self {
        let mut attributes = IndexMap::new();
        for definition in definitions {
            let name = definition.name().to_string();
            let previous = attributes.insert(name.clone(), definition);
            assert!(
                previous.is_none(),
                "duplicate attribute definition `{name}`"
            );
        }
        debug!(count = attributes.len(); "Built attribute catalog");
        Self { attributes }
    }

    /// The full catalog, in insertion order.
    pub fn attributes(&self) -> &IndexMap<String, AttributeDefinition> {
        &self.attributes
    }

    /// Look up a single definition by name.
    pub fn get(&self, name: &str) -> Option<&AttributeDefinition> {
        self.attributes.get(name)
    }

    /// The subset of attributes applicable to `kind`, in catalog order.
    ///
    /// Membership is exact; a kind no attribute lists yields an empty map,
    /// not an error.
    pub fn for_kind(&self, kind: ElementKind) -> IndexMap<&str, &AttributeDefinition> {
        self.attributes
            .iter()
            .filter(|(_, definition)| definition.applies_to(kind))
            .map(|(name, definition)| (name.as_str(), definition))
            .collect()
    }

    /// The builtin Graphviz attribute catalog.
    ///
    /// Attribute order follows the upstream documentation tables; the
    /// settings snapshot and form projections preserve it.
    pub fn builtin() -> Self {
        use ElementKind::{Cluster, Edge, Graph, Node};

        let arrow_shapes = [
            "normal", "inv", "dot", "invdot", "odot", "invodot", "none", "tee", "empty",
            "invempty", "diamond", "odiamond", "ediamond", "crow", "box", "obox", "open",
            "halfopen", "vee",
        ];
        let edge_styles = ["solid", "dashed", "dotted", "bold"];
        let shape_styles = [
            "solid", "dashed", "dotted", "bold", "rounded", "diagonals", "filled", "striped",
            "wedged",
        ];

        Self::new([
            AttributeDefinition::new("damping", [Graph], 0.99)
                .with_engines([Engine::Neato])
                .with_presentation(Presentation::new(
                    Widget::TextField,
                    "Damping",
                    doc_reference("Damping", "attrs#dDamping"),
                )),
            // dir has no form widget; it is set by the edge-drawing layer,
            // not edited independently.
            AttributeDefinition::new("dir", [Node], "forward")
                .with_values(["forward", "back", "both", "none"]),
            AttributeDefinition::new("area", [Node, Cluster], 1.0).with_presentation(
                Presentation::new(
                    Widget::TextField,
                    "Area",
                    doc_reference("area", "attrs#darea"),
                ),
            ),
            AttributeDefinition::new("compound", [Graph], false).with_presentation(
                Presentation::new(
                    Widget::Checkbox,
                    "Compound",
                    doc_reference("compound", "attrs#dcompound"),
                ),
            ),
            AttributeDefinition::new("color", [Edge, Node, Cluster], "black")
                .with_presentation(Presentation::new(
                    Widget::TextField,
                    "Color",
                    doc_reference("color", "attrs#dcolor"),
                )),
            AttributeDefinition::new("arrowhead", [Edge], "normal")
                .with_values(arrow_shapes)
                .with_presentation(Presentation::new(
                    Widget::Select,
                    "Arrowhead",
                    doc_reference("arrowhead", "attrs#darrowhead"),
                )),
            AttributeDefinition::new("URL", [Edge, Node, Graph, Cluster], "")
                .with_formats([OutputFormat::Svg, OutputFormat::Map, OutputFormat::Postscript])
                .with_presentation(Presentation::new(
                    Widget::TextField,
                    "URL",
                    doc_reference("URL", "attrs#dURL"),
                )),
            AttributeDefinition::with_default(
                "fillcolor",
                [Edge, Node, Cluster],
                DefaultValue::PerKind(IndexMap::from([
                    (Edge, AttrValue::from("lightgrey")),
                    (Node, AttrValue::from("lightgrey")),
                    (Cluster, AttrValue::from("black")),
                ])),
            )
            .with_presentation(Presentation::new(
                Widget::TextField,
                "Fill color",
                doc_reference("Color", "attrs#dfillcolor"),
            )),
            AttributeDefinition::with_default(
                "style",
                [Edge, Node, Cluster],
                DefaultValue::PerKind(IndexMap::from([
                    (Edge, AttrValue::from("lightgrey")),
                    (Node, AttrValue::from("lightgrey")),
                    (Cluster, AttrValue::from("black")),
                ])),
            )
            .with_values_per_kind(IndexMap::from([
                (Edge, to_strings(edge_styles)),
                (Node, to_strings(shape_styles)),
                (Cluster, to_strings(shape_styles)),
            ]))
            .with_presentation(Presentation::new(
                Widget::Select,
                "Style",
                doc_reference("Color", "attrs#dstyle"),
            )),
            AttributeDefinition::new("label", [Edge, Node, Graph, Cluster], "")
                .with_presentation(Presentation::new(
                    Widget::TextField,
                    "Label",
                    doc_reference("label", "attrs#dlabel"),
                )),
            AttributeDefinition::new("fontname", [Edge, Node, Graph, Cluster], "Times-Roman")
                .with_presentation(Presentation::new(
                    Widget::TextField,
                    "Font name",
                    doc_reference("fontname", "attrs#dfontname"),
                )),
            AttributeDefinition::new("fontsize", [Edge, Node, Graph, Cluster], 14.0)
                .with_presentation(Presentation::new(
                    Widget::TextField,
                    "Font size",
                    doc_reference("fontsize", "attrs#dfontsize"),
                )),
            AttributeDefinition::new("bgcolor", [Graph, Cluster], "").with_presentation(
                Presentation::new(
                    Widget::TextField,
                    "Background color",
                    doc_reference("bgcolor", "attrs#dbgcolor"),
                ),
            ),
            AttributeDefinition::new("shape", [Node], "ellipse")
                .with_values([
                    "box", "polygon", "ellipse", "oval", "circle", "point", "egg", "triangle",
                    "plaintext", "diamond", "trapezium", "parallelogram", "house", "hexagon",
                    "octagon", "note", "tab", "folder", "component", "record",
                ])
                .with_presentation(Presentation::new(
                    Widget::Select,
                    "Shape",
                    doc_reference("shape", "attrs#dshape"),
                )),
            AttributeDefinition::new("rankdir", [Graph], "TB")
                .with_engines([Engine::Dot])
                .with_values(["TB", "LR", "BT", "RL"])
                .with_presentation(Presentation::new(
                    Widget::Select,
                    "Rank direction",
                    doc_reference("rankdir", "attrs#drankdir"),
                )),
            AttributeDefinition::new("splines", [Graph], "")
                .with_values(["none", "line", "polyline", "curved", "ortho", "spline"])
                .with_presentation(Presentation::new(
                    Widget::Select,
                    "Splines",
                    doc_reference("splines", "attrs#dsplines"),
                )),
            AttributeDefinition::new("overlap", [Graph], "true")
                .with_engines([Engine::Neato, Engine::Fdp, Engine::Sfdp])
                .with_values([
                    "true", "false", "scale", "scalexy", "compress", "vpsc", "ortho",
                ])
                .with_presentation(Presentation::new(
                    Widget::Select,
                    "Overlap",
                    doc_reference("overlap", "attrs#doverlap"),
                )),
            AttributeDefinition::new("penwidth", [Edge, Node, Cluster], 1.0)
                .with_presentation(Presentation::new(
                    Widget::TextField,
                    "Pen width",
                    doc_reference("penwidth", "attrs#dpenwidth"),
                )),
            AttributeDefinition::new("arrowsize", [Edge], 1.0).with_presentation(
                Presentation::new(
                    Widget::TextField,
                    "Arrow size",
                    doc_reference("arrowsize", "attrs#darrowsize"),
                ),
            ),
            AttributeDefinition::new("arrowtail", [Edge], "normal")
                .with_values(arrow_shapes)
                .with_presentation(Presentation::new(
                    Widget::Select,
                    "Arrowtail",
                    doc_reference("arrowtail", "attrs#darrowtail"),
                )),
            AttributeDefinition::new("nodesep", [Graph], 0.25)
                .with_engines([Engine::Dot])
                .with_presentation(Presentation::new(
                    Widget::TextField,
                    "Node separation",
                    doc_reference("nodesep", "attrs#dnodesep"),
                )),
            AttributeDefinition::new("ranksep", [Graph], 0.5).with_presentation(
                Presentation::new(
                    Widget::TextField,
                    "Rank separation",
                    doc_reference("ranksep", "attrs#dranksep"),
                ),
            ),
        ])
    }
}

fn to_strings<const N: usize>(values: [&str; N]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
