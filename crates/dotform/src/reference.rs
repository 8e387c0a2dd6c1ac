//! Documentation reference helper.

/// Base URL of the upstream Graphviz documentation.
const DOC_BASE_URL: &str = "http://www.graphviz.org/content/";

/// Format a citation pointing at the upstream attribute documentation.
///
/// `path` is a location under the documentation root, e.g. `attrs#dDamping`.
/// The path is not validated and no network access happens; the result is a
/// display string for embedding in a field description.
///
/// ```
/// use dotform::reference::doc_reference;
///
/// assert_eq!(
///     doc_reference("Damping", "attrs#dDamping"),
///     "See <a href=\"http://www.graphviz.org/content/attrs#dDamping\">Damping</a> \
///      for more documentation.",
/// );
/// ```
pub fn doc_reference(label: &str, path: &str) -> String {
    format!("See <a href=\"{DOC_BASE_URL}{path}\">{label}</a> for more documentation.")
}
