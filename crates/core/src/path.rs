//! Ancestor-chain path labels for matched elements.

use crate::parse::Element;

/// Build the diagnostic path label for an element.
///
/// Walks from the element up through its ancestors to the root element.
/// Each level emits the lowercase tag name, suffixed with `.'<class>'`
/// when a class attribute is present (the raw, unsplit attribute value,
/// single-quoted). Levels are joined with `" > "`, element first, root
/// last.
///
/// The label identifies a match for a human reader; it is not a selector
/// and offers no re-lookup guarantee. Indistinguishable siblings produce
/// duplicate labels, which is accepted.
///
/// # Example
///
/// ```rust
/// use similis_core::{node_path, parse::Document};
///
/// let doc = Document::parse_fragment(r#"<div class="y"><a class="x"></a></div>"#).unwrap();
/// let anchor = doc.select("a").unwrap()[0];
///
/// assert_eq!(node_path(&anchor), "a.'x' > div.'y' > html");
/// ```
pub fn node_path(element: &Element<'_>) -> String {
    let mut segments = Vec::new();
    let mut current = Some(*element);

    while let Some(el) = current {
        let segment = match el.attr("class") {
            Some(class) => format!("{}.'{}'", el.tag_name(), class),
            None => el.tag_name(),
        };
        segments.push(segment);
        current = el.parent();
    }

    segments.join(" > ")
}
