//! Tree flattening
//!
//! Reduces a parsed element tree to plain text with every markup delimiter
//! dropped. The counterpart of parsing: where the parser peels delimiters off
//! into structure, flattening discards the structure and keeps the words.

use crate::ast::Element;

/// Flatten parsed elements into plain text.
///
/// Returns `None` for an empty element sequence, so callers can tell "no
/// markdown content at all" apart from "content that renders to an empty
/// string".
pub fn flatten(elements: &[Element]) -> Option<String> {
    if elements.is_empty() {
        return None;
    }
    let mut output = String::new();
    for element in elements {
        render(element, &mut output);
    }
    Some(output)
}

/// Append the plain text of one element to `output`.
///
/// A node with children renders as the concatenation of its children, which
/// together re-parse exactly the node's `text` span. A leaf renders `text`
/// as is; for a rule that is the placeholder space.
fn render(element: &Element, output: &mut String) {
    if element.children().is_empty() {
        output.push_str(element.text());
    } else {
        for child in element.children() {
            render(child, output);
        }
    }
}
