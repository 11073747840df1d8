//! Element tree serialization
//!
//! Writes an element tree back out as markdown text. Non-leaf nodes emit
//! their delimiters around the serialization of their children, so a tree
//! built from a canonical-delimiter document reproduces that document
//! exactly. Delimiter variants the tree does not record (`-` bullets, `_`
//! emphasis, the characters of a horizontal rule) come out as the configured
//! canonical forms instead.

use crate::ast::Element;
use crate::options::Options;

/// Serialize elements to markdown text.
pub fn serialize(elements: &[Element], options: &Options) -> String {
    let mut output = String::new();
    for element in elements {
        serialize_element(element, options, &mut output);
    }
    output
}

fn serialize_element(element: &Element, options: &Options, output: &mut String) {
    match element {
        Element::Text { text, .. } => output.push_str(text),
        Element::UnorderedListItem { .. } => {
            output.push(options.bullet_list_marker);
            output.push(' ');
            serialize_inner(element, options, output);
        }
        Element::Header { level, .. } => {
            for _ in 0..*level {
                output.push('#');
            }
            output.push(' ');
            serialize_inner(element, options, output);
        }
        Element::Quote { .. } => {
            output.push_str("> ");
            serialize_inner(element, options, output);
        }
        Element::Italic { .. } => {
            output.push(options.em_delimiter);
            serialize_inner(element, options, output);
            output.push(options.em_delimiter);
        }
        Element::Bold { .. } => {
            output.push_str(&options.strong_delimiter);
            serialize_inner(element, options, output);
            output.push_str(&options.strong_delimiter);
        }
        Element::Strike { .. } => {
            output.push_str("~~");
            serialize_inner(element, options, output);
            output.push_str("~~");
        }
        Element::Rule { .. } => output.push_str(&options.hr),
        Element::InlineCode { .. } => {
            output.push('`');
            serialize_inner(element, options, output);
            output.push('`');
        }
        Element::BlockCode { .. } => {
            output.push_str(&options.fence);
            serialize_inner(element, options, output);
            output.push_str(&options.fence);
        }
        Element::OrderedListItem { order, .. } => {
            output.push_str(order);
            output.push(' ');
            serialize_inner(element, options, output);
        }
        Element::Link { link, .. } => {
            output.push('[');
            serialize_inner(element, options, output);
            output.push_str("](");
            output.push_str(link);
            output.push(')');
        }
        Element::Image { url, alt, text, .. } => {
            output.push_str("![");
            if let Some(alt) = alt {
                output.push_str(alt);
            }
            output.push_str("](");
            output.push_str(url);
            // a parsed title lives in `text`; without one the url already
            // carries the full parenthesized capture
            if !text.is_empty() {
                output.push_str(" \"");
                serialize_inner(element, options, output);
                output.push('"');
            }
            output.push(')');
        }
    }
}

/// Append the content of a node: its children when present, its text
/// otherwise.
fn serialize_inner(element: &Element, options: &Options, output: &mut String) {
    if element.children().is_empty() {
        output.push_str(element.text());
    } else {
        for child in element.children() {
            serialize_element(child, options, output);
        }
    }
}
