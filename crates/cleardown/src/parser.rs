//! Build the element tree out of raw text.
//!
//! The builder walks a span left to right with a cursor: unmatched regions
//! become Text leaves and every match becomes an element of the matched
//! kind, its children parsed out of the delimiter-stripped inner span.
//! Re-parsing runs on an explicit frame stack with a configurable depth
//! cap instead of native recursion; markup nested past the cap reports
//! `NestingTooDeep`.

use cleardown_core::Element;

use crate::extract;
use crate::patterns::{Kind, Patterns};
use crate::service::CleardownOptions;
use crate::{CleardownError, Result};

/// One span being parsed. `finish` is the element waiting to adopt the
/// span's elements as children, or None for the document itself.
struct Frame<'a> {
    span: &'a str,
    cursor: usize,
    out: Vec<Element>,
    finish: Option<Element>,
}

/// What a match turns into: a finished leaf, or a stub element whose
/// children come from parsing an inner span.
enum Step<'a> {
    Leaf(Element),
    Recurse { inner: &'a str, stub: Element },
}

/// Parse a span of text into an ordered element sequence.
pub(crate) fn parse_span(
    text: &str,
    patterns: &Patterns,
    options: &CleardownOptions,
) -> Result<Vec<Element>> {
    let mut stack = vec![Frame {
        span: text,
        cursor: 0,
        out: Vec::new(),
        finish: None,
    }];

    loop {
        let top = stack.len() - 1;
        let span = stack[top].span;
        let cursor = stack[top].cursor;

        match patterns.find_next(span, cursor) {
            Some(found) => {
                if found.start > cursor {
                    stack[top].out.push(text_leaf(&span[cursor..found.start]));
                }
                stack[top].cursor = found.end;
                match strip_match(found.kind, &span[found.start..found.end]) {
                    Step::Leaf(element) => stack[top].out.push(element),
                    Step::Recurse { inner, stub } => {
                        if stack.len() > options.max_depth {
                            return Err(CleardownError::NestingTooDeep(options.max_depth));
                        }
                        stack.push(Frame {
                            span: inner,
                            cursor: 0,
                            out: Vec::new(),
                            finish: Some(stub),
                        });
                    }
                }
            }
            None => {
                if cursor < span.len() {
                    stack[top].out.push(text_leaf(&span[cursor..]));
                }
                let done = stack.remove(top);
                match done.finish {
                    None => return Ok(done.out),
                    Some(stub) => {
                        let parent = stack.len() - 1;
                        stack[parent].out.push(stub.with_children(done.out));
                    }
                }
            }
        }
    }
}

/// Turn one match into its element, delimiters stripped.
///
/// Every kind except Rule parses an inner span for children. Links parse
/// their label, images their quoted title; a destination is never parsed.
fn strip_match(kind: Kind, matched: &str) -> Step<'_> {
    match kind {
        Kind::UnorderedListItem => {
            let inner = &matched[2..];
            Step::Recurse {
                inner,
                stub: Element::UnorderedListItem {
                    text: inner.to_string(),
                    children: Vec::new(),
                },
            }
        }

        Kind::Header => {
            let level = extract::header_level(matched);
            let inner = &matched[level as usize + 1..];
            Step::Recurse {
                inner,
                stub: Element::Header {
                    level,
                    text: inner.to_string(),
                    children: Vec::new(),
                },
            }
        }

        Kind::Quote => {
            let inner = &matched[2..];
            Step::Recurse {
                inner,
                stub: Element::Quote {
                    text: inner.to_string(),
                    children: Vec::new(),
                },
            }
        }

        Kind::Italic => {
            let inner = &matched[1..matched.len() - 1];
            Step::Recurse {
                inner,
                stub: Element::Italic {
                    text: inner.to_string(),
                    children: Vec::new(),
                },
            }
        }

        Kind::Bold => {
            let inner = &matched[2..matched.len() - 2];
            Step::Recurse {
                inner,
                stub: Element::Bold {
                    text: inner.to_string(),
                    children: Vec::new(),
                },
            }
        }

        Kind::Strike => {
            let inner = &matched[2..matched.len() - 2];
            Step::Recurse {
                inner,
                stub: Element::Strike {
                    text: inner.to_string(),
                    children: Vec::new(),
                },
            }
        }

        Kind::Rule => Step::Leaf(Element::rule()),

        Kind::InlineCode => {
            let inner = &matched[1..matched.len() - 1];
            Step::Recurse {
                inner,
                stub: Element::InlineCode {
                    text: inner.to_string(),
                    children: Vec::new(),
                },
            }
        }

        Kind::BlockCode => {
            let inner = &matched[3..matched.len() - 3];
            Step::Recurse {
                inner,
                stub: Element::BlockCode {
                    text: inner.to_string(),
                    children: Vec::new(),
                },
            }
        }

        Kind::OrderedListItem => match extract::ordered_marker(matched) {
            Some(marker) => {
                let inner = &matched[marker.len() + 1..];
                Step::Recurse {
                    inner,
                    stub: Element::OrderedListItem {
                        order: marker.to_string(),
                        text: inner.to_string(),
                        children: Vec::new(),
                    },
                }
            }
            None => Step::Leaf(text_leaf(matched)),
        },

        Kind::Image => match extract::image_parts(matched) {
            Some(parts) => {
                let alt = if parts.alt.trim().is_empty() {
                    None
                } else {
                    Some(parts.alt.to_string())
                };
                match parts.title {
                    Some(title) => Step::Recurse {
                        inner: title,
                        stub: Element::Image {
                            text: title.to_string(),
                            children: Vec::new(),
                            url: parts.url.to_string(),
                            alt,
                        },
                    },
                    None => Step::Leaf(Element::Image {
                        text: String::new(),
                        children: Vec::new(),
                        url: parts.url.to_string(),
                        alt,
                    }),
                }
            }
            None => Step::Leaf(text_leaf(matched)),
        },

        Kind::Link => match extract::link_parts(matched) {
            Some((label, destination)) => Step::Recurse {
                inner: label,
                stub: Element::Link {
                    text: label.to_string(),
                    children: Vec::new(),
                    link: destination.to_string(),
                },
            },
            None => Step::Leaf(text_leaf(matched)),
        },
    }
}

fn text_leaf(text: &str) -> Element {
    Element::Text {
        text: text.to_string(),
        children: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(text: &str) -> Vec<Element> {
        parse_span(text, &Patterns::new(), &CleardownOptions::default()).unwrap()
    }

    fn text(s: &str) -> Element {
        Element::Text {
            text: s.to_string(),
            children: Vec::new(),
        }
    }

    #[test]
    fn test_empty_input_parses_to_nothing() {
        assert_eq!(parse(""), vec![]);
    }

    #[test]
    fn test_plain_text_is_a_single_leaf() {
        assert_eq!(parse("just words"), vec![text("just words")]);
    }

    #[test]
    fn test_header_tree() {
        assert_eq!(
            parse("# Header"),
            vec![Element::Header {
                level: 1,
                text: "Header".to_string(),
                children: vec![text("Header")],
            }]
        );
    }

    #[test]
    fn test_bold_with_nested_italic() {
        assert_eq!(
            parse("**bold _and italic_**"),
            vec![Element::Bold {
                text: "bold _and italic_".to_string(),
                children: vec![
                    text("bold "),
                    Element::Italic {
                        text: "and italic".to_string(),
                        children: vec![text("and italic")],
                    },
                ],
            }]
        );
    }

    #[test]
    fn test_quote_tree() {
        assert_eq!(
            parse("> wise words"),
            vec![Element::Quote {
                text: "wise words".to_string(),
                children: vec![text("wise words")],
            }]
        );
    }

    #[test]
    fn test_ordered_item_keeps_its_marker() {
        assert_eq!(
            parse("10. item"),
            vec![Element::OrderedListItem {
                order: "10.".to_string(),
                text: "item".to_string(),
                children: vec![text("item")],
            }]
        );
    }

    #[test]
    fn test_horizontal_rule_is_a_leaf() {
        assert_eq!(parse("---"), vec![Element::rule()]);
    }

    #[test]
    fn test_inline_code_content_is_parsed() {
        assert_eq!(
            parse("`*x*`"),
            vec![Element::InlineCode {
                text: "*x*".to_string(),
                children: vec![Element::Italic {
                    text: "x".to_string(),
                    children: vec![text("x")],
                }],
            }]
        );
    }

    #[test]
    fn test_strike_tree() {
        assert_eq!(
            parse("~~gone~~"),
            vec![Element::Strike {
                text: "gone".to_string(),
                children: vec![text("gone")],
            }]
        );
    }

    #[test]
    fn test_unclosed_delimiters_degrade_to_text() {
        assert_eq!(parse("**open"), vec![text("**open")]);
        assert_eq!(parse("[a] (u)"), vec![text("[a] (u)")]);
    }

    #[test]
    fn test_empty_delimiter_pair_keeps_empty_children() {
        assert_eq!(
            parse("****"),
            vec![Element::Bold {
                text: String::new(),
                children: vec![],
            }]
        );
    }

    #[test]
    fn test_image_without_title_is_a_leaf() {
        assert_eq!(
            parse("![alt](http://x.png)"),
            vec![Element::Image {
                text: String::new(),
                children: vec![],
                url: "http://x.png".to_string(),
                alt: Some("alt".to_string()),
            }]
        );
    }

    #[test]
    fn test_image_blank_alt_is_absent() {
        assert_eq!(
            parse("![](u)"),
            vec![Element::Image {
                text: String::new(),
                children: vec![],
                url: "u".to_string(),
                alt: None,
            }]
        );
    }

    #[test]
    fn test_image_title_is_parsed_for_children() {
        assert_eq!(
            parse("![a](u \"big *day*\")"),
            vec![Element::Image {
                text: "big *day*".to_string(),
                children: vec![
                    text("big "),
                    Element::Italic {
                        text: "day".to_string(),
                        children: vec![text("day")],
                    },
                ],
                url: "u".to_string(),
                alt: Some("a".to_string()),
            }]
        );
    }

    #[test]
    fn test_link_children_come_from_the_label() {
        assert_eq!(
            parse("[title](http://x.com)"),
            vec![Element::Link {
                text: "title".to_string(),
                children: vec![text("title")],
                link: "http://x.com".to_string(),
            }]
        );
    }

    #[test]
    fn test_document_with_multiple_lines() {
        assert_eq!(
            parse("# A\nplain\n* item"),
            vec![
                Element::Header {
                    level: 1,
                    text: "A".to_string(),
                    children: vec![text("A")],
                },
                text("\nplain\n"),
                Element::UnorderedListItem {
                    text: "item".to_string(),
                    children: vec![text("item")],
                },
            ]
        );
    }

    #[test]
    fn test_nesting_depth_limit() {
        let patterns = Patterns::new();
        let options = CleardownOptions { max_depth: 1 };
        assert!(parse_span("# h", &patterns, &options).is_ok());

        let error = parse_span("**_x_**", &patterns, &options).unwrap_err();
        assert!(matches!(error, CleardownError::NestingTooDeep(1)));
    }
}
