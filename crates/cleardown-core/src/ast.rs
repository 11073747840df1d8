//! Markdown element tree
//!
//! This module defines the element nodes a parsed markdown document is made
//! of. The tree is the common intermediate format shared by the flattener and
//! the serializer.

/// One node of a parsed markdown tree.
///
/// Every variant carries `text`, the content of the node after its markup
/// delimiters were stripped, and `children`, the elements found by re-parsing
/// `text`. A leaf keeps its content in `text` and an empty `children` list.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Plain text between markup occurrences
    Text { text: String, children: Vec<Element> },

    /// One `*`, `+` or `-` prefixed line
    UnorderedListItem { text: String, children: Vec<Element> },

    /// `#` prefixed line, level 1-6 from the number of hashes
    Header {
        level: u8,
        text: String,
        children: Vec<Element>,
    },

    /// `> ` prefixed line
    Quote { text: String, children: Vec<Element> },

    /// `*x*` or `_x_`
    Italic { text: String, children: Vec<Element> },

    /// `**x**` or `__x__`
    Bold { text: String, children: Vec<Element> },

    /// `~~x~~`
    Strike { text: String, children: Vec<Element> },

    /// Horizontal rule; always a leaf whose text is a single placeholder space
    Rule { text: String, children: Vec<Element> },

    /// `` `x` ``
    InlineCode { text: String, children: Vec<Element> },

    /// ```` ```x``` ````
    BlockCode { text: String, children: Vec<Element> },

    /// Numbered line; `order` keeps the literal numeral and dot, e.g. `10.`
    OrderedListItem {
        order: String,
        text: String,
        children: Vec<Element>,
    },

    /// `[title](url)`; `link` is the destination, `text` the title
    Link {
        link: String,
        text: String,
        children: Vec<Element>,
    },

    /// `![alt](url "title")`; `text` holds the title when one is present
    Image {
        url: String,
        alt: Option<String>,
        text: String,
        children: Vec<Element>,
    },
}

impl Element {
    /// Create a horizontal rule.
    ///
    /// Its text is a fixed single space so flattening needs no special case
    /// for the one kind that has no inner span.
    pub fn rule() -> Self {
        Element::Rule {
            text: " ".to_string(),
            children: Vec::new(),
        }
    }

    /// The delimiter-stripped content of this node, before any re-parsing.
    pub fn text(&self) -> &str {
        match self {
            Element::Text { text, .. }
            | Element::UnorderedListItem { text, .. }
            | Element::Header { text, .. }
            | Element::Quote { text, .. }
            | Element::Italic { text, .. }
            | Element::Bold { text, .. }
            | Element::Strike { text, .. }
            | Element::Rule { text, .. }
            | Element::InlineCode { text, .. }
            | Element::BlockCode { text, .. }
            | Element::OrderedListItem { text, .. }
            | Element::Link { text, .. }
            | Element::Image { text, .. } => text,
        }
    }

    /// The elements nested inside `text`, in document order.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Text { children, .. }
            | Element::UnorderedListItem { children, .. }
            | Element::Header { children, .. }
            | Element::Quote { children, .. }
            | Element::Italic { children, .. }
            | Element::Bold { children, .. }
            | Element::Strike { children, .. }
            | Element::Rule { children, .. }
            | Element::InlineCode { children, .. }
            | Element::BlockCode { children, .. }
            | Element::OrderedListItem { children, .. }
            | Element::Link { children, .. }
            | Element::Image { children, .. } => children,
        }
    }

    /// Replace this node's children, returning the node.
    pub fn with_children(mut self, new_children: Vec<Element>) -> Self {
        match &mut self {
            Element::Text { children, .. }
            | Element::UnorderedListItem { children, .. }
            | Element::Header { children, .. }
            | Element::Quote { children, .. }
            | Element::Italic { children, .. }
            | Element::Bold { children, .. }
            | Element::Strike { children, .. }
            | Element::Rule { children, .. }
            | Element::InlineCode { children, .. }
            | Element::BlockCode { children, .. }
            | Element::OrderedListItem { children, .. }
            | Element::Link { children, .. }
            | Element::Image { children, .. } => *children = new_children,
        }
        self
    }
}
