//! Pattern and match types for markdown scanning.

/// The markup kind a pattern recognizes.
///
/// Variants are listed in table priority order; the scan itself ranks
/// candidates by position first and consults this order only to break ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    UnorderedListItem,
    Header,
    Quote,
    Italic,
    Bold,
    Strike,
    Rule,
    InlineCode,
    BlockCode,
    OrderedListItem,
    Image,
    Link,
}

/// One markup occurrence found by a scan: which kind matched and the byte
/// range of the whole match including its delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub kind: Kind,
    pub start: usize,
    pub end: usize,
}

/// Type alias for matcher functions: report the byte range of a pattern's
/// leftmost occurrence at or after a position.
pub type MatcherFn = Box<dyn Fn(&str, usize) -> Option<(usize, usize)> + Send + Sync>;

/// A pattern pairs an element kind with the matcher recognizing its syntax.
pub struct Pattern {
    kind: Kind,
    matcher: MatcherFn,
}

impl Pattern {
    /// Create a new pattern
    pub fn new<F>(kind: Kind, matcher: F) -> Self
    where
        F: Fn(&str, usize) -> Option<(usize, usize)> + Send + Sync + 'static,
    {
        Self {
            kind,
            matcher: Box::new(matcher),
        }
    }

    /// The kind this pattern produces
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Find the leftmost occurrence of this pattern at or after `from`.
    pub fn find_from(&self, text: &str, from: usize) -> Option<(usize, usize)> {
        (self.matcher)(text, from)
    }
}
