//! Pattern system for markup recognition.

mod markdown;
mod pattern;

pub use markdown::markdown_patterns;
pub use pattern::{Kind, Match, MatcherFn, Pattern};

/// Ordered collection of patterns. Earlier entries win ties.
pub struct Patterns {
    patterns: Vec<Pattern>,
}

impl Patterns {
    /// Create a new Patterns instance with the markdown patterns
    pub fn new() -> Self {
        Self {
            patterns: markdown_patterns(),
        }
    }

    /// Create a Patterns instance from a custom pattern list
    pub fn with_patterns(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    /// Find the next match at or after `from`.
    ///
    /// Every pattern reports its leftmost occurrence; the earliest start
    /// wins and the pattern order breaks ties between equal starts.
    pub fn find_next(&self, text: &str, from: usize) -> Option<Match> {
        let mut best: Option<Match> = None;
        for pattern in &self.patterns {
            if let Some((start, end)) = pattern.find_from(text, from) {
                let better = match &best {
                    Some(found) => start < found.start,
                    None => true,
                };
                if better {
                    best = Some(Match {
                        kind: pattern.kind(),
                        start,
                        end,
                    });
                    // nothing can start before the scan position
                    if start == from {
                        break;
                    }
                }
            }
        }
        best
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::new()
    }
}
