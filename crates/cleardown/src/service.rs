//! CleardownService - the main entry point for parsing and clearing markup.

use cleardown_core::{flatten, Element};

use crate::parser::parse_span;
use crate::patterns::Patterns;
use crate::Result;

/// Options controlling the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleardownOptions {
    /// Maximum markup nesting depth before parsing fails
    pub max_depth: usize,
}

impl Default for CleardownOptions {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

/// The main service for parsing markup documents into element trees
pub struct CleardownService {
    options: CleardownOptions,
    patterns: Patterns,
}

impl CleardownService {
    /// Create a new CleardownService with default options
    pub fn new() -> Self {
        Self {
            options: CleardownOptions::default(),
            patterns: Patterns::new(),
        }
    }

    /// Create a CleardownService with custom options
    pub fn with_options(options: CleardownOptions) -> Self {
        Self {
            options,
            patterns: Patterns::new(),
        }
    }

    /// Parse a document into its ordered top-level elements
    pub fn parse(&self, document: &str) -> Result<Vec<Element>> {
        parse_span(document, &self.patterns, &self.options)
    }

    /// Parse a document and clear it down to plain text.
    ///
    /// Returns None for a document that parses to nothing at all; an empty
    /// string result is still Some.
    pub fn clear(&self, document: &str) -> Result<Option<String>> {
        let elements = self.parse(document)?;
        Ok(flatten(&elements))
    }

    /// Get the current options
    pub fn options(&self) -> &CleardownOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut CleardownOptions {
        &mut self.options
    }
}

impl Default for CleardownService {
    fn default() -> Self {
        Self::new()
    }
}
