//! # cleardown
//!
//! Parse markdown-like markup into an element tree, and clear it back down
//! to plain text.
//!
//! ## Design
//!
//! - **Prioritized pattern table**: a single scan finds the leftmost markup
//!   occurrence across all rules; table order breaks same-start ties
//! - **Stack driven tree builder**: inner spans are re-parsed without native
//!   recursion, guarded by a configurable nesting depth limit
//! - **Permissive parsing**: malformed markup never fails, it simply stays
//!   plain text
//!
//! ## Example
//!
//! ```rust
//! use cleardown::CleardownService;
//!
//! let service = CleardownService::new();
//!
//! let cleared = service.clear("**bold _and italic_**").unwrap();
//! assert_eq!(cleared.as_deref(), Some("bold and italic"));
//! ```

mod extract;
mod parser;
pub mod patterns;
mod service;

pub use cleardown_core::{flatten, indexes_of, serialize, Element, Options};
pub use patterns::{Kind, Match, Pattern, Patterns};
pub use service::{CleardownOptions, CleardownService};

/// Error type for cleardown operations
#[derive(Debug, thiserror::Error)]
pub enum CleardownError {
    #[error("Markup nesting exceeded the depth limit of {0}")]
    NestingTooDeep(usize),
}

pub type Result<T> = std::result::Result<T, CleardownError>;
