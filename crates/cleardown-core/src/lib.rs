//! cleardown-core - markdown element tree, flattening and serialization
//!
//! This crate provides the core data structures of a parsed markdown
//! document and the two consumers that reduce a tree back to text. It is
//! used by `cleardown`, which builds the trees.
//!
//! # Architecture
//!
//! ```text
//!                             ┌──────────────┐ ──flatten───▶ Plain Text
//! Markdown String ──parse───▶ │ Element Tree │
//!                             └──────────────┘ ──serialize─▶ Markdown String
//! ```
//!
//! # Example
//!
//! ```rust
//! use cleardown_core::{flatten, serialize, Element, Options};
//!
//! let elements = vec![Element::Header {
//!     level: 1,
//!     text: "Hello World".to_string(),
//!     children: vec![Element::Text {
//!         text: "Hello World".to_string(),
//!         children: Vec::new(),
//!     }],
//! }];
//!
//! assert_eq!(flatten(&elements), Some("Hello World".to_string()));
//! assert_eq!(serialize(&elements, &Options::default()), "# Hello World");
//! ```

mod ast;
mod flatten;
mod options;
mod search;
mod serialize;

pub use ast::Element;
pub use flatten::flatten;
pub use options::Options;
pub use search::indexes_of;
pub use serialize::serialize;
