//! # etchr
//!
//! The markdown section model behind the Etchr README editor.
//!
//! A README is treated as an ordered list of heading-rooted sections that
//! can be reordered, renamed, and edited independently, then recompiled
//! into a flat document. Parsing, compiling, and every mutation are pure,
//! synchronous, in-memory operations; fetching files and publishing the
//! result belong to the hosting application.
//!
//! ## Features
//!
//! - Parse a markdown document into level 1-3 heading sections
//! - Fenced code blocks and inline backticks never split a section
//! - Reorder, rename, delete, and edit sections with stable ids
//! - Section bodies stay heading-free by construction
//! - Deterministic recompilation with a round-trip guarantee
//! - Jupyter notebook flattening and token estimation for prompt budgeting
//!
//! ## Quick Start
//!
//! ```
//! use etchr::Document;
//!
//! let mut doc = Document::parse("# Intro\nhello\n\n## Usage\nrun it\n");
//! assert_eq!(doc.len(), 2);
//!
//! // Move "Usage" to the front; ids stay stable, order is renumbered.
//! doc.reorder(1, 0).unwrap();
//! assert_eq!(doc.compile(), "## Usage\nrun it\n\n# Intro\nhello");
//! ```
//!
//! ## Editing Sections
//!
//! Mutations go through [`Document`] by section id:
//!
//! ```
//! use etchr::{Document, HeadingLevel};
//!
//! let mut doc = Document::parse("# Notes\nold body");
//! let id = doc.sections()[0].id;
//!
//! doc.rename(id, HeadingLevel::H2, "Release Notes").unwrap();
//! doc.set_content(id, "new body").unwrap();
//!
//! // Body edits cannot introduce headings.
//! assert!(doc.set_content(id, "## smuggled").is_err());
//! ```

pub mod document;
pub mod error;
pub mod markdown;
pub mod templates;
pub mod tokens;

#[cfg(feature = "notebook")]
pub mod notebook;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use document::{Document, HeadingLevel, Section, SectionId};
pub use error::{Error, Result};
pub use markdown::{
    compile_sections, extract_sections, sanitize_section_content, slugify, unique_slugs,
    validate_section_content,
};
pub use templates::{SectionTemplate, TEMPLATES, find_template};
pub use tokens::estimate_tokens;

/// First line of a converted Jupyter notebook.
///
/// Written by `notebook::markdown_from_notebook` and recognized by
/// [`tokens::estimate_tokens`].
pub const NOTEBOOK_MARKER: &str = "# Jupyter Notebook Conversion";
