//! Pure markdown transformations for the section model.
//!
//! Everything in this module is a synchronous string-in, string-out (or
//! list-in, list-out) function with no I/O:
//!
//! - [`extract_sections`]: heading-delimited section extraction
//! - [`compile_sections`]: deterministic serialization back to a flat document
//! - [`validate_section_content`]: freehand-heading rejection for section bodies
//! - [`slugify`]: GitHub-style anchor slugs
//!
//! The stateful layer ([`crate::document`]) wires these to the mutation
//! operations; applications needing only the transformations can call them
//! directly.
//!
//! ## Boundary rules
//!
//! Only ATX headings of depth 1-3 open sections. Two suppression rules are
//! shared by the parser and validator: a fenced code block makes every line
//! until the closing fence inert, and a line containing an inline backtick
//! anywhere is never a boundary. The backtick rule is deliberately broader
//! than the markdown spec requires; a line like `` Use `# comment` syntax ``
//! must never split a section.

mod compile;
mod heading;
mod parse;
mod slugify;
mod validate;

pub use compile::compile_sections;
pub use parse::extract_sections;
pub use slugify::{slugify, unique_slugs};
pub use validate::{sanitize_section_content, validate_section_content};

pub(crate) use validate::first_freehand_heading;
