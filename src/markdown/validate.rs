//! Freehand-heading rejection for section bodies.
//!
//! Section bodies are heading-free by construction: headings enter a
//! document through parsing, renames, or section creation, never through
//! body edits. These checks apply the same fence and backtick rules as the
//! parser, so a line the parser would not treat as a boundary is also
//! acceptable body content.

use std::borrow::Cow;

use super::heading::{heading_line, is_fence};

/// True when no non-fenced, backtick-free line forms a level 1-3 heading.
pub fn validate_section_content(content: &str) -> bool {
    first_freehand_heading(content).is_none()
}

/// The first line that the parser would recognize as a section boundary.
pub(crate) fn first_freehand_heading(content: &str) -> Option<&str> {
    let mut in_fence = false;
    for line in content.split('\n') {
        if is_fence(line) {
            in_fence = !in_fence;
            continue;
        }
        if !in_fence && !line.contains('`') && heading_line(line).is_some() {
            return Some(line);
        }
    }
    None
}

/// Strip boundary-forming lines, keeping everything else verbatim.
///
/// Returns the input unchanged (and unallocated) when it is already
/// heading-free.
pub fn sanitize_section_content(content: &str) -> Cow<'_, str> {
    if validate_section_content(content) {
        return Cow::Borrowed(content);
    }

    let mut kept: Vec<&str> = Vec::new();
    let mut in_fence = false;
    for line in content.split('\n') {
        if is_fence(line) {
            in_fence = !in_fence;
            kept.push(line);
            continue;
        }
        if !in_fence && !line.contains('`') && heading_line(line).is_some() {
            continue;
        }
        kept.push(line);
    }
    Cow::Owned(kept.join("\n"))
}
