//! Line-level classification shared by the parser and validator.
//!
//! Both the parser and the validator walk a document line by line with the
//! same three rules: fence lines toggle a
//! suppression flag, lines containing an inline backtick are never
//! boundaries, and only ATX headings of depth 1-3 count.

use crate::document::HeadingLevel;

const FENCE: &str = "```";

/// A recognized heading line: 1-3 `#` markers, whitespace, then text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HeadingLine<'a> {
    pub level: HeadingLevel,
    pub title: &'a str,
}

/// True if the line opens or closes a fenced code block.
///
/// Matches on the trimmed start of the line, so indented fences count.
pub(crate) fn is_fence(line: &str) -> bool {
    line.trim_start().starts_with(FENCE)
}

/// Recognize `^(#{1,3})\s+(.+)$` without a regex dependency.
///
/// Returns `None` for deeper headings (`####`+), a missing separator
/// (`#NoSpace`), and whitespace-only heading text.
pub(crate) fn heading_line(line: &str) -> Option<HeadingLine<'_>> {
    let depth = line.bytes().take_while(|&b| b == b'#').count();
    let level = HeadingLevel::from_depth(depth)?;
    let rest = &line[depth..];
    if !rest.chars().next().is_some_and(char::is_whitespace) {
        return None;
    }
    let title = rest.trim();
    if title.is_empty() {
        return None;
    }
    Some(HeadingLine { level, title })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_depths() {
        assert_eq!(heading_line("# One").map(|h| h.level), Some(HeadingLevel::H1));
        assert_eq!(heading_line("## Two").map(|h| h.level), Some(HeadingLevel::H2));
        assert_eq!(heading_line("### Three").map(|h| h.level), Some(HeadingLevel::H3));
        assert_eq!(heading_line("#### Four"), None);
    }

    #[test]
    fn test_heading_title_trimmed() {
        assert_eq!(heading_line("#   spaced   ").map(|h| h.title), Some("spaced"));
        assert_eq!(heading_line("#\ttabbed").map(|h| h.title), Some("tabbed"));
    }

    #[test]
    fn test_not_headings() {
        assert_eq!(heading_line("#NoSpace"), None);
        assert_eq!(heading_line("plain text"), None);
        assert_eq!(heading_line(""), None);
        assert_eq!(heading_line("###"), None);
        assert_eq!(heading_line("#   "), None);
    }

    #[test]
    fn test_fence_detection() {
        assert!(is_fence("```"));
        assert!(is_fence("```rust"));
        assert!(is_fence("  ```"));
        assert!(!is_fence("`` not a fence"));
        assert!(!is_fence("text ```"));
    }
}
