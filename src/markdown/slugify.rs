//! Slug derivation for section anchors.
//!
//! Generates GitHub-style slugs from heading text. Slugs are display
//! identifiers only; section identity is the stable [`crate::SectionId`],
//! so two sections sharing a title collide on slug without colliding on
//! identity.

use std::collections::HashMap;

use crate::document::Section;

/// Generate a GitHub-style slug from text.
///
/// Lowercase alphanumeric runs joined by single hyphens; whitespace,
/// hyphens, and underscores separate runs, everything else is dropped.
///
/// # Examples
///
/// ```
/// use etchr::slugify;
///
/// assert_eq!(slugify("Getting Started"), "getting-started");
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_separator = true;
        }
        // Other characters are dropped without acting as separators.
    }

    slug
}

/// Collision-free slugs for a section list, in storage order.
///
/// Repeated titles get `-1`, `-2`, ... suffixes, the way GitHub
/// disambiguates duplicate heading anchors.
pub fn unique_slugs(sections: &[Section]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();

    sections
        .iter()
        .map(|section| {
            let base = slugify(&section.title);
            let count = seen.entry(base.clone()).or_insert(0);
            let slug = if *count == 0 {
                base.clone()
            } else {
                format!("{base}-{count}")
            };
            *count += 1;
            slug
        })
        .collect()
}
