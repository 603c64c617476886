//! Section list serialization back to a flat document.

use crate::document::Section;

/// Render a section list to a single markdown document.
///
/// Sections are emitted in ascending `order` as
/// `{'#' x level} {title}\n{content}`, joined by exactly one blank line.
/// Compiling the output of [`crate::markdown::extract_sections`] reproduces
/// the source document for any input already in the parser's recognized
/// grammar.
pub fn compile_sections(sections: &[Section]) -> String {
    let mut ordered: Vec<&Section> = sections.iter().collect();
    ordered.sort_by_key(|s| s.order);

    let capacity: usize = sections
        .iter()
        .map(|s| s.title.len() + s.content.len() + 8)
        .sum();
    let mut out = String::with_capacity(capacity);

    for (i, section) in ordered.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        out.push_str(section.level.marker());
        out.push(' ');
        out.push_str(&section.title);
        out.push('\n');
        out.push_str(&section.content);
    }

    out
}
