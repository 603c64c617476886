//! Section-level document representation.
//!
//! A README is modeled as an ordered list of [`Section`]s, each rooted at a
//! level 1-3 heading. The [`Document`] owns the list and the id allocator;
//! every mutation keeps two invariants:
//!
//! - `order` values are a contiguous `0..N-1` permutation after every edit
//! - section bodies never contain a line that would parse as a heading
//!
//! Parsing and serialization live in [`crate::markdown`]; `Document` wires
//! them to the mutation operations.

use std::borrow::Cow;
use std::fmt;

use crate::error::{Error, Result};
use crate::markdown::{
    compile_sections, extract_sections, first_freehand_heading, sanitize_section_content, slugify,
};
use crate::templates::SectionTemplate;

/// Heading depth recognized as a section boundary.
///
/// Deeper headings (`####` and beyond) are never boundaries; they stay in
/// the enclosing section's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub enum HeadingLevel {
    H1 = 1,
    H2 = 2,
    H3 = 3,
}

impl HeadingLevel {
    /// Map a `#` count to a level. Returns `None` outside 1-3.
    pub fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            _ => None,
        }
    }

    /// Number of `#` markers for this level.
    pub fn depth(self) -> usize {
        self as usize
    }

    /// The literal heading marker (`#`, `##`, or `###`).
    pub fn marker(self) -> &'static str {
        match self {
            Self::H1 => "#",
            Self::H2 => "##",
            Self::H3 => "###",
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = Error;

    fn try_from(depth: u8) -> Result<Self> {
        Self::from_depth(depth as usize).ok_or(Error::InvalidDepth(depth as usize))
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> u8 {
        level.depth() as u8
    }
}

/// Stable identity for a section within one document.
///
/// Allocated from a per-document counter. Identity is never derived from
/// the title, so renames and reorders keep the id; display slugs are a
/// separate, recomputed concern (see [`Section::slug`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SectionId(u64);

impl SectionId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A heading plus the document text following it, up to the next heading.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    /// Stable identifier within the owning document.
    pub id: SectionId,
    /// Heading depth (1-3).
    pub level: HeadingLevel,
    /// Heading text, trimmed, without `#` markers.
    pub title: String,
    /// Body text between this heading and the next, trimmed of surrounding
    /// blank lines. Never contains a bare heading line.
    pub content: String,
    /// Zero-based serialization position.
    pub order: usize,
}

impl Section {
    /// The heading line this section serializes to, without the newline.
    pub fn heading(&self) -> String {
        format!("{} {}", self.level.marker(), self.title)
    }

    /// Display slug derived from the current title.
    ///
    /// Not unique across a document; see [`crate::markdown::unique_slugs`]
    /// for collision-free anchors.
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }
}

/// An ordered section list with stable ids.
///
/// All mutations are synchronous, in-memory list transformations; the
/// hosting application owns any I/O around them.
#[derive(Debug, Clone, Default)]
pub struct Document {
    sections: Vec<Section>,
    next_id: u64,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a markdown document into sections.
    ///
    /// Text before the first recognized heading is dropped. See
    /// [`extract_sections`] for the boundary rules.
    pub fn parse(markdown: &str) -> Self {
        let sections = extract_sections(markdown);
        let next_id = sections.len() as u64;
        Self { sections, next_id }
    }

    /// Serialize back to a flat markdown document.
    ///
    /// Sections are emitted in ascending `order`, separated by one blank
    /// line.
    pub fn compile(&self) -> String {
        compile_sections(&self.sections)
    }

    /// The current section list, in storage order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Look up a section by id.
    pub fn get(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Append a user-authored section.
    ///
    /// The content is held to the same rule as edits: no bare heading
    /// lines. Returns the new section's id.
    pub fn push_section(
        &mut self,
        level: HeadingLevel,
        title: &str,
        content: &str,
    ) -> Result<SectionId> {
        let title = valid_title(title)?;
        if let Some(line) = first_freehand_heading(content) {
            return Err(Error::HeadingInContent(line.to_string()));
        }
        let id = self.alloc_id();
        let order = self.sections.len();
        self.sections.push(Section {
            id,
            level,
            title,
            content: content.trim().to_string(),
            order,
        });
        Ok(id)
    }

    /// Append an empty section from a stock template.
    ///
    /// Template sections start at level 2 with no content; the body is
    /// filled in later by the user or a content generator.
    pub fn push_template(&mut self, template: &SectionTemplate) -> SectionId {
        let id = self.alloc_id();
        let order = self.sections.len();
        self.sections.push(Section {
            id,
            level: HeadingLevel::H2,
            title: template.name.to_string(),
            content: String::new(),
            order,
        });
        id
    }

    /// Move the section at index `from` to index `to`.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.sections.len();
        if from >= len {
            return Err(Error::IndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(Error::IndexOutOfRange { index: to, len });
        }
        let section = self.sections.remove(from);
        self.sections.insert(to, section);
        self.renumber();
        Ok(())
    }

    /// Replace a section's title and level. The id is stable across renames.
    pub fn rename(&mut self, id: SectionId, level: HeadingLevel, title: &str) -> Result<()> {
        let title = valid_title(title)?;
        let index = self.index_of(id)?;
        let section = &mut self.sections[index];
        // Content imported from older documents can carry a stray heading
        // line; scrub it so the heading-free body invariant holds.
        if let Cow::Owned(clean) = sanitize_section_content(&section.content) {
            section.content = clean.trim().to_string();
        }
        section.level = level;
        section.title = title;
        Ok(())
    }

    /// Remove a section by id, returning it.
    pub fn remove(&mut self, id: SectionId) -> Result<Section> {
        let index = self.index_of(id)?;
        let section = self.sections.remove(index);
        self.renumber();
        Ok(section)
    }

    /// Replace a section's body, rejecting content with bare heading lines.
    ///
    /// Headings enter a document only through parse, rename, or section
    /// creation, never through body edits.
    pub fn set_content(&mut self, id: SectionId, content: &str) -> Result<()> {
        let index = self.index_of(id)?;
        if let Some(line) = first_freehand_heading(content) {
            return Err(Error::HeadingInContent(line.to_string()));
        }
        self.sections[index].content = content.trim().to_string();
        Ok(())
    }

    /// Replace a section's body, stripping any bare heading lines instead
    /// of rejecting them. Returns how many lines were dropped so the caller
    /// can warn the user.
    pub fn set_content_lossy(&mut self, id: SectionId, content: &str) -> Result<usize> {
        let index = self.index_of(id)?;
        let clean = sanitize_section_content(content);
        let dropped = content.lines().count() - clean.lines().count();
        self.sections[index].content = clean.trim().to_string();
        Ok(dropped)
    }

    fn index_of(&self, id: SectionId) -> Result<usize> {
        self.sections
            .iter()
            .position(|s| s.id == id)
            .ok_or(Error::SectionNotFound(id))
    }

    fn alloc_id(&mut self) -> SectionId {
        let id = SectionId(self.next_id);
        self.next_id += 1;
        id
    }

    fn renumber(&mut self) {
        for (index, section) in self.sections.iter_mut().enumerate() {
            section.order = index;
        }
    }
}

fn valid_title(title: &str) -> Result<String> {
    let title = title.trim();
    // A title with a newline or backtick would not survive a re-parse as
    // the same heading line.
    if title.is_empty() || title.contains('\n') || title.contains('`') {
        return Err(Error::InvalidTitle(title.to_string()));
    }
    Ok(title.to_string())
}
