//! Error types for etchr operations.

use thiserror::Error;

use crate::document::SectionId;

/// Errors that can occur while parsing, editing, or serializing a document.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no section with id {0}")]
    SectionNotFound(SectionId),

    #[error("section index {index} out of range for {len} sections")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("heading depth {0} outside the recognized range 1-3")]
    InvalidDepth(usize),

    #[error("invalid section title: {0:?}")]
    InvalidTitle(String),

    #[error("section content may not contain headings: {0:?}")]
    HeadingInContent(String),

    #[error("invalid notebook: {0}")]
    InvalidNotebook(String),

    #[cfg(feature = "notebook")]
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
