//! Jupyter notebook to markdown conversion.
//!
//! Repository files fed into the section and token machinery may be
//! `.ipynb` JSON rather than plain text. Notebooks are flattened to
//! markdown first: markdown cells pass through, code cells become fenced
//! `python` blocks, and cell outputs are truncated to a short preview so a
//! notebook full of training logs does not dominate the prompt budget.
//!
//! The converted document starts with [`crate::NOTEBOOK_MARKER`], which
//! the token estimator keys on.

use std::borrow::Cow;

use serde::Deserialize;

use crate::NOTEBOOK_MARKER;
use crate::error::{Error, Result};

/// Lines of output text kept per cell output before truncation.
const OUTPUT_PREVIEW_LINES: usize = 2;

#[derive(Deserialize)]
struct Notebook {
    cells: Option<Vec<Cell>>,
}

#[derive(Deserialize)]
struct Cell {
    cell_type: String,
    #[serde(default)]
    source: SourceLines,
    #[serde(default)]
    outputs: Vec<Output>,
}

#[derive(Deserialize)]
struct Output {
    output_type: String,
    #[serde(default)]
    text: Option<SourceLines>,
    #[serde(default)]
    data: Option<OutputData>,
}

#[derive(Deserialize)]
struct OutputData {
    #[serde(rename = "text/plain", default)]
    text_plain: Option<SourceLines>,
}

/// Notebook text fields are either a single string or an array of lines.
#[derive(Deserialize)]
#[serde(untagged)]
enum SourceLines {
    One(String),
    Many(Vec<String>),
}

impl Default for SourceLines {
    fn default() -> Self {
        SourceLines::One(String::new())
    }
}

impl SourceLines {
    fn joined(&self) -> Cow<'_, str> {
        match self {
            SourceLines::One(text) => Cow::Borrowed(text),
            SourceLines::Many(lines) => Cow::Owned(lines.concat()),
        }
    }
}

/// Cheap check for content that is probably a notebook.
///
/// False positives are fine; conversion falls back to the raw text when
/// the content does not parse as a notebook.
pub fn looks_like_notebook(content: &str) -> bool {
    content.contains("\"nbformat\"") || content.contains("\"cells\"")
}

/// Convert notebook JSON to a flat markdown document.
///
/// Markdown cells are emitted as-is, code cells as fenced `python` blocks.
/// When a code cell has outputs, `stream` text and `execute_result`
/// `text/plain` data follow in an `Output:` fence, truncated to the first
/// two lines each. Cell types other than markdown and code are skipped.
pub fn markdown_from_notebook(content: &str) -> Result<String> {
    let notebook: Notebook = serde_json::from_str(content)?;
    let Some(cells) = notebook.cells else {
        return Err(Error::InvalidNotebook("no cells array".to_string()));
    };

    let mut markdown = String::new();
    markdown.push_str(NOTEBOOK_MARKER);
    markdown.push_str("\n\n");

    for cell in &cells {
        match cell.cell_type.as_str() {
            "markdown" => {
                markdown.push_str(&cell.source.joined());
                markdown.push_str("\n\n");
            }
            "code" => {
                markdown.push_str("```python\n");
                markdown.push_str(&cell.source.joined());
                markdown.push_str("\n```\n\n");

                if !cell.outputs.is_empty() {
                    markdown.push_str("Output:\n```\n");
                    for output in &cell.outputs {
                        let text = match output.output_type.as_str() {
                            "stream" => output.text.as_ref(),
                            "execute_result" => {
                                output.data.as_ref().and_then(|d| d.text_plain.as_ref())
                            }
                            _ => None,
                        };
                        if let Some(text) = text {
                            push_truncated(&mut markdown, &text.joined());
                        }
                    }
                    markdown.push_str("\n```\n\n");
                }
            }
            _ => {}
        }
    }

    Ok(markdown)
}

/// Convert notebook-looking content, falling back to the raw text when it
/// does not parse as a notebook.
pub fn normalize_file_content(content: &str) -> Cow<'_, str> {
    if looks_like_notebook(content)
        && let Ok(markdown) = markdown_from_notebook(content)
    {
        return Cow::Owned(markdown);
    }
    Cow::Borrowed(content)
}

fn push_truncated(out: &mut String, text: &str) {
    let lines: Vec<&str> = text.split('\n').collect();
    for (i, line) in lines.iter().take(OUTPUT_PREVIEW_LINES).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line);
    }
    if lines.len() > OUTPUT_PREVIEW_LINES {
        out.push_str("\n... [output truncated]\n");
    }
}
