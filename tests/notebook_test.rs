#![cfg(feature = "notebook")]

//! Jupyter notebook flattening tests.

use etchr::notebook::{looks_like_notebook, markdown_from_notebook, normalize_file_content};
use etchr::{Error, NOTEBOOK_MARKER, extract_sections};

const SAMPLE_NOTEBOOK: &str = r###"{
  "nbformat": 4,
  "cells": [
    {"cell_type": "markdown", "source": ["## Demo\n", "intro text"]},
    {"cell_type": "code", "source": "print('hi')", "outputs": [
      {"output_type": "stream", "text": ["line1\n", "line2\n", "line3\n"]}
    ]},
    {"cell_type": "code", "source": ["x = 1\n", "x"], "outputs": [
      {"output_type": "execute_result", "data": {"text/plain": ["1"]}}
    ]},
    {"cell_type": "raw", "source": "ignored"}
  ]
}"###;

#[test]
fn test_minimal_notebook_exact_output() {
    let notebook = r#"{"cells": [{"cell_type": "markdown", "source": "hello"}]}"#;
    let markdown = markdown_from_notebook(notebook).unwrap();
    assert_eq!(markdown, format!("{NOTEBOOK_MARKER}\n\nhello\n\n"));
}

#[test]
fn test_markdown_cells_join_array_sources() {
    let markdown = markdown_from_notebook(SAMPLE_NOTEBOOK).unwrap();
    assert!(markdown.starts_with(NOTEBOOK_MARKER));
    assert!(markdown.contains("## Demo\nintro text\n\n"));
}

#[test]
fn test_code_cells_become_python_fences() {
    let markdown = markdown_from_notebook(SAMPLE_NOTEBOOK).unwrap();
    assert!(markdown.contains("```python\nprint('hi')\n```\n\n"));
    assert!(markdown.contains("```python\nx = 1\nx\n```\n\n"));
}

#[test]
fn test_stream_output_truncated_to_two_lines() {
    let markdown = markdown_from_notebook(SAMPLE_NOTEBOOK).unwrap();
    assert!(markdown.contains("Output:\n```\nline1\nline2\n... [output truncated]\n"));
    assert!(!markdown.contains("line3"));
}

#[test]
fn test_execute_result_plain_text_kept_without_truncation() {
    let markdown = markdown_from_notebook(SAMPLE_NOTEBOOK).unwrap();
    assert!(markdown.contains("Output:\n```\n1\n```\n\n"));
}

#[test]
fn test_raw_cells_skipped() {
    let markdown = markdown_from_notebook(SAMPLE_NOTEBOOK).unwrap();
    assert!(!markdown.contains("ignored"));
}

#[test]
fn test_notebook_without_cells_is_invalid() {
    assert!(matches!(
        markdown_from_notebook(r#"{"nbformat": 4}"#),
        Err(Error::InvalidNotebook(_))
    ));
}

#[test]
fn test_detection() {
    assert!(looks_like_notebook(r#"{"nbformat": 4, "cells": []}"#));
    assert!(looks_like_notebook(r#"{"cells": []}"#));
    assert!(!looks_like_notebook("# plain markdown"));
}

#[test]
fn test_normalize_falls_back_on_unparseable_content() {
    let not_json = "this mentions \"cells\" but is not json";
    assert_eq!(normalize_file_content(not_json), not_json);

    let plain = "# plain markdown\nbody";
    assert_eq!(normalize_file_content(plain), plain);
}

#[test]
fn test_converted_notebook_sections() {
    // Code-cell fences keep their contents out of the section structure;
    // markdown-cell headings participate normally.
    let notebook = r##"{"cells": [
      {"cell_type": "markdown", "source": "# Analysis\nsome prose"},
      {"cell_type": "code", "source": "# just a comment\nx = 1"}
    ]}"##;

    let markdown = normalize_file_content(notebook);
    let sections = extract_sections(&markdown);

    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Jupyter Notebook Conversion", "Analysis"]);
    assert!(sections[1].content.contains("# just a comment"));
}
