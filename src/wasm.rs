//! WASM bindings for browser-based section editing.
//!
//! This module exposes the section model to JavaScript via wasm-bindgen.
//! Section lists cross the boundary as JSON strings; the JavaScript side
//! owns UI state and hands the whole list back for compilation.

use wasm_bindgen::prelude::*;

use crate::document::{Document, Section};
use crate::markdown::{compile_sections, sanitize_section_content, validate_section_content};
use crate::notebook::normalize_file_content;
use crate::tokens::estimate_tokens;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Parse a markdown document and return its sections as a JSON array.
#[wasm_bindgen]
pub fn parse_sections(markdown: &str) -> Result<String, JsValue> {
    let doc = Document::parse(markdown);
    serde_json::to_string(doc.sections()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compile a JSON section array back into a flat markdown document.
#[wasm_bindgen]
pub fn compile_sections_json(sections: &str) -> Result<String, JsValue> {
    let sections: Vec<Section> =
        serde_json::from_str(sections).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(compile_sections(&sections))
}

/// True when the content contains no freehand section headings.
#[wasm_bindgen]
pub fn validate_content(content: &str) -> bool {
    validate_section_content(content)
}

/// Strip freehand heading lines from section body content.
#[wasm_bindgen]
pub fn sanitize_content(content: &str) -> String {
    sanitize_section_content(content).into_owned()
}

/// Flatten Jupyter notebook JSON to markdown; non-notebook content passes
/// through unchanged.
#[wasm_bindgen]
pub fn notebook_to_markdown(content: &str) -> String {
    normalize_file_content(content).into_owned()
}

/// Estimate the token count of file content.
#[wasm_bindgen]
pub fn count_tokens(content: &str) -> usize {
    estimate_tokens(content)
}
