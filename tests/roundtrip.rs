//! Round-trip laws for the parse/compile pair.
//!
//! For any document inside the parser's recognized grammar (level 1-3
//! headings, single blank-line separators, trimmed heading-free bodies,
//! balanced fences), parsing and recompiling reproduces the input byte for
//! byte, and compilation is idempotent. The proptest generators below
//! produce documents inside that grammar.

use proptest::prelude::*;

use etchr::{Document, compile_sections, extract_sections, validate_section_content};

// ============================================================================
// Deterministic Cases
// ============================================================================

#[test]
fn test_compile_concrete_scenario() {
    let sections = extract_sections("# A\nhello\n\n## B\nworld\n");
    assert_eq!(compile_sections(&sections), "# A\nhello\n\n## B\nworld");
}

#[test]
fn test_compile_preserves_fenced_blocks() {
    let input = "# Title\nintro\n```code\n# not a heading\n```\nmore";
    let compiled = compile_sections(&extract_sections(input));
    assert_eq!(compiled, input);
}

#[test]
fn test_empty_content_section_roundtrip() {
    // An empty body compiles to a bare heading line; the blank-line
    // separator keeps the next section intact across re-parses.
    let compiled = compile_sections(&extract_sections("# A\n\n# B\nx"));
    assert_eq!(compiled, "# A\n\n\n# B\nx");

    let again = compile_sections(&extract_sections(&compiled));
    assert_eq!(again, compiled);
}

#[test]
fn test_compile_empty_list() {
    assert_eq!(compile_sections(&[]), "");
}

// ============================================================================
// Property Tests
// ============================================================================

/// (depth, title, content) for one section in the recognized grammar.
type SectionCase = (usize, String, String);

fn title_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,8}( [A-Za-z0-9]{1,8}){0,2}"
}

fn plain_line() -> impl Strategy<Value = String> {
    "[a-z0-9 .,]{0,24}"
}

fn fenced_block() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z# ]{0,16}", 0..3)
        .prop_map(|lines| format!("```\n{}\n```", lines.join("\n")))
}

fn content_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![3 => plain_line(), 1 => fenced_block()],
        0..4,
    )
    .prop_map(|parts| parts.join("\n").trim().to_string())
}

fn section_cases() -> impl Strategy<Value = Vec<SectionCase>> {
    prop::collection::vec((1..=3usize, title_strategy(), content_strategy()), 1..5)
}

fn render(cases: &[SectionCase]) -> String {
    cases
        .iter()
        .map(|(depth, title, content)| format!("{} {title}\n{content}", "#".repeat(*depth)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

proptest! {
    #[test]
    fn parse_recovers_every_section(cases in section_cases()) {
        let doc_text = render(&cases);
        let sections = extract_sections(&doc_text);

        prop_assert_eq!(sections.len(), cases.len());
        for (section, (depth, title, content)) in sections.iter().zip(&cases) {
            prop_assert_eq!(section.level.depth(), *depth);
            prop_assert_eq!(&section.title, title);
            prop_assert_eq!(&section.content, content);
        }
        for (i, section) in sections.iter().enumerate() {
            prop_assert_eq!(section.order, i);
        }
    }

    #[test]
    fn compile_roundtrips_byte_for_byte(cases in section_cases()) {
        let doc_text = render(&cases);
        let compiled = compile_sections(&extract_sections(&doc_text));
        prop_assert_eq!(compiled, doc_text);
    }

    #[test]
    fn compile_is_idempotent(cases in section_cases()) {
        let doc_text = render(&cases);
        let once = Document::parse(&doc_text).compile();
        let twice = Document::parse(&once).compile();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn generated_bodies_pass_validation(cases in section_cases()) {
        for (_, _, content) in &cases {
            prop_assert!(validate_section_content(content));
        }
    }
}
