//! Approximate token counting for prompt budgeting.
//!
//! Selected repository files are concatenated into an LLM prompt, so the
//! UI needs a cheap size estimate before anything is sent anywhere. This
//! is a heuristic, not a tokenizer: short words count one token, longer
//! words roughly one per four characters, punctuation one each.

use crate::NOTEBOOK_MARKER;

/// Estimate the token count of file content.
///
/// Converted notebooks (detected by [`NOTEBOOK_MARKER`]) are counted per
/// non-empty line; everything else is counted in one pass.
pub fn estimate_tokens(content: &str) -> usize {
    if content.starts_with(NOTEBOOK_MARKER) {
        return content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(text_tokens)
            .sum();
    }
    text_tokens(content)
}

fn text_tokens(text: &str) -> usize {
    let words: usize = text.split_whitespace().map(word_tokens).sum();
    let specials = text
        .chars()
        .filter(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace())
        .count();
    words + specials
}

fn word_tokens(word: &str) -> usize {
    let chars = word.chars().count();
    if chars <= 4 { 1 } else { chars.div_ceil(4) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(estimate_tokens(""), 0);
    }

    #[test]
    fn test_short_words_count_one() {
        assert_eq!(estimate_tokens("one two four"), 3);
    }

    #[test]
    fn test_long_words_scale_by_length() {
        // 13 chars -> ceil(13 / 4) = 4
        assert_eq!(estimate_tokens("extraordinary"), 4);
    }

    #[test]
    fn test_punctuation_adds_tokens() {
        // "hi" = 1, "there" = 2, plus comma and bang
        assert_eq!(estimate_tokens("hi, there!"), 5);
    }

    #[test]
    fn test_notebook_branch_matches_flat_count() {
        let notebook = format!("{NOTEBOOK_MARKER}\n\nsome text here\n\nmore text");
        let flat = estimate_tokens("some text here more text");
        // The marker line itself is counted too.
        let marker_tokens = estimate_tokens(NOTEBOOK_MARKER);
        assert_eq!(estimate_tokens(&notebook), flat + marker_tokens);
    }
}
