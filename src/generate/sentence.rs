use std::sync::LazyLock;

use regex::Regex;

static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").unwrap());

/// Splits text into sentences on terminator punctuation, retaining the
/// terminator and trimming surrounding whitespace. Text after a final
/// unterminated fragment is dropped, as is text with no terminator at all.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    SENTENCE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}
