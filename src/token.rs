use std::sync::LazyLock;

use regex::Regex;

static WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is a valid regex"));

/// Return the first run of word characters (letters, digits, `_`) in `input`.
///
/// Falls back to `input` itself when it holds no word character at all, so
/// punctuation-only or empty strings come back unchanged.
pub fn extract_word_token(input: &str) -> &str {
    WORD_RUN
        .find(input)
        .map(|m| m.as_str())
        .unwrap_or(input)
}
