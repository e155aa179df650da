//! Text normalization for podcast titles and operator queries.
//! Handles transliteration and symbol stripping before fuzzy scoring.

use deunicode::deunicode;
use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex for stripping non-alphanumeric characters.
static RE_NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("Invalid regex"));

/// Normalize a title or query for matching.
///
/// Pipeline:
/// 1. Transliterate non-Latin characters to Latin via deunicode
/// 2. Strip non-alphanumeric symbols (keep spaces)
/// 3. Lowercase and collapse whitespace runs to a single space
pub fn normalize_title(text: &str) -> String {
    let text_latin = deunicode(text);
    let text_clean = RE_NON_ALNUM.replace_all(&text_latin, " ");
    text_clean
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "tests/normalizer_tests.rs"]
mod tests;
