//! Text normalization shared by the flattener, matcher, and segmenter.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex for stripping anything that is not an ASCII
/// alphanumeric or whitespace. Underscores are stripped as well.
static RE_NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("Invalid regex"));

/// Collapse internal whitespace runs to single spaces and trim.
///
/// Case and punctuation are kept: this is the form shown to the user and
/// the form exact-substring matching runs against.
pub fn display_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize for fuzzy comparison.
///
/// Pipeline:
/// 1. Lowercase
/// 2. Remove every non-alphanumeric symbol (no space inserted, so
///    `don't` → `dont`)
/// 3. Collapse and trim whitespace
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let stripped = RE_NON_ALNUM.replace_all(&lower, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "tests/normalizer_tests.rs"]
mod tests;
