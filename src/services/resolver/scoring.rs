//! Fuzzy similarity scoring for quote resolution.
//!
//! The ratio here is a token-sort Sørensen–Dice ratio: both sides get
//! the full pre-processing pass (lowercase, strip symbols, collapse
//! whitespace), are split into tokens, sorted, and rejoined, then scored
//! by bigram overlap. Reorderings of the same words score 100, and a
//! quote that survives verbatim inside a longer element still scores
//! high, where a plain edit-distance ratio penalizes the extra words
//! too hard. The match threshold is calibrated against this algorithm.

use crate::services::transcript::normalizer;

/// Similarity score two strings must reach to count as a match.
/// Fixed crate constant, not configurable per call.
pub const MATCH_THRESHOLD: f64 = 85.0;

/// Token-sort Sørensen–Dice ratio in the 0–100 range, 100 = identical
/// after full pre-processing.
///
/// An empty side scores 0 against a non-empty side (and 100 against an
/// empty one), so empty quote text can never cross the threshold.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    let a = token_sort(&normalizer::normalize(a));
    let b = token_sort(&normalizer::normalize(b));

    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    strsim::sorensen_dice(&a, &b) * 100.0
}

/// Sort whitespace-separated tokens into a canonical order.
fn token_sort(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

#[cfg(test)]
#[path = "tests/scoring_tests.rs"]
mod tests;
