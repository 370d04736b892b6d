//! Code-to-quote resolution over a flattened transcript.
//!
//! Per code, a cheap position-based resolution runs first; without a
//! usable marker the whole transcript is fuzzy-searched. Scoring per
//! element is independent, so the fuzzy pass fans out across threads.

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;

use crate::services::transcript::{flattener, quote_id::quote_id};
use crate::types::coding::{Code, MatchResult};
use crate::types::transcript::{PostTree, TranscriptElement};

use super::scoring::{self, MATCH_THRESHOLD};

/// Resolve every code in the batch to the transcript elements it quotes.
///
/// Every input code id gets an entry in the result, possibly empty;
/// codes are never silently dropped. Deterministic for identical inputs;
/// no I/O.
pub fn resolve(post: &PostTree, codes: &[Code]) -> MatchResult {
    let elements = flattener::flatten_post(post);
    let all_quote_ids = collect_quote_ids(&elements);

    log::debug!(
        "Resolving {} codes against {} transcript elements",
        codes.len(),
        elements.len()
    );

    let code_to_quote_ids: BTreeMap<String, BTreeSet<String>> = codes
        .iter()
        .map(|code| (code.id.clone(), resolve_code(code, &elements)))
        .collect();

    MatchResult {
        code_to_quote_ids,
        all_quote_ids,
    }
}

/// Quote ids in flatten order, deduplicated defensively (the id rule is
/// injective, so this is normally a no-op).
fn collect_quote_ids(elements: &[TranscriptElement]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    elements
        .iter()
        .map(quote_id)
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

fn resolve_code(code: &Code, elements: &[TranscriptElement]) -> BTreeSet<String> {
    // Position-first: an in-range marker is trusted completely. No fuzzy
    // search, no other elements, even if the text also matches elsewhere.
    if let Some(marker) = &code.range_marker {
        if let Ok(index) = marker.item_id.parse::<usize>() {
            if index < elements.len() {
                return BTreeSet::from([quote_id(&elements[index])]);
            }
        }
        log::warn!(
            "Unusable range marker itemId {:?} for code {}; falling back to text search",
            marker.item_id,
            code.id
        );
    }

    elements
        .par_iter()
        .filter_map(|element| {
            let score = score_element(element, code);

            #[cfg(feature = "debug_matcher")]
            log::debug!(
                "code {} vs {} {}: score {:.1}",
                code.id,
                element.element_type,
                element.source_id,
                score
            );

            (score >= MATCH_THRESHOLD).then(|| quote_id(element))
        })
        .collect()
}

/// Score one element against one code's quoted text.
///
/// A literal hit of the original quote inside the element's display text
/// short-circuits at 100, so the fuzzy scorer can never disagree with an
/// obviously exact hit. Empty quote text never matches anything.
fn score_element(element: &TranscriptElement, code: &Code) -> f64 {
    if code.text.is_empty() {
        return 0.0;
    }
    if element.text.contains(&code.text) {
        return 100.0;
    }
    scoring::token_sort_ratio(&element.text, &code.text)
}

#[cfg(test)]
#[path = "tests/matcher_tests.rs"]
mod tests;
