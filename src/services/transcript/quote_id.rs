//! Canonical external identifiers for transcript elements.

use crate::types::transcript::{ElementType, TranscriptElement};

/// Map an element to its externally visible quote id.
///
/// Title and selftext are namespaced by suffix so the mapping stays
/// injective within one post's transcript; comment ids are unique on
/// their own.
pub fn quote_id(element: &TranscriptElement) -> String {
    match element.element_type {
        ElementType::Title => format!("{}-title", element.source_id),
        ElementType::Selftext => format!("{}-selftext", element.source_id),
        ElementType::Comment => element.source_id.clone(),
    }
}

#[cfg(test)]
#[path = "tests/quote_id_tests.rs"]
mod tests;
