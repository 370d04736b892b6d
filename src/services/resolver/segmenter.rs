//! Element segmentation for highlight rendering.
//!
//! Each flattened element's display text is split into contiguous runs
//! with a constant set of covering codes, via an endpoint sweep over the
//! code intervals found on that element.

use std::collections::BTreeMap;

use crate::services::transcript::{flattener, normalizer};
use crate::types::coding::{Code, Segment, SegmentBatch, SegmentIndex};
use crate::types::transcript::{PostTree, TranscriptElement};

/// One covering interval on an element's display text, `[start, end)` in
/// byte offsets. `code` indexes into the request's code batch.
#[derive(Debug, Clone, Copy)]
struct Interval {
    start: usize,
    end: usize,
    code: usize,
}

/// Sweep event kind. Ends sort before starts at the same position so
/// back-to-back intervals do not bleed into each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Boundary {
    End,
    Start,
}

/// Split every element of the transcript into highlight segments.
pub fn process_transcript(post: &PostTree, codes: &[Code]) -> SegmentBatch {
    let elements = flattener::flatten_post(post);

    let mut processed_segments = Vec::new();
    for (element_index, element) in elements.iter().enumerate() {
        segment_element(element, element_index, codes, &mut processed_segments);
    }

    log::debug!(
        "Segmented post {} into {} segments across {} elements",
        post.id,
        processed_segments.len(),
        elements.len()
    );

    let mut code_set: Vec<String> = Vec::new();
    for code in codes {
        let label = code.label_or_id();
        if !code_set.iter().any(|l| l == label) {
            code_set.push(label.to_string());
        }
    }

    SegmentBatch {
        processed_segments,
        code_set,
    }
}

fn segment_element(
    element: &TranscriptElement,
    element_index: usize,
    codes: &[Code],
    out: &mut Vec<Segment>,
) {
    let text = element.text.as_str();
    let item_tag = element_index.to_string();
    let mut intervals: Vec<Interval> = Vec::new();

    // Marker codes pin to their element by flat index; no other element
    // ever sees them.
    for (code_index, code) in codes.iter().enumerate() {
        let Some(marker) = &code.range_marker else {
            continue;
        };
        if marker.item_id != item_tag {
            continue;
        }
        match marker.range {
            Some([start, end]) => {
                let start = clamp_to_char_boundary(text, start);
                let end = clamp_to_char_boundary(text, end);
                if start < end {
                    intervals.push(Interval {
                        start,
                        end,
                        code: code_index,
                    });
                }
            }
            // A marker without a span anchors at the quote's literal
            // occurrences within this element only.
            None => push_occurrences(text, code, code_index, &mut intervals),
        }
    }

    // Unmarked codes highlight every literal occurrence of their quote.
    // A merely fuzzy-similar quote has no locatable span, so it adds no
    // interval here; fuzzy similarity only affects the matcher.
    for (code_index, code) in codes.iter().enumerate() {
        if code.range_marker.is_none() {
            push_occurrences(text, code, code_index, &mut intervals);
        }
    }

    if intervals.is_empty() {
        out.push(make_segment(text, element, element_index, 0, &[], codes));
        return;
    }

    let mut events: Vec<(usize, Boundary, usize)> = Vec::with_capacity(intervals.len() * 2);
    for interval in &intervals {
        events.push((interval.start, Boundary::Start, interval.code));
        events.push((interval.end, Boundary::End, interval.code));
    }
    events.sort_unstable();

    let mut current_pos = 0usize;
    let mut segment_index = 0usize;
    let mut active: Vec<usize> = Vec::new();

    for (pos, boundary, code_index) in events {
        if pos > current_pos {
            out.push(make_segment(
                &text[current_pos..pos],
                element,
                element_index,
                segment_index,
                &active,
                codes,
            ));
            segment_index += 1;
            current_pos = pos;
        }
        match boundary {
            Boundary::Start => {
                if !active.contains(&code_index) {
                    active.push(code_index);
                }
            }
            Boundary::End => active.retain(|c| *c != code_index),
        }
    }

    if current_pos < text.len() {
        out.push(make_segment(
            &text[current_pos..],
            element,
            element_index,
            segment_index,
            &active,
            codes,
        ));
    }
}

/// Add one interval per non-overlapping literal occurrence of the code's
/// display-form quote, left to right.
fn push_occurrences(text: &str, code: &Code, code_index: usize, intervals: &mut Vec<Interval>) {
    let needle = normalizer::display_text(&code.text);
    for pos in all_positions(text, &needle) {
        intervals.push(Interval {
            start: pos,
            end: pos + needle.len(),
            code: code_index,
        });
    }
}

fn make_segment(
    span: &str,
    element: &TranscriptElement,
    element_index: usize,
    segment_index: usize,
    active: &[usize],
    codes: &[Code],
) -> Segment {
    let mut related_codes: Vec<String> = Vec::new();
    let mut code_quotes: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for &code_index in active {
        let code = &codes[code_index];
        let label = code.label_or_id().to_string();
        if !related_codes.contains(&label) {
            related_codes.push(label.clone());
        }
        code_quotes.entry(label).or_default().push(code.text.clone());
    }

    Segment {
        line: normalizer::display_text(span),
        source_id: element.source_id.clone(),
        element_type: element.element_type,
        parent_id: element.parent_id.clone(),
        index: SegmentIndex {
            element: element_index,
            segment: segment_index,
        },
        related_codes,
        code_quotes,
    }
}

/// Byte positions of every non-overlapping occurrence of `needle`, left
/// to right. An empty needle yields no positions.
fn all_positions(text: &str, needle: &str) -> Vec<usize> {
    let mut positions = Vec::new();
    if needle.is_empty() {
        return positions;
    }
    let mut pos = 0;
    while let Some(found) = text[pos..].find(needle) {
        let index = pos + found;
        positions.push(index);
        pos = index + needle.len();
    }
    positions
}

/// Clamp a marker offset into `text`, backing up to the nearest char
/// boundary so slicing stays valid.
fn clamp_to_char_boundary(text: &str, mut index: usize) -> usize {
    if index > text.len() {
        index = text.len();
    }
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
#[path = "tests/segmenter_tests.rs"]
mod tests;
