//! Coding contracts: annotations in, resolution and segmentation results
//! out.
//!
//! Set semantics: `MatchResult::code_to_quote_ids` values serialize as
//! arrays but carry no duplicates and no meaningful order. `BTreeMap` /
//! `BTreeSet` keep serialization deterministic across runs.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::transcript::ElementType;

/// Position hint attached to a code when it was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeMarker {
    /// Index into the flattened transcript, as a numeric string.
    pub item_id: String,
    /// Char-offset span `[start, end)` within that element's display
    /// text. Only the segmenter consumes this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<[usize; 2]>,
}

/// One coding annotation to resolve against a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Code {
    /// Unique within the batch being resolved.
    pub id: String,
    /// The quoted excerpt the code was applied to.
    pub text: String,
    /// Human-facing code label.
    #[serde(default, rename = "code", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Position hint. When present and in range it is trusted completely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_marker: Option<RangeMarker>,
}

impl Code {
    /// Label used in segment output; the id doubles as the label when the
    /// caller sent none.
    pub fn label_or_id(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

/// Output of one resolution request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Code id → quote ids it matches. Every input code id has an entry,
    /// possibly empty.
    pub code_to_quote_ids: BTreeMap<String, BTreeSet<String>>,
    /// Every quote id in the transcript, in flatten order.
    pub all_quote_ids: Vec<String>,
}

/// Position of a segment: owning flattened element and running index
/// within that element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentIndex {
    pub element: usize,
    pub segment: usize,
}

/// One contiguous run of element text with a constant set of covering
/// codes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Display form of the segment's span (trimmed).
    pub line: String,
    /// Owning post/comment id.
    pub source_id: String,
    pub element_type: ElementType,
    pub parent_id: Option<String>,
    pub index: SegmentIndex,
    /// Labels of the codes covering this run, first-seen order, no
    /// duplicates.
    pub related_codes: Vec<String>,
    /// Label → original quote texts for the covering codes.
    pub code_quotes: BTreeMap<String, Vec<String>>,
}

/// Output of one segmentation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentBatch {
    pub processed_segments: Vec<Segment>,
    /// Unique code labels across the batch, first-seen order.
    pub code_set: Vec<String>,
}
