//! The two-message worker protocol.
//!
//! Namespace boundary:
//! - Requests are tagged `getCodeToQuoteIds` / `processTranscript`.
//! - Responses are tagged `getCodeToQuoteIdsResult` /
//!   `processTranscriptResult` / `error`.
//!
//! The correlation `id` is chosen by the caller and echoed verbatim in
//! exactly one response per request. It is kept as a raw JSON value so
//! callers may correlate with numbers, strings, or anything else
//! serializable.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::coding::{Code, MatchResult, SegmentBatch};
use super::transcript::PostTree;

/// Request type tags the worker understands.
pub const KNOWN_REQUEST_TYPES: &[&str] = &["getCodeToQuoteIds", "processTranscript"];

/// Messages accepted by the resolver worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WorkerRequest {
    /// Resolve each code to the set of quote ids it plausibly quotes.
    #[serde(rename = "getCodeToQuoteIds")]
    GetCodeToQuoteIds {
        id: Value,
        post: PostTree,
        codes: Vec<Code>,
    },
    /// Split every element's display text into highlight segments.
    #[serde(rename = "processTranscript")]
    ProcessTranscript {
        id: Value,
        post: PostTree,
        codes: Vec<Code>,
    },
}

/// Messages emitted by the resolver worker, exactly one per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WorkerResponse {
    #[serde(rename = "getCodeToQuoteIdsResult")]
    GetCodeToQuoteIdsResult { id: Value, data: MatchResult },
    #[serde(rename = "processTranscriptResult")]
    ProcessTranscriptResult { id: Value, data: SegmentBatch },
    #[serde(rename = "error")]
    Error { id: Value, data: String },
}

impl WorkerRequest {
    /// Correlation id the response must echo.
    pub fn id(&self) -> &Value {
        match self {
            WorkerRequest::GetCodeToQuoteIds { id, .. } => id,
            WorkerRequest::ProcessTranscript { id, .. } => id,
        }
    }
}

impl WorkerResponse {
    /// Correlation id echoed from the request.
    pub fn id(&self) -> &Value {
        match self {
            WorkerResponse::GetCodeToQuoteIdsResult { id, .. } => id,
            WorkerResponse::ProcessTranscriptResult { id, .. } => id,
            WorkerResponse::Error { id, .. } => id,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, WorkerResponse::Error { .. })
    }
}
