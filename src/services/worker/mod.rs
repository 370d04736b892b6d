//! Background resolution worker: one OS thread behind a message channel.
//!
//! The shell⇄renderer boundary is untyped, so requests arrive as raw
//! JSON values. The worker extracts the correlation id, deserializes the
//! typed request, runs the engine, and emits exactly one tagged response
//! per request. Failures of any kind (bad JSON, unknown request type,
//! malformed transcript nodes) become a correlated error response; they
//! never kill the worker loop or other in-flight requests.
//!
//! There is no cancellation and no engine-side timeout: once submitted,
//! a request runs to completion or failure. Callers layer timeouts on
//! top by ignoring late responses keyed by correlation id.

pub mod pool;

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use serde_json::Value;

use crate::services::resolver::{matcher, segmenter};
use crate::types::errors::{ResolveError, ResolveResult, WorkerError, WorkerResult};
use crate::types::protocol::{WorkerRequest, WorkerResponse, KNOWN_REQUEST_TYPES};

/// Handle to a resolver worker thread.
///
/// Dropping the handle closes the request channel; the thread drains any
/// queued requests and exits, and the drop joins it.
pub struct ResolverWorker {
    request_tx: Option<Sender<Value>>,
    response_rx: Receiver<WorkerResponse>,
    handle: Option<JoinHandle<()>>,
}

impl ResolverWorker {
    /// Spawn a worker thread with its request/response channel pair.
    pub fn spawn() -> Self {
        let (request_tx, request_rx) = mpsc::channel::<Value>();
        let (response_tx, response_rx) = mpsc::channel();
        let handle = thread::spawn(move || worker_loop(request_rx, response_tx));
        Self {
            request_tx: Some(request_tx),
            response_rx,
            handle: Some(handle),
        }
    }

    /// Queue a raw request message for the worker.
    pub fn submit(&self, message: Value) -> WorkerResult<()> {
        match &self.request_tx {
            Some(tx) => tx.send(message).map_err(|_| WorkerError::Disconnected),
            None => Err(WorkerError::Disconnected),
        }
    }

    /// Block until the next response is available.
    ///
    /// Responses come back in completion order; callers correlate by id.
    pub fn recv(&self) -> WorkerResult<WorkerResponse> {
        self.response_rx.recv().map_err(|_| WorkerError::Disconnected)
    }
}

impl Drop for ResolverWorker {
    fn drop(&mut self) {
        // Close the channel first so the loop can observe the hangup.
        drop(self.request_tx.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn worker_loop(requests: Receiver<Value>, responses: Sender<WorkerResponse>) {
    for message in requests {
        let response = handle_message(message);
        if responses.send(response).is_err() {
            // Caller went away; nothing left to answer to.
            break;
        }
    }
}

/// Turn one raw request message into its single response.
///
/// The correlation id is pulled out up front so even an unparseable
/// request gets a correlated error back.
pub(crate) fn handle_message(message: Value) -> WorkerResponse {
    let id = message.get("id").cloned().unwrap_or(Value::Null);

    match parse_request(message) {
        Ok(WorkerRequest::GetCodeToQuoteIds { id, post, codes }) => {
            WorkerResponse::GetCodeToQuoteIdsResult {
                id,
                data: matcher::resolve(&post, &codes),
            }
        }
        Ok(WorkerRequest::ProcessTranscript { id, post, codes }) => {
            WorkerResponse::ProcessTranscriptResult {
                id,
                data: segmenter::process_transcript(&post, &codes),
            }
        }
        Err(err) => {
            log::warn!("Rejected worker request: {err}");
            WorkerResponse::Error {
                id,
                data: err.to_string(),
            }
        }
    }
}

fn parse_request(message: Value) -> ResolveResult<WorkerRequest> {
    let tag = message
        .get("type")
        .and_then(Value::as_str)
        .map(str::to_owned);

    serde_json::from_value::<WorkerRequest>(message).map_err(|err| match tag {
        Some(tag) if !KNOWN_REQUEST_TYPES.contains(&tag.as_str()) => {
            ResolveError::UnsupportedRequest(tag)
        }
        _ => ResolveError::MalformedRequest(err.to_string()),
    })
}

#[cfg(test)]
#[path = "tests/worker_tests.rs"]
mod tests;
