use serde::Serialize;
use thiserror::Error;

/// Errors raised while turning a raw request message into engine work.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
    #[error("Unsupported request type: {0}")]
    UnsupportedRequest(String),
}

/// Errors surfaced to callers awaiting a pooled task.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("Task failed: {0}")]
    Task(String),
    #[error("Worker disconnected")]
    Disconnected,
}

impl Serialize for ResolveError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

impl Serialize for WorkerError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type ResolveResult<T> = Result<T, ResolveError>;
pub type WorkerResult<T> = Result<T, WorkerError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
