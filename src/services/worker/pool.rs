//! Fixed-size resolver worker pool with a shared FIFO job queue.
//!
//! Jobs queue naturally in the channel when every worker is busy; each
//! job carries its own reply slot, so correlation is structural on top
//! of the wire-level message ids. The pool holds no cross-request state
//! beyond the id counter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use serde_json::{json, Value};
use tokio::sync::oneshot;

use crate::types::coding::{Code, MatchResult, SegmentBatch};
use crate::types::errors::{WorkerError, WorkerResult};
use crate::types::protocol::{WorkerRequest, WorkerResponse};
use crate::types::transcript::PostTree;

use super::handle_message;

struct Job {
    message: Value,
    reply: oneshot::Sender<WorkerResponse>,
}

/// Pool of resolver workers sharing one job queue.
///
/// Dropping the pool closes the queue and joins every worker after it
/// finishes its current job.
pub struct WorkerPool {
    job_tx: Option<Sender<Job>>,
    workers: Vec<JoinHandle<()>>,
    next_msg_id: AtomicU64,
}

impl WorkerPool {
    /// Spawn `size` worker threads (at least one).
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        let (job_tx, job_rx) = mpsc::channel::<Job>();
        let job_rx = Arc::new(Mutex::new(job_rx));

        let workers = (0..size)
            .map(|n| {
                let jobs = Arc::clone(&job_rx);
                thread::Builder::new()
                    .name(format!("resolver-worker-{n}"))
                    .spawn(move || pool_loop(jobs))
                    .expect("Failed to spawn resolver worker")
            })
            .collect();

        Self {
            job_tx: Some(job_tx),
            workers,
            next_msg_id: AtomicU64::new(1),
        }
    }

    /// Resolve a code batch against a transcript on the pool.
    pub async fn run_resolution(
        &self,
        post: &PostTree,
        codes: &[Code],
    ) -> WorkerResult<MatchResult> {
        let response = self
            .run_raw(self.build_message(WorkerRequest::GetCodeToQuoteIds {
                id: self.next_id(),
                post: post.clone(),
                codes: codes.to_vec(),
            })?)
            .await?;

        match response {
            WorkerResponse::GetCodeToQuoteIdsResult { data, .. } => Ok(data),
            WorkerResponse::Error { data, .. } => Err(WorkerError::Task(data)),
            other => Err(WorkerError::Task(format!(
                "Mismatched response variant for id {}",
                other.id()
            ))),
        }
    }

    /// Segment a transcript's elements on the pool.
    pub async fn run_segmentation(
        &self,
        post: &PostTree,
        codes: &[Code],
    ) -> WorkerResult<SegmentBatch> {
        let response = self
            .run_raw(self.build_message(WorkerRequest::ProcessTranscript {
                id: self.next_id(),
                post: post.clone(),
                codes: codes.to_vec(),
            })?)
            .await?;

        match response {
            WorkerResponse::ProcessTranscriptResult { data, .. } => Ok(data),
            WorkerResponse::Error { data, .. } => Err(WorkerError::Task(data)),
            other => Err(WorkerError::Task(format!(
                "Mismatched response variant for id {}",
                other.id()
            ))),
        }
    }

    /// Dispatch a raw wire message and await its single response.
    ///
    /// Useful for callers speaking the JSON protocol directly; the typed
    /// helpers above are built on this.
    pub async fn run_raw(&self, message: Value) -> WorkerResult<WorkerResponse> {
        let (reply_tx, reply_rx) = oneshot::channel();
        let job = Job {
            message,
            reply: reply_tx,
        };

        match &self.job_tx {
            Some(tx) => tx.send(job).map_err(|_| WorkerError::Disconnected)?,
            None => return Err(WorkerError::Disconnected),
        }

        reply_rx.await.map_err(|_| WorkerError::Disconnected)
    }

    fn build_message(&self, request: WorkerRequest) -> WorkerResult<Value> {
        serde_json::to_value(&request).map_err(|err| WorkerError::Task(err.to_string()))
    }

    fn next_id(&self) -> Value {
        json!(self.next_msg_id.fetch_add(1, Ordering::Relaxed))
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        drop(self.job_tx.take());
        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
    }
}

fn pool_loop(jobs: Arc<Mutex<Receiver<Job>>>) {
    loop {
        // Lock only long enough to pull the next job; processing happens
        // outside so the other workers keep draining the queue.
        let job = match jobs.lock() {
            Ok(guard) => guard.recv(),
            Err(_) => return,
        };
        let Ok(job) = job else {
            return;
        };

        let response = handle_message(job.message);
        // A dropped reply slot means the caller stopped waiting; the
        // at-most-one-response contract still holds.
        let _ = job.reply.send(response);
    }
}

#[cfg(test)]
#[path = "tests/pool_tests.rs"]
mod tests;
