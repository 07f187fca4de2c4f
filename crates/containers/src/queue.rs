//! FIFO queue: strict first-in-first-out removal
//!
//! The head removed is always the earliest-enqueued remaining
//! element. Dequeue from an empty queue is an error condition the
//! demonstration never triggers.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;
use typetour_core::{Error, Result, Transcript};

/// Remove the head of the queue
pub fn dequeue(queue: &mut VecDeque<String>) -> Result<String> {
    queue.pop_front().ok_or(Error::Empty("queue"))
}

/// Evidence of first-in-first-out removal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueReport {
    /// Values enqueued, in order
    pub enqueued: Vec<String>,
    /// The value the first dequeue returned
    pub dequeued: String,
    /// Elements still queued afterwards
    pub remaining: usize,
    /// Narration
    pub transcript: Transcript,
}

/// Enqueue two values and dequeue once: the head is the earliest
/// enqueued
pub fn queue_report() -> Result<QueueReport> {
    let enqueued = vec!["Paul".to_string(), "Kenn".to_string()];
    let mut queue: VecDeque<String> = enqueued.iter().cloned().collect();

    let dequeued = dequeue(&mut queue)?;
    let remaining = queue.len();
    debug!(dequeued = %dequeued, remaining, "queue transaction");

    let mut transcript = Transcript::new();
    transcript.line(format!("The first item off the queue is: {dequeued}."));
    Ok(QueueReport {
        enqueued,
        dequeued,
        remaining,
        transcript,
    })
}
