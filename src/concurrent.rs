//! Bounded-parallel execution of independent task batches.
//!
//! [`run_concurrently`] drains a finite batch of independent tasks across a
//! fixed set of worker threads and returns once every task has finished.
//! Callers get a hard upper bound on simultaneously active tasks regardless
//! of batch size.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Mutex;
use std::thread;

/// Errors from batch execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    /// The requested worker count was zero; at least one worker is required.
    InvalidConcurrency(usize),
    /// One or more tasks panicked. The batch still ran to completion.
    TaskFailure {
        /// Number of tasks that panicked.
        failed: usize,
        /// Message captured from the first collected panic.
        first: String,
    },
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::InvalidConcurrency(n) => {
                write!(f, "invalid concurrency {n}: at least one worker is required")
            }
            BatchError::TaskFailure { failed, first } => {
                write!(f, "{failed} task(s) failed, first failure: {first}")
            }
        }
    }
}

impl std::error::Error for BatchError {}

/// Runs every task in `tasks` using at most `max_concurrency` worker threads.
///
/// Workers pull tasks from the shared sequence until it is exhausted, so each
/// task runs exactly once. The call blocks until the whole batch has drained.
/// Tasks may finish in any order; callers must not rely on sequence order.
///
/// A panicking task does not cancel in-flight or queued work. The batch still
/// drains completely, then the call reports [`BatchError::TaskFailure`] with
/// the failure count and the first captured panic message. An empty batch
/// completes immediately.
///
/// # Errors
///
/// Returns [`BatchError::InvalidConcurrency`] if `max_concurrency` is zero,
/// before dispatching any task.
pub fn run_concurrently<I>(tasks: I, max_concurrency: usize) -> Result<(), BatchError>
where
    I: IntoIterator,
    I::Item: FnOnce() + Send,
    I::IntoIter: Send,
{
    if max_concurrency == 0 {
        return Err(BatchError::InvalidConcurrency(max_concurrency));
    }

    #[cfg(feature = "logging")]
    log::debug!("running task batch with up to {max_concurrency} workers");

    let queue = Mutex::new(tasks.into_iter());
    let failures: Mutex<Vec<String>> = Mutex::new(Vec::new());

    thread::scope(|s| {
        for _ in 0..max_concurrency {
            s.spawn(|| {
                loop {
                    // Hold the queue lock only while pulling the next task,
                    // never while running one.
                    let Some(task) = queue.lock().unwrap().next() else {
                        break;
                    };
                    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(task)) {
                        failures.lock().unwrap().push(panic_message(payload.as_ref()));
                    }
                }
            });
        }
    });

    let failures = failures.into_inner().unwrap();
    if failures.is_empty() {
        return Ok(());
    }

    #[cfg(feature = "logging")]
    log::warn!("task batch finished with {} failure(s)", failures.len());

    let failed = failures.len();
    let first = failures.into_iter().next().unwrap();
    Err(BatchError::TaskFailure { failed, first })
}

/// Extracts a human-readable message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "task panicked".to_string()
    }
}
