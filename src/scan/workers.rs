//! Per-call worker pool
//!
//! Spawns exactly one thread per requested worker, runs one job per worker to
//! completion, joins, and tears the threads down again. Each job writes into
//! its own result slot, so collecting results needs no lock.

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::error::{HullError, Result};

/// Thread name prefix for hull workers
pub const WORKER_THREAD_PREFIX: &str = "hull-worker";

/// Run `job` once per input on a freshly built pool of `inputs.len()` threads
///
/// Blocks until every job has finished and every worker thread has been
/// joined, so no worker outlives the call. Results come back in input order.
/// A panicking job propagates the panic to the caller.
///
/// # Errors
///
/// - `InvalidArgument` if `inputs` is empty
/// - `WorkerPool` if the operating system refuses to start the threads
pub fn run_workers<I, R, F>(inputs: &[I], job: F) -> Result<Vec<R>>
where
    I: Sync,
    R: Send,
    F: Fn(usize, &I) -> R + Sync,
{
    run_workers_with_exit(inputs, job, |_| {})
}

/// [`run_workers`] with a hook called on each worker thread as it exits
fn run_workers_with_exit<I, R, F, H>(inputs: &[I], job: F, on_exit: H) -> Result<Vec<R>>
where
    I: Sync,
    R: Send,
    F: Fn(usize, &I) -> R + Sync,
    H: Fn(usize) + Send + Sync + 'static,
{
    let worker_count = inputs.len();
    if worker_count == 0 {
        return Err(HullError::InvalidArgument { worker_count });
    }

    // Scoped build: the threads are joined before build_scoped returns
    let results = ThreadPoolBuilder::new()
        .num_threads(worker_count)
        .thread_name(|i| format!("{}-{}", WORKER_THREAD_PREFIX, i))
        .exit_handler(move |i| {
            tracing::trace!(worker = i, "worker thread exiting");
            on_exit(i);
        })
        .build_scoped(
            |thread| thread.run(),
            |pool| {
                tracing::trace!(workers = worker_count, "worker pool started");
                // One job per thread: split down to single items
                pool.install(|| {
                    inputs
                        .par_iter()
                        .with_max_len(1)
                        .enumerate()
                        .map(|(worker, input)| job(worker, input))
                        .collect::<Vec<R>>()
                })
            },
        )
        .map_err(|e| HullError::WorkerPool(e.to_string()))?;

    tracing::trace!(workers = worker_count, "worker pool joined");
    Ok(results)
}
