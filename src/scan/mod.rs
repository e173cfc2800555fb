//! Graham scan hull construction
//!
//! Sequential scanning, positional partitioning, the per-call worker pool and
//! the partition-and-merge pipeline built on top of them.

mod parallel;
mod partition;
mod sequential;
mod workers;

pub use parallel::{build_hull_parallel, build_hull_parallel_with_report, ParallelReport, Stage};
pub use partition::partition;
pub use sequential::build_hull;
pub use workers::{run_workers, WORKER_THREAD_PREFIX};

use crate::config::HullConfig;
use crate::error::Result;
use crate::geometry::Point;
use crate::hull::Hull;

/// Build a hull using the execution strategy described by `config`
///
/// Runs sequentially when the configuration asks for a single worker or the
/// input is smaller than its parallel threshold, otherwise partitions across
/// `config.worker_count` workers. Fewer points than workers also falls back to
/// the sequential scan.
pub fn build_hull_with_config(points: &[Point], config: &HullConfig) -> Result<Hull> {
    if config.worker_count <= 1
        || points.len() < config.parallel_threshold
        || points.len() < config.worker_count
    {
        tracing::debug!(
            points = points.len(),
            threshold = config.parallel_threshold,
            "using sequential scan"
        );
        return Ok(build_hull(points));
    }
    build_hull_parallel(points, config.worker_count)
}
