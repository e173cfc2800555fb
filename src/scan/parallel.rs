//! Partition-and-merge hull construction
//!
//! The input is cut into contiguous chunks, one per worker. Each worker runs
//! the sequential scan over its chunk; the partial hulls are pooled after the
//! join and a final scan over the pool produces the global hull. A vertex of a
//! partial hull can still be interior to the whole set, so the merge pass is a
//! full hull computation and not a concatenation.

use std::fmt;

use crate::error::Result;
use crate::geometry::Point;
use crate::hull::Hull;
use crate::scan::partition::partition;
use crate::scan::sequential::build_hull;
use crate::scan::workers::run_workers;

/// Progress of a parallel hull computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Nothing done yet
    Idle,
    /// Input split into chunks
    Partitioned,
    /// Workers scanning their chunks
    WorkersRunning,
    /// All partial hulls gathered into the pool
    Collected,
    /// Final scan over the pool
    Merging,
    /// Global hull available
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Idle => "idle",
            Stage::Partitioned => "partitioned",
            Stage::WorkersRunning => "workers-running",
            Stage::Collected => "collected",
            Stage::Merging => "merging",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Outcome of a parallel run, with the sizes of the intermediate results
#[derive(Debug, Clone, PartialEq)]
pub struct ParallelReport {
    /// The global hull
    pub hull: Hull,
    /// Number of points handed to each worker
    pub partition_sizes: Vec<usize>,
    /// Number of vertices in each worker's partial hull
    pub partial_hull_sizes: Vec<usize>,
    /// Number of points fed to the merge pass
    pub pool_size: usize,
    /// Last stage reached
    pub stage: Stage,
}

/// Build the convex hull of `points` with `worker_count` parallel workers
///
/// The vertex set equals that of [`build_hull`] on the same input.
///
/// # Errors
///
/// - `InvalidArgument` if `worker_count` is zero, before any work is scheduled
/// - `EmptyPartition` if there are fewer points than workers
/// - `WorkerPool` if the worker threads cannot be started
///
/// # Example
///
/// ```rust
/// use graham_hull::{build_hull_parallel, Point};
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(4.0, 0.0),
///     Point::new(4.0, 4.0),
///     Point::new(0.0, 4.0),
///     Point::new(2.0, 2.0),
/// ];
///
/// let hull = build_hull_parallel(&points, 2).unwrap();
/// assert_eq!(hull.len(), 4);
/// assert!(build_hull_parallel(&points, 0).is_err());
/// ```
pub fn build_hull_parallel(points: &[Point], worker_count: usize) -> Result<Hull> {
    build_hull_parallel_with_report(points, worker_count).map(|report| report.hull)
}

/// Same as [`build_hull_parallel`], also reporting partition and pool sizes
pub fn build_hull_parallel_with_report(
    points: &[Point],
    worker_count: usize,
) -> Result<ParallelReport> {
    let mut stage = Stage::Idle;
    let span = tracing::debug_span!("hull_parallel", points = points.len(), workers = worker_count);
    let _guard = span.enter();

    let chunks = partition(points, worker_count)?;
    let partition_sizes: Vec<usize> = chunks.iter().map(|c| c.len()).collect();
    advance(&mut stage, Stage::Partitioned);

    advance(&mut stage, Stage::WorkersRunning);
    let partials = run_workers(&chunks, |worker, chunk| {
        let local = build_hull(chunk);
        tracing::trace!(worker, chunk = chunk.len(), hull = local.len(), "partial hull");
        local
    })?;

    let partial_hull_sizes: Vec<usize> = partials.iter().map(Hull::len).collect();
    let pool: Vec<Point> = partials.into_iter().flat_map(Hull::into_vertices).collect();
    advance(&mut stage, Stage::Collected);
    tracing::debug!(pool = pool.len(), "partial hulls collected");

    advance(&mut stage, Stage::Merging);
    let hull = build_hull(&pool);
    advance(&mut stage, Stage::Done);
    tracing::debug!(vertices = hull.len(), "merge pass finished");

    Ok(ParallelReport {
        hull,
        partition_sizes,
        partial_hull_sizes,
        pool_size: pool.len(),
        stage,
    })
}

fn advance(stage: &mut Stage, next: Stage) {
    debug_assert!(next > *stage, "stage {} cannot follow {}", next, stage);
    tracing::trace!(from = %stage, to = %next, "stage transition");
    *stage = next;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HullError;

    fn square_with_center() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
            Point::new(2.0, 2.0),
        ]
    }

    #[test]
    fn test_square_any_worker_count() {
        let points = square_with_center();
        let expected = build_hull(&points);
        for workers in 1..=5 {
            let hull = build_hull_parallel(&points, workers).unwrap();
            assert!(
                hull.same_vertex_set(&expected),
                "{} workers gave {:?}",
                workers,
                hull
            );
            assert!(!hull.vertices().contains(&Point::new(2.0, 2.0)));
        }
    }

    #[test]
    fn test_zero_workers() {
        let points = square_with_center();
        assert_eq!(
            build_hull_parallel(&points, 0),
            Err(HullError::InvalidArgument { worker_count: 0 })
        );
    }

    #[test]
    fn test_more_workers_than_points() {
        let points = square_with_center();
        assert!(matches!(
            build_hull_parallel(&points, 6),
            Err(HullError::EmptyPartition { worker_count: 6, point_count: 5, .. })
        ));
    }

    #[test]
    fn test_partial_vertex_interior_to_global_set() {
        // (1, 1) is extreme in the first chunk but inside the second chunk's hull
        let points = vec![
            Point::new(1.0, 1.0),
            Point::new(2.0, 1.5),
            Point::new(1.5, 2.0),
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(0.0, 5.0),
        ];
        let report = build_hull_parallel_with_report(&points, 2).unwrap();
        assert_eq!(report.partial_hull_sizes, vec![3, 3]);
        assert_eq!(report.pool_size, 6);
        assert_eq!(
            report.hull.vertices(),
            &[Point::new(0.0, 0.0), Point::new(5.0, 0.0), Point::new(0.0, 5.0)]
        );
    }

    #[test]
    fn test_report_sizes() {
        let points: Vec<Point> = (0..20)
            .map(|i| {
                let t = i as f64 * 0.3;
                Point::new(t.cos() * (1.0 + i as f64), t.sin() * (1.0 + i as f64))
            })
            .collect();
        let report = build_hull_parallel_with_report(&points, 3).unwrap();
        assert_eq!(report.partition_sizes, vec![6, 6, 8]);
        assert_eq!(report.partial_hull_sizes.len(), 3);
        assert_eq!(report.pool_size, report.partial_hull_sizes.iter().sum::<usize>());
        assert_eq!(report.stage, Stage::Done);
        assert!(report.hull.same_vertex_set(&build_hull(&points)));
    }

    #[test]
    fn test_stage_order() {
        assert!(Stage::Idle < Stage::Partitioned);
        assert!(Stage::Collected < Stage::Merging);
        assert_eq!(Stage::WorkersRunning.to_string(), "workers-running");
    }
}
