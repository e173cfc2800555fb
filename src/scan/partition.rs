//! Positional partitioning of a point set across workers

use crate::error::{HullError, Result};
use crate::geometry::Point;

/// Split `points` into `worker_count` contiguous chunks
///
/// Every chunk but the last holds `points.len() / worker_count` points; the
/// last one absorbs the remainder. Chunks are borrowed views into `points`.
///
/// # Errors
///
/// - `InvalidArgument` if `worker_count` is zero
/// - `EmptyPartition` if any worker would receive no points, which happens
///   whenever there are fewer points than workers
pub fn partition(points: &[Point], worker_count: usize) -> Result<Vec<&[Point]>> {
    if worker_count == 0 {
        return Err(HullError::InvalidArgument { worker_count });
    }

    let chunk_len = points.len() / worker_count;
    if chunk_len == 0 {
        // With chunk_len 0 the first worker is always the one left empty
        return Err(HullError::EmptyPartition {
            worker: 0,
            worker_count,
            point_count: points.len(),
        });
    }

    let last_start = chunk_len * (worker_count - 1);
    let mut chunks: Vec<&[Point]> = points[..last_start].chunks_exact(chunk_len).collect();
    chunks.push(&points[last_start..]);
    Ok(chunks)
}
