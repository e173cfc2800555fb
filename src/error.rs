//! Error types for hull construction

use thiserror::Error;

/// Errors that can occur while building a hull or its configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HullError {
    /// A worker count of zero was requested
    #[error("invalid argument: worker count must be at least 1 (got {worker_count})")]
    InvalidArgument {
        /// The rejected worker count
        worker_count: usize,
    },
    /// Partitioning would leave a worker without any points
    #[error(
        "partition {worker} of {worker_count} is empty ({point_count} points cannot feed {worker_count} workers)"
    )]
    EmptyPartition {
        /// Index of the worker whose chunk is empty
        worker: usize,
        /// Number of workers requested
        worker_count: usize,
        /// Number of input points
        point_count: usize,
    },
    /// The per-call worker pool could not be started
    #[error("worker pool failed: {0}")]
    WorkerPool(String),
    /// Configuration validation failed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for hull operations
pub type Result<T> = std::result::Result<T, HullError>;
