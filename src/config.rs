//! Hull construction configuration and builder
//!
//! Describes how [`build_hull_with_config`](crate::build_hull_with_config)
//! should execute: how many workers to partition across and below which input
//! size parallelism is not worth the thread start-up.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{HullError, Result};

/// Upper bound on the worker count accepted by the builder
pub const MAX_WORKERS: usize = 1024;

/// Default input size below which the scan runs sequentially
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

/// Execution settings for hull construction
///
/// # Example
///
/// ```rust
/// use graham_hull::*;
///
/// let config = HullConfigBuilder::new()
///     .worker_count(4)
///     .unwrap()
///     .parallel_threshold(10_000)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.worker_count, 4);
///
/// # #[cfg(feature = "serde")]
/// # {
/// let json = serde_json::to_string(&config).unwrap();
/// let restored: HullConfig = serde_json::from_str(&json).unwrap();
/// assert_eq!(config, restored);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HullConfig {
    /// Number of workers (and threads) the input is partitioned across
    pub worker_count: usize,

    /// Inputs with fewer points than this are scanned sequentially
    ///
    /// - 0: always partition when more than one worker is configured
    /// - 1024: default, small inputs finish faster without spawning threads
    pub parallel_threshold: usize,
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            worker_count: default_worker_count(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Builder for [`HullConfig`] with validation
#[derive(Debug, Clone)]
pub struct HullConfigBuilder {
    worker_count: Option<usize>,
    parallel_threshold: usize,
}

impl HullConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - worker_count: number of logical CPUs
    /// - parallel_threshold: 1024 points
    pub fn new() -> Self {
        Self {
            worker_count: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Set the number of workers
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `count` is zero
    /// - `InvalidConfig` if `count` exceeds [`MAX_WORKERS`]
    pub fn worker_count(mut self, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(HullError::InvalidArgument { worker_count: count });
        }
        if count > MAX_WORKERS {
            return Err(HullError::InvalidConfig(format!(
                "worker count must be <= {} (got {})",
                MAX_WORKERS, count
            )));
        }
        self.worker_count = Some(count);
        Ok(self)
    }

    /// Set the input size below which the sequential scan is used
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Build the configuration
    ///
    /// If no worker count was provided, uses the number of logical CPUs.
    pub fn build(self) -> Result<HullConfig> {
        Ok(HullConfig {
            worker_count: self.worker_count.unwrap_or_else(default_worker_count),
            parallel_threshold: self.parallel_threshold,
        })
    }
}

impl Default for HullConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn default_worker_count() -> usize {
    num_cpus::get().clamp(1, MAX_WORKERS)
}
