//! Parallel planar convex hulls
//!
//! Computes the convex hull of an unordered set of 2-D points with a Graham
//! scan. The parallel variant partitions the input across a fixed number of
//! workers, scans each partition independently, then runs one more scan over
//! the pooled partial hulls to get the global hull.
//!
//! # Quick Start
//!
//! ```rust
//! use graham_hull::*;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(4.0, 0.0),
//!     Point::new(4.0, 4.0),
//!     Point::new(0.0, 4.0),
//!     Point::new(2.0, 2.0),
//! ];
//!
//! let hull = build_hull(&points);
//! let parallel = build_hull_parallel(&points, 2).unwrap();
//! assert!(hull.same_vertex_set(&parallel));
//! assert_eq!(hull.area(), 16.0);
//! ```
//!
//! # Features
//!
//! - `serde`: Enables serialization support for hulls and configuration

// Modules
pub mod error;
pub mod config;
pub mod geometry;
pub mod hull;
pub mod scan;

// Re-export core types for convenience
pub use error::{HullError, Result};
pub use config::{HullConfig, HullConfigBuilder};
pub use geometry::{orientation, polar_angle, polar_radius, Point, Turn};
pub use hull::Hull;
pub use scan::{
    build_hull, build_hull_parallel, build_hull_parallel_with_report, build_hull_with_config,
    ParallelReport, Stage,
};

// Re-export glam::DVec2 for convenience
pub use glam::DVec2;
