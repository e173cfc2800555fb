//! Example: sequential vs parallel hull of a random point cloud
//!
//! Run with `RUST_LOG=graham_hull=debug` to see the pipeline stages.

use graham_hull::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Parallel Convex Hull Example");
    println!("============================\n");

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let points: Vec<Point> = (0..1_000_000)
        .map(|_| Point::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
        .collect();
    println!("Points: {}", points.len());

    let start = Instant::now();
    let sequential = build_hull(&points);
    let sequential_time = start.elapsed();
    println!("Sequential: {} vertices in {:?}", sequential.len(), sequential_time);

    let config = HullConfig::default();
    let start = Instant::now();
    let report = match build_hull_parallel_with_report(&points, config.worker_count) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("parallel hull failed: {}", e);
            std::process::exit(1);
        }
    };
    let parallel_time = start.elapsed();

    println!(
        "Parallel:   {} vertices in {:?} ({} workers, merge pool of {} points)",
        report.hull.len(),
        parallel_time,
        report.partition_sizes.len(),
        report.pool_size
    );
    println!(
        "Speed-up:   {:.2}x",
        sequential_time.as_secs_f64() / parallel_time.as_secs_f64()
    );
    println!("Same hull:  {}", report.hull.same_vertex_set(&sequential));
    println!("Hull area:  {:.3}", report.hull.area());
}
