//! Show hull sizes and Chan attempt counts for the built-in workloads.
//!
//! Usage:
//!   cargo run -p chanhull --example hull_demo
//!   cargo run -p chanhull --example hull_demo -- 50000
//!
//! Prints one line per workload with the hull size, the number of restarts the
//! driver needed and whether both algorithms agree.

use chanhull::api::{compute_hull_baseline, compute_hull_fast_with, ChanCfg, Workload};

fn main() {
    let n = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(10_000);
    for workload in Workload::ALL {
        let points = workload.sample(n, 2025).unwrap();
        let report = compute_hull_fast_with(&points, ChanCfg::default()).unwrap();
        let baseline = compute_hull_baseline(&points);
        println!(
            "{}: n={}, h={}, attempts={}, k={}, agrees={}",
            workload.name(),
            points.len(),
            report.hull.len(),
            report.attempts,
            report.final_k,
            report.hull == baseline
        );
    }
}
