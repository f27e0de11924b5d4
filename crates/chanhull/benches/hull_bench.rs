//! Criterion benches: baseline scan vs Chan's algorithm per workload.
//!
//! - uniform: random grid points, hull size grows slowly with n.
//! - high_hull: a fifth of the points on the hull (favours the baseline).
//! - low_hull: about ln n hull vertices (favours the output-sensitive driver).
//!
//! Results live under `target/criterion`. The CLI `bench` subcommand writes a
//! single-shot CSV of the same sweep for plotting.

use chanhull::api::{compute_hull_baseline, compute_hull_fast, Workload};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn bench_hulls(c: &mut Criterion) {
    for workload in Workload::ALL {
        let mut group = c.benchmark_group(workload.name());
        group.sample_size(20);
        for n in SIZES {
            let points = workload.sample(n, 42).unwrap();
            group.bench_with_input(BenchmarkId::new("baseline", n), &points, |b, pts| {
                b.iter(|| compute_hull_baseline(pts))
            });
            group.bench_with_input(BenchmarkId::new("fast", n), &points, |b, pts| {
                b.iter(|| compute_hull_fast(pts).unwrap())
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_hulls);
criterion_main!(benches);
