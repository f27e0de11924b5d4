//! Wall-clock sweep of both hull algorithms over the standard workloads.
//!
//! Sizes double from 10 up to the requested maximum. Each cell is the mean over
//! `repeats` runs on one fixed sample, so rows are comparable across algorithms.

use std::time::Instant;

use anyhow::Result;
use chanhull::api::{compute_hull_baseline, compute_hull_fast, PointSet, Workload};
use polars::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct BenchRow {
    pub workload: &'static str,
    pub size: usize,
    pub hull_size: usize,
    pub baseline_ms: f64,
    pub fast_ms: f64,
    /// Fast result equals the baseline hull.
    pub agrees: bool,
}

/// 10, 20, 40, ... up to and including `max_size`.
pub fn sizes(max_size: usize) -> Vec<usize> {
    std::iter::successors(Some(10usize), |n| n.checked_mul(2))
        .take_while(|&n| n <= max_size)
        .collect()
}

fn mean_ms<T>(repeats: usize, mut run: impl FnMut() -> T) -> (f64, T) {
    let repeats = repeats.max(1);
    let start = Instant::now();
    let mut last = run();
    for _ in 1..repeats {
        last = run();
    }
    (start.elapsed().as_secs_f64() * 1e3 / repeats as f64, last)
}

fn measure(workload: Workload, points: &PointSet, repeats: usize) -> BenchRow {
    let (baseline_ms, baseline) = mean_ms(repeats, || compute_hull_baseline(points));
    let (fast_ms, fast) = mean_ms(repeats, || compute_hull_fast(points));
    let agrees = fast.as_ref().is_ok_and(|hull| *hull == baseline);
    if !agrees {
        tracing::warn!(workload = workload.name(), size = points.len(), "fast hull disagrees");
    }
    BenchRow {
        workload: workload.name(),
        size: points.len(),
        hull_size: baseline.len(),
        baseline_ms,
        fast_ms,
        agrees,
    }
}

pub fn run_sweep(max_size: usize, repeats: usize, seed: u64) -> Result<Vec<BenchRow>> {
    let mut rows = Vec::new();
    for workload in Workload::ALL {
        for n in sizes(max_size) {
            let points = workload.sample(n, seed)?;
            let row = measure(workload, &points, repeats);
            tracing::info!(
                workload = row.workload,
                size = row.size,
                hull_size = row.hull_size,
                baseline_ms = row.baseline_ms,
                fast_ms = row.fast_ms,
                "bench"
            );
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Columns `workload,size,hull_size,baseline_ms,fast_ms,agrees`.
pub fn to_frame(rows: &[BenchRow]) -> Result<DataFrame> {
    let workload: Vec<&str> = rows.iter().map(|r| r.workload).collect();
    let size: Vec<u64> = rows.iter().map(|r| r.size as u64).collect();
    let hull_size: Vec<u64> = rows.iter().map(|r| r.hull_size as u64).collect();
    let baseline_ms: Vec<f64> = rows.iter().map(|r| r.baseline_ms).collect();
    let fast_ms: Vec<f64> = rows.iter().map(|r| r.fast_ms).collect();
    let agrees: Vec<bool> = rows.iter().map(|r| r.agrees).collect();
    Ok(df!(
        "workload" => workload,
        "size" => size,
        "hull_size" => hull_size,
        "baseline_ms" => baseline_ms,
        "fast_ms" => fast_ms,
        "agrees" => agrees
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_double_up_to_the_limit() {
        assert_eq!(sizes(100), vec![10, 20, 40, 80]);
        assert_eq!(sizes(80), vec![10, 20, 40, 80]);
        assert!(sizes(9).is_empty());
    }

    #[test]
    fn small_sweep_agrees_everywhere() {
        let rows = run_sweep(40, 2, 11).unwrap();
        assert_eq!(rows.len(), 9);
        assert!(rows.iter().all(|r| r.agrees));
        let low: Vec<&BenchRow> = rows.iter().filter(|r| r.workload == "low_hull").collect();
        assert_eq!(low[2].hull_size, 40f64.ln().floor() as usize + 4);
    }

    #[test]
    fn frame_has_the_documented_columns() {
        let rows = run_sweep(20, 1, 0).unwrap();
        let df = to_frame(&rows).unwrap();
        let names: Vec<String> = df.get_columns().iter().map(|s| s.name().to_string()).collect();
        assert_eq!(
            names,
            ["workload", "size", "hull_size", "baseline_ms", "fast_ms", "agrees"]
        );
        assert_eq!(df.height(), 6);
    }
}
