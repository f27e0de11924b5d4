//! Baseline-vs-fast comparison and a randomized counterexample search.

use crate::chan::compute_hull_fast;
use crate::error::HullError;
use crate::graham::compute_hull_baseline;
use crate::rand::{uniform_grid, GridCfg};
use crate::types::PointSet;

/// Both algorithms return the same vertex sequence (same start, same order).
///
/// A non-converging fast run counts as disagreement; other errors propagate.
pub fn validate_by_comparison(points: &PointSet) -> Result<bool, HullError> {
    let baseline = compute_hull_baseline(points);
    match compute_hull_fast(points) {
        Ok(fast) => Ok(fast == baseline),
        Err(HullError::NonConvergence { .. }) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Randomized sweep configuration.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    /// Points drawn per trial (before deduplication).
    pub size: usize,
    pub trials: usize,
    /// Coordinates are integers in `[0, max_coord]`.
    pub max_coord: u32,
    pub seed: u64,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            size: 10_000,
            trials: 100,
            max_coord: 30_276,
            seed: 0,
        }
    }
}

/// First random grid set on which the two algorithms disagree, if any.
///
/// Trial `i` draws from seed `cfg.seed + i`, so a reported set can be
/// regenerated on its own.
pub fn search_counterexample(cfg: SearchCfg) -> Result<Option<PointSet>, HullError> {
    let grid = GridCfg {
        count: cfg.size,
        max_x: cfg.max_coord,
        max_y: cfg.max_coord,
    };
    for trial in 0..cfg.trials {
        let points = uniform_grid(grid, cfg.seed.wrapping_add(trial as u64))?;
        if !validate_by_comparison(&points)? {
            tracing::info!(trial, points = points.len(), "baseline and fast hull disagree");
            return Ok(Some(points));
        }
        tracing::debug!(trial, points = points.len(), "trial agrees");
    }
    Ok(None)
}
