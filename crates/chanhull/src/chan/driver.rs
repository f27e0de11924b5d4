//! Adaptive driver: guess the group size, wrap, square the guess on failure.
//!
//! Flow per attempt
//! - `Growing(k)`: build sub-hulls of at most k points.
//! - `Stepping`: wrap from the anchor with `next_hull_vertex` for at most
//!   `n + 1` steps. The walk closes when it returns to the anchor; it stalls
//!   when it reaches a vertex it already placed (that walk can never close).
//! - Otherwise restart with `k ← min(k², n)`, or report non-convergence when
//!   even the saturated group size failed twice in a row.
//!
//! All per-attempt state (sub-hulls, partial hull, visited map) lives on this
//! call's stack and is dropped before the next attempt.

use std::collections::HashSet;

use crate::error::HullError;
use crate::orient::anchor;
use crate::types::{Hull, Point, PointKey, PointSet};

use super::step::next_hull_vertex;
use super::subhull::build_sub_hulls;
use super::types::{ChanCfg, ChanReport, SubHull};

/// Hull via Chan's algorithm with the default configuration.
///
/// `Err(HullError::NonConvergence { .. })` is the "failed" outcome; for
/// finite, duplicate-free input it is a safety valve that is not expected to
/// trigger.
pub fn compute_hull_fast(points: &PointSet) -> Result<Hull, HullError> {
    compute_hull_fast_with(points, ChanCfg::default()).map(|report| report.hull)
}

/// Hull via Chan's algorithm plus run statistics.
pub fn compute_hull_fast_with(points: &PointSet, cfg: ChanCfg) -> Result<ChanReport, HullError> {
    let pts = points.as_slice();
    let n = pts.len();
    let Some(first) = anchor(pts) else {
        return Ok(ChanReport {
            hull: Hull::default(),
            attempts: 0,
            final_k: 0,
            sub_hulls: 0,
            steps: 0,
        });
    };

    let mut restart = RestartPolicy::new(n);
    let mut k = cfg.initial_k.max(2);
    let mut attempts = 0;
    let mut steps = 0;
    loop {
        attempts += 1;
        let sub_hulls = build_sub_hulls(pts, k);
        let attempt = wrap(first, &sub_hulls, n)?;
        steps += attempt.steps;
        tracing::debug!(
            attempt = attempts,
            k,
            sub_hulls = sub_hulls.len(),
            steps = attempt.steps,
            outcome = attempt.outcome.label(),
            "chan attempt"
        );
        if let Outcome::Closed(vertices) = attempt.outcome {
            return Ok(ChanReport {
                hull: Hull::from_vertices(vertices),
                attempts,
                final_k: k,
                sub_hulls: sub_hulls.len(),
                steps,
            });
        }
        match restart.next_k(k) {
            Some(next) => k = next,
            None => {
                tracing::warn!(attempts, k, n, "hull did not close at maximal group size");
                return Err(HullError::NonConvergence { attempts, k });
            }
        }
    }
}

/// Restart decision after an attempt that did not close.
#[derive(Debug)]
struct RestartPolicy {
    n: usize,
    saturated: bool,
}

impl RestartPolicy {
    fn new(n: usize) -> Self {
        Self {
            n,
            saturated: false,
        }
    }

    /// Group size for the next attempt, or `None` once an attempt with
    /// `k² > n - 1` has failed for the second time.
    fn next_k(&mut self, k: usize) -> Option<usize> {
        let squared = k.saturating_mul(k);
        if squared > self.n.saturating_sub(1) {
            if self.saturated {
                return None;
            }
            self.saturated = true;
        }
        Some(squared.min(self.n))
    }
}

#[derive(Debug)]
enum Outcome {
    Closed(Vec<Point>),
    /// A vertex was placed twice.
    Stalled,
    /// Step budget used up without returning to the anchor.
    Exhausted,
}

impl Outcome {
    fn label(&self) -> &'static str {
        match self {
            Outcome::Closed(_) => "closed",
            Outcome::Stalled => "stalled",
            Outcome::Exhausted => "exhausted",
        }
    }
}

#[derive(Debug)]
struct Attempt {
    outcome: Outcome,
    steps: usize,
}

/// One wrapping pass from `first` over fixed sub-hulls.
fn wrap(first: Point, sub_hulls: &[SubHull], n: usize) -> Result<Attempt, HullError> {
    let budget = n + 1;
    let mut hull = vec![first];
    let mut visited: HashSet<PointKey> = HashSet::new();
    let mut current = first;
    let mut steps = 0;
    while steps < budget {
        let next = next_hull_vertex(&current, sub_hulls)?;
        steps += 1;
        if next == first {
            return Ok(Attempt {
                outcome: Outcome::Closed(hull),
                steps,
            });
        }
        hull.push(next);
        if !visited.insert(PointKey::from(&next)) {
            tracing::trace!(x = next.x, y = next.y, steps, "revisited hull vertex");
            return Ok(Attempt {
                outcome: Outcome::Stalled,
                steps,
            });
        }
        current = next;
    }
    Ok(Attempt {
        outcome: Outcome::Exhausted,
        steps,
    })
}
