//! Baseline hull scan (Graham-style, angular sweep around the anchor).
//!
//! Used on its own as the O(n log n) reference and, per group, as the
//! sub-hull primitive of the adaptive driver.

use std::cmp::Ordering;

use crate::orient::{anchor, is_concave, polar_angle, squared_distance};
use crate::types::{Hull, Point, PointSet};

/// Hull of any point set. Fewer than 3 points, or collinear input, yield the
/// degenerate subset (at most two extreme points) rather than an error.
pub fn compute_hull_baseline(points: &PointSet) -> Hull {
    Hull::from_vertices(graham_scan(points.as_slice()))
}

/// Counter-clockwise hull of `points` starting at the anchor.
///
/// Points are swept by polar angle around the anchor; exact angle ties are
/// ordered nearest first. The stack keeps strict left turns only, which also
/// collapses collinear runs. Two fix-ups handle what the sweep cannot see:
/// a collinear run on the first ray (second vertex) and on the last ray
/// (closing vertex).
pub fn graham_scan(points: &[Point]) -> Vec<Point> {
    let Some(origin) = anchor(points) else {
        return Vec::new();
    };
    let mut keyed: Vec<(f64, f64, Point)> = points
        .iter()
        .map(|p| (polar_angle(&origin, p), squared_distance(&origin, p), *p))
        .collect();
    keyed.sort_by(|a, b| match a.0.total_cmp(&b.0) {
        Ordering::Equal => a.1.total_cmp(&b.1),
        o => o,
    });

    let mut stack: Vec<Point> = Vec::with_capacity(keyed.len());
    for (_, _, p) in keyed {
        while stack.len() >= 3 {
            let top = stack.len() - 1;
            if is_concave(&stack[top - 1], &stack[top], &p) {
                break;
            }
            stack.pop();
        }
        stack.push(p);
    }

    if stack.len() >= 3 && !is_concave(&stack[0], &stack[1], &stack[2]) {
        stack.remove(1);
    }
    if stack.len() >= 3 {
        let last = stack.len() - 1;
        if !is_concave(&stack[last - 1], &stack[last], &stack[0]) {
            stack.pop();
        }
    }
    stack
}
