use crate::graham::graham_scan;
use crate::types::Point;

use super::types::SubHull;

/// Split `points` into consecutive groups of `k` (the last may be shorter) and
/// scan each group. Empty scans are skipped; they cannot occur for `k >= 1`.
pub fn build_sub_hulls(points: &[Point], k: usize) -> Vec<SubHull> {
    points
        .chunks(k.max(1))
        .map(graham_scan)
        .filter(|hull| !hull.is_empty())
        .collect()
}
