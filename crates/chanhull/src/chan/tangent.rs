//! Tangent from an external point to a convex sub-hull.
//!
//! Seen from `source`, the angles of the vertices of a convex polygon form a
//! cyclically unimodal sequence. The wanted vertex is its minimum: the vertex
//! `v` with every other vertex left of (or on) the ray `source → v`, i.e. the
//! next hull vertex when wrapping counter-clockwise. If `source` is itself a
//! vertex, the answer is its successor.

use crate::error::HullError;
use crate::orient::{cross, is_concave, squared_distance};
use crate::types::Point;

/// Tangent vertex of `poly` as seen from `source`.
///
/// `poly` must be convex and counter-clockwise, as produced by the baseline
/// scan. `source` must not lie strictly inside it.
pub fn tangent(source: &Point, poly: &[Point]) -> Result<Point, HullError> {
    match poly {
        [] => Err(HullError::EmptySubHull),
        [only] => Ok(*only),
        [a, b] => Ok(tangent_of_pair(source, a, b)),
        _ => Ok(tangent_search(source, poly)),
    }
}

/// Collinear ties go to the farther point, so the walk never stops short on
/// a point between `source` and a farther collinear vertex.
fn tangent_of_pair(source: &Point, a: &Point, b: &Point) -> Point {
    let turn = cross(source, a, b);
    if turn > 0.0 {
        *a
    } else if turn < 0.0 {
        *b
    } else if squared_distance(source, a) >= squared_distance(source, b) {
        *a
    } else {
        *b
    }
}

#[inline]
fn vertex(poly: &[Point], i: usize) -> &Point {
    &poly[i % poly.len()]
}

/// Binary search over the cyclic vertex order, `poly.len() >= 3`.
///
/// The window `[lower, upper]` (with `upper` up to `m`, meaning vertex 0 again)
/// always has the answer strictly inside. Which half keeps it follows from
/// whether the angle falls or rises along the edge leaving `lower` and along
/// the edge leaving `mid`, and whether `mid` is angularly past `lower`. These
/// predicates belong to the current window and are recomputed every round.
fn tangent_search(source: &Point, poly: &[Point]) -> Point {
    let m = poly.len();
    let at = |i: usize| vertex(poly, i);
    // Angle seen from `source` strictly increases along edge i → i+1.
    let rising = |i: usize| is_concave(source, at(i), at(i + 1));

    if at(0) == source {
        return *at(1);
    }
    if rising(0) && !is_concave(source, at(m - 1), at(0)) {
        return *at(0);
    }

    let (mut lower, mut upper) = (0, m);
    while upper - lower >= 2 {
        let mid = (lower + upper) / 2;
        if at(mid) == source {
            return *at(mid + 1);
        }
        let mid_rising = rising(mid);
        if mid_rising && !is_concave(source, at(mid - 1), at(mid)) {
            return *at(mid);
        }

        // A flat edge (collinear with `source`) at `lower` counts as falling.
        let lower_falling = cross(source, at(lower + 1), at(lower)) >= 0.0;
        if lower_falling {
            if mid_rising || is_concave(source, at(lower), at(mid)) {
                upper = mid;
            } else {
                lower = mid;
            }
        } else if !mid_rising {
            lower = mid;
        } else if cross(source, at(lower), at(mid)) < 0.0 {
            upper = mid;
        } else {
            lower = mid;
        }
    }

    // Only reached when `poly` is not strictly convex.
    if at(lower) == source {
        *at(lower + 1)
    } else {
        *at(lower)
    }
}
