use crate::error::HullError;
use crate::orient::{cross, squared_distance};
use crate::types::Point;

use super::tangent::tangent;
use super::types::SubHull;

/// Next hull vertex after `source` when wrapping counter-clockwise.
///
/// Takes the tangent of every sub-hull and keeps the most clockwise one as seen
/// from `source`; collinear candidates resolve to the farther point. This is a
/// total order for a fixed `source`, so the scan order does not matter.
pub fn next_hull_vertex(source: &Point, sub_hulls: &[SubHull]) -> Result<Point, HullError> {
    let (first, rest) = sub_hulls.split_first().ok_or(HullError::EmptySubHull)?;
    let mut best = tangent(source, first)?;
    for poly in rest {
        let candidate = tangent(source, poly)?;
        if more_extreme(source, &best, &candidate) {
            best = candidate;
        }
    }
    Ok(best)
}

#[inline]
fn more_extreme(source: &Point, best: &Point, candidate: &Point) -> bool {
    let turn = cross(source, best, candidate);
    turn < 0.0
        || (turn == 0.0 && squared_distance(source, best) < squared_distance(source, candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn no_sub_hulls_is_an_error() {
        assert_eq!(
            next_hull_vertex(&pt(0.0, 0.0), &[]),
            Err(HullError::EmptySubHull)
        );
    }

    #[test]
    fn picks_the_most_clockwise_tangent() {
        let s = pt(0.0, 0.0);
        let subs = vec![
            vec![pt(1.0, 3.0), pt(0.0, 4.0)],
            vec![pt(5.0, 1.0), pt(4.0, 2.0), pt(3.0, 1.5)],
            vec![pt(2.0, 2.0)],
        ];
        assert_eq!(next_hull_vertex(&s, &subs), Ok(pt(5.0, 1.0)));
        // Order of sub-hulls is irrelevant.
        let reversed: Vec<SubHull> = subs.into_iter().rev().collect();
        assert_eq!(next_hull_vertex(&s, &reversed), Ok(pt(5.0, 1.0)));
    }

    #[test]
    fn collinear_candidates_resolve_to_the_farthest() {
        let s = pt(0.0, 0.0);
        let subs = vec![
            vec![pt(1.0, 0.0)],
            vec![pt(3.0, 0.0)],
            vec![pt(2.0, 0.0)],
            vec![pt(1.0, 1.0)],
        ];
        assert_eq!(next_hull_vertex(&s, &subs), Ok(pt(3.0, 0.0)));
    }

    #[test]
    fn source_as_a_singleton_sub_hull_never_wins() {
        let s = pt(0.0, 0.0);
        let subs = vec![vec![s], vec![pt(1.0, 1.0)]];
        assert_eq!(next_hull_vertex(&s, &subs), Ok(pt(1.0, 1.0)));
    }
}
