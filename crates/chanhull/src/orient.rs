//! Orientation primitives.
//!
//! Every geometric decision in the crate goes through these sign tests; no
//! other numeric comparison of coordinates is made by the hull algorithms.
//! `squared_distance` only breaks ties between collinear candidates.

use std::f64::consts::PI;

use crate::types::Point;

/// Signed area of the parallelogram spanned by `b - a` and `c - a`.
///
/// Positive when `c` is left of the ray `a → b` (counter-clockwise turn),
/// negative for a right turn, zero when the three points are collinear.
#[inline]
pub fn cross(a: &Point, b: &Point, c: &Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Strict left turn `a → b → c`.
#[inline]
pub fn is_concave(a: &Point, b: &Point, c: &Point) -> bool {
    cross(a, b, c) > 0.0
}

#[inline]
pub fn squared_distance(a: &Point, b: &Point) -> f64 {
    (b - a).norm_squared()
}

/// Angle of `p - anchor` in `[0, 2π]`.
///
/// Straight down maps to `1.5π` and straight left to `2π`, so that points on
/// the anchor's own row sort after everything else.
pub fn polar_angle(anchor: &Point, p: &Point) -> f64 {
    let dx = p.x - anchor.x;
    let dy = p.y - anchor.y;
    if dx == 0.0 && dy < 0.0 {
        return 1.5 * PI;
    }
    if dy == 0.0 && dx < 0.0 {
        return 2.0 * PI;
    }
    let angle = dy.atan2(dx);
    if angle < 0.0 {
        angle + 2.0 * PI
    } else {
        angle
    }
}

/// Lowest point, ties broken by largest `x`. `None` for empty input.
pub fn anchor(points: &[Point]) -> Option<Point> {
    let (first, rest) = points.split_first()?;
    Some(rest.iter().fold(*first, |best, p| {
        if p.y < best.y || (p.y == best.y && p.x > best.x) {
            *p
        } else {
            best
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn cross_sign_matches_turn_direction() {
        let (a, b) = (pt(0.0, 0.0), pt(1.0, 0.0));
        assert!(cross(&a, &b, &pt(0.5, 1.0)) > 0.0);
        assert!(cross(&a, &b, &pt(0.5, -1.0)) < 0.0);
        assert_eq!(cross(&a, &b, &pt(3.0, 0.0)), 0.0);
        assert_eq!(cross(&a, &b, &pt(0.0, 2.0)), 2.0);
    }

    #[test]
    fn concavity_is_strict() {
        let (a, b) = (pt(0.0, 0.0), pt(2.0, 2.0));
        assert!(is_concave(&a, &b, &pt(0.0, 1.0)));
        assert!(!is_concave(&a, &b, &pt(1.0, 1.0)));
        assert!(!is_concave(&a, &b, &pt(1.0, 0.0)));
    }

    #[test]
    fn squared_distance_is_exact_on_integers() {
        assert_eq!(squared_distance(&pt(1.0, 1.0), &pt(4.0, 5.0)), 25.0);
    }

    #[test]
    fn polar_angle_axis_directions() {
        let o = pt(0.0, 0.0);
        assert_eq!(polar_angle(&o, &o), 0.0);
        assert_eq!(polar_angle(&o, &pt(3.0, 0.0)), 0.0);
        assert!((polar_angle(&o, &pt(0.0, 2.0)) - 0.5 * PI).abs() < 1e-15);
        assert_eq!(polar_angle(&o, &pt(0.0, -2.0)), 1.5 * PI);
        assert_eq!(polar_angle(&o, &pt(-2.0, 0.0)), 2.0 * PI);
        let a = polar_angle(&o, &pt(1.0, -1.0));
        assert!((a - 1.75 * PI).abs() < 1e-12);
    }

    #[test]
    fn anchor_prefers_lowest_then_rightmost() {
        let pts = [pt(0.0, 0.0), pt(4.0, 0.0), pt(2.0, -0.0), pt(1.0, 3.0)];
        assert_eq!(anchor(&pts), Some(pt(4.0, 0.0)));
        let pts = [pt(5.0, 1.0), pt(-3.0, -2.0), pt(9.0, 4.0)];
        assert_eq!(anchor(&pts), Some(pt(-3.0, -2.0)));
        assert_eq!(anchor(&[]), None);
    }
}
