//! Point, point set and hull value types.
//!
//! - `PointSet`: finite, duplicate-free input in caller order.
//! - `Hull`: counter-clockwise cyclic vertex sequence, anchor first.
//! - `PointKey`: exact hashable identity of a point (visited map, dedup).

use std::collections::HashSet;

use nalgebra::Point2;

use crate::error::HullError;
use crate::orient::cross;

/// A planar point. Equality is exact coordinate equality.
pub type Point = Point2<f64>;

/// Hashable exact identity of a point; `-0.0` and `0.0` map to the same key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct PointKey(u64, u64);

impl From<&Point> for PointKey {
    #[inline]
    fn from(p: &Point) -> Self {
        // Adding +0.0 folds -0.0 into +0.0.
        PointKey((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
    }
}

/// Finite, duplicate-free collection of points.
///
/// Enumeration order is the caller's order with later duplicates removed. The
/// algorithms do not depend on it semantically, but sub-hull grouping follows it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Validate finiteness and drop exact duplicates (first occurrence wins).
    pub fn new(points: Vec<Point>) -> Result<Self, HullError> {
        if let Some(index) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(HullError::NonFinite { index });
        }
        let mut seen: HashSet<PointKey> = HashSet::with_capacity(points.len());
        let mut unique = Vec::with_capacity(points.len());
        for p in points {
            if seen.insert(PointKey::from(&p)) {
                unique.push(p);
            }
        }
        Ok(Self { points: unique })
    }

    /// Convenience constructor from `(x, y)` pairs.
    pub fn from_xy<I>(coords: I) -> Result<Self, HullError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self::new(coords.into_iter().map(|(x, y)| Point::new(x, y)).collect())
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.points
    }
}

/// Convex hull as a counter-clockwise cyclic sequence of vertices.
///
/// Invariants (for hulls produced by this crate):
/// - the first vertex is the anchor (min y, then max x) of the input;
/// - consecutive triples turn strictly left, or `len() < 3`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hull {
    vertices: Vec<Point>,
}

impl Hull {
    pub(crate) fn from_vertices(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<&Point> {
        self.vertices.first()
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.vertices
    }

    /// Every cyclic triple is a strict left turn (trivially true below 3 vertices).
    pub fn is_convex(&self) -> bool {
        let m = self.vertices.len();
        if m < 3 {
            return true;
        }
        (0..m).all(|i| {
            cross(
                &self.vertices[i],
                &self.vertices[(i + 1) % m],
                &self.vertices[(i + 2) % m],
            ) > 0.0
        })
    }

    /// `p` lies on the boundary or in the interior.
    pub fn contains(&self, p: &Point) -> bool {
        match self.vertices.as_slice() {
            [] => false,
            [a] => a == p,
            [a, b] => {
                cross(a, b, p) == 0.0
                    && (*p - *a).dot(&(*b - *a)) >= 0.0
                    && (*p - *b).dot(&(*a - *b)) >= 0.0
            }
            vs => {
                let m = vs.len();
                (0..m).all(|i| cross(&vs[i], &vs[(i + 1) % m], p) >= 0.0)
            }
        }
    }

    /// Equal as cyclic sequences (same vertices, same orientation, any start).
    pub fn eq_cyclic(&self, other: &Hull) -> bool {
        let m = self.vertices.len();
        if m != other.vertices.len() {
            return false;
        }
        if m == 0 {
            return true;
        }
        (0..m).any(|shift| (0..m).all(|i| self.vertices[(i + shift) % m] == other.vertices[i]))
    }

    /// Enclosed area (shoelace); zero for fewer than 3 vertices.
    pub fn area(&self) -> f64 {
        let m = self.vertices.len();
        if m < 3 {
            return 0.0;
        }
        let twice: f64 = (0..m)
            .map(|i| {
                let p = self.vertices[i];
                let q = self.vertices[(i + 1) % m];
                p.x * q.y - q.x * p.y
            })
            .sum();
        0.5 * twice
    }
}
