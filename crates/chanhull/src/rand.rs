//! Seeded point-set generators for tests, validation sweeps and timing.
//!
//! Model
//! - `uniform_grid`: integer-valued points in an axis-aligned box. Dense boxes
//!   produce many duplicates and collinear triples, which is the point.
//! - `circle_with_interior`: `rim` points evenly spaced on a circle plus random
//!   points strictly inside the inscribed rim polygon, so the hull size is
//!   controlled by `rim`.
//! - Determinism: a fixed seed always reproduces the same set (`StdRng`).

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::HullError;
use crate::types::{Point, PointSet};

/// Box of integer coordinates `[0, max_x] × [0, max_y]`.
#[derive(Clone, Copy, Debug)]
pub struct GridCfg {
    /// Points drawn before deduplication.
    pub count: usize,
    pub max_x: u32,
    pub max_y: u32,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            count: 100,
            max_x: 32_767,
            max_y: 32_767,
        }
    }
}

/// Random integer-valued points; duplicates are removed, so the result may
/// hold fewer than `count` points.
pub fn uniform_grid(cfg: GridCfg, seed: u64) -> Result<PointSet, HullError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let points = (0..cfg.count)
        .map(|_| {
            Point::new(
                f64::from(rng.gen_range(0..=cfg.max_x)),
                f64::from(rng.gen_range(0..=cfg.max_y)),
            )
        })
        .collect();
    PointSet::new(points)
}

/// Circle rim plus interior filler.
#[derive(Clone, Copy, Debug)]
pub struct CircleCfg {
    /// Points on the circle (raised to 3).
    pub rim: usize,
    /// Total points including the rim (raised to `rim`).
    pub total: usize,
    /// Circle radius; the center is `(radius, radius)`.
    pub radius: f64,
}

impl Default for CircleCfg {
    fn default() -> Self {
        Self {
            rim: 12,
            total: 100,
            radius: 30_267.0,
        }
    }
}

/// Rim points come first, counter-clockwise from angle 0, followed by the
/// filler in draw order.
pub fn circle_with_interior(cfg: CircleCfg, seed: u64) -> Result<PointSet, HullError> {
    let rim = cfg.rim.max(3);
    let total = cfg.total.max(rim);
    let r = cfg.radius.abs().max(1e-9);
    let center = Point::new(r, r);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut points: Vec<Point> = (0..rim)
        .map(|i| {
            let th = (i as f64) * TAU / (rim as f64);
            Point::new(center.x + r * th.cos(), center.y + r * th.sin())
        })
        .collect();
    // Stay clear of the rim polygon's inscribed circle.
    let inner = 0.95 * r * (std::f64::consts::PI / rim as f64).cos();
    points.extend((rim..total).map(|_| {
        let th = rng.gen::<f64>() * TAU;
        let rho = inner * rng.gen::<f64>().sqrt();
        Point::new(center.x + rho * th.cos(), center.y + rho * th.sin())
    }));
    PointSet::new(points)
}

/// Named workloads for timing sweeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Workload {
    /// `uniform_grid` over `[0, 32767]²`.
    Uniform,
    /// A fifth of the points on the hull.
    HighHull,
    /// `⌊ln n⌋ + 4` points on the hull.
    LowHull,
}

impl Workload {
    pub const ALL: [Workload; 3] = [Workload::Uniform, Workload::HighHull, Workload::LowHull];

    pub fn name(self) -> &'static str {
        match self {
            Workload::Uniform => "uniform",
            Workload::HighHull => "high_hull",
            Workload::LowHull => "low_hull",
        }
    }

    /// Draw a set of roughly `n` points for this workload.
    pub fn sample(self, n: usize, seed: u64) -> Result<PointSet, HullError> {
        match self {
            Workload::Uniform => uniform_grid(
                GridCfg {
                    count: n,
                    ..GridCfg::default()
                },
                seed,
            ),
            Workload::HighHull => circle_with_interior(
                CircleCfg {
                    rim: n / 5,
                    total: n,
                    ..CircleCfg::default()
                },
                seed,
            ),
            Workload::LowHull => circle_with_interior(
                CircleCfg {
                    rim: (n.max(1) as f64).ln().floor() as usize + 4,
                    total: n,
                    ..CircleCfg::default()
                },
                seed,
            ),
        }
    }
}
