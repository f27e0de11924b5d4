//! Planar convex hulls: a Graham-style baseline and an output-sensitive
//! O(n log h) divide-and-conquer driver (Chan's algorithm).
//!
//! Layout
//! - `orient`: exact sign tests every other module builds on.
//! - `graham`: baseline scan; also the oracle the fast path is checked against.
//! - `chan`: sub-hull builder, tangent search, merge step, adaptive driver.
//! - `rand`: seeded point-set generators for tests, validation and timing.
//! - `validate`: baseline/fast comparison and counterexample search.
//!
//! Conventions
//! - Hulls are counter-clockwise, start at the anchor (min y, then max x),
//!   and never contain three collinear consecutive vertices.
//! - The library logs through `tracing` and never installs a subscriber.

pub mod api;
pub mod chan;
mod error;
pub mod graham;
pub mod orient;
pub mod rand;
mod types;
pub mod validate;

pub use chan::{compute_hull_fast, compute_hull_fast_with, ChanCfg, ChanReport};
pub use error::HullError;
pub use graham::compute_hull_baseline;
pub use types::{Hull, Point, PointSet};
pub use validate::validate_by_comparison;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::chan::{compute_hull_fast, compute_hull_fast_with, ChanCfg, ChanReport};
    pub use crate::graham::compute_hull_baseline;
    pub use crate::rand::{circle_with_interior, uniform_grid, CircleCfg, GridCfg};
    pub use crate::validate::{search_counterexample, validate_by_comparison, SearchCfg};
    pub use crate::{Hull, HullError, Point, PointSet};
}
