//! Output-sensitive hull construction (Chan's algorithm).
//!
//! Purpose
//! - Build the hull in O(n log h) by wrapping around `⌈n/k⌉` small sub-hulls
//!   instead of all n points, guessing the group size `k` and squaring it on
//!   failure.
//!
//! Flow
//! - `driver`: picks k, builds sub-hulls, walks the hull, decides restarts.
//! - `subhull`: splits the point set into groups and scans each one.
//! - `step`: one wrapping step, the most extreme tangent over all sub-hulls.
//! - `tangent`: O(log m) tangent search from a point to one sub-hull.
//!
//! The baseline scan in `crate::graham` is both the per-group primitive and
//! the reference the result must match exactly.

mod driver;
mod step;
mod subhull;
mod tangent;
mod types;

pub use driver::{compute_hull_fast, compute_hull_fast_with};
pub use step::next_hull_vertex;
pub use subhull::build_sub_hulls;
pub use tangent::tangent;
pub use types::{ChanCfg, ChanReport, SubHull};
