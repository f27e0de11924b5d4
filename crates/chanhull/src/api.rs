//! Curated surface for the CLI and benchmarks.
//!
//! Groups the two hull operations, the value types, the generators and the
//! validation helpers under one path. Prefer these re-exports in callers.

// Hull operations
pub use crate::chan::{compute_hull_fast, compute_hull_fast_with, ChanCfg, ChanReport};
pub use crate::graham::compute_hull_baseline;
// Values and errors
pub use crate::{Hull, HullError, Point, PointSet};
// Generators
pub use crate::rand::{circle_with_interior, uniform_grid, CircleCfg, GridCfg, Workload};
// Validation
pub use crate::validate::{search_counterexample, validate_by_comparison, SearchCfg};
