//! Configuration, report and sub-hull types for the adaptive driver.

use crate::types::{Hull, Point};

/// Convex, counter-clockwise vertex cycle of one group (see `build_sub_hulls`).
pub type SubHull = Vec<Point>;

/// Driver configuration.
#[derive(Clone, Copy, Debug)]
pub struct ChanCfg {
    /// Group size of the first attempt. Values below 2 are raised to 2 so that
    /// squaring always grows the group.
    pub initial_k: usize,
}

impl Default for ChanCfg {
    fn default() -> Self {
        Self { initial_k: 3 }
    }
}

/// Hull plus statistics of the run that produced it.
#[derive(Clone, Debug)]
pub struct ChanReport {
    pub hull: Hull,
    /// Reconstruction attempts, including the closing one.
    pub attempts: usize,
    /// Group size of the closing attempt.
    pub final_k: usize,
    /// Number of sub-hulls in the closing attempt.
    pub sub_hulls: usize,
    /// Wrapping steps over all attempts.
    pub steps: usize,
}
