use std::fmt;

/// Errors surfaced by hull construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// A tangent query or merge step received no vertices. Unreachable when
    /// sub-hulls come from non-empty groups; signals a broken invariant.
    EmptySubHull,
    /// The adaptive driver could not close the hull at maximal group size on
    /// two consecutive attempts.
    NonConvergence { attempts: usize, k: usize },
    /// Input coordinate at `index` is NaN or infinite.
    NonFinite { index: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::EmptySubHull => write!(f, "tangent query on an empty sub-hull"),
            HullError::NonConvergence { attempts, k } => write!(
                f,
                "hull did not close after {attempts} attempts (final group size k={k})"
            ),
            HullError::NonFinite { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for HullError {}
