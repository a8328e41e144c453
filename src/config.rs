use serde::{Deserialize, Serialize};

/// All fitting parameters in one struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Maximum allowed deviation, in the units of the input points.
    ///
    /// Refinement starts once the squared deviation drops below
    /// `tolerance²`; a segment is accepted once the squared deviation
    /// drops below `tolerance`.
    pub tolerance: f64,
    /// Newton-Raphson reparametrization rounds tried per segment
    /// before it is split.
    pub max_iterations: usize,
    /// Fit the two halves of every split on the rayon thread pool.
    /// Output is identical to sequential fitting.
    pub parallel: bool,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            tolerance: 1.0,
            max_iterations: 4,
            parallel: false,
        }
    }
}
