use thiserror::Error;

/// Errors that can occur while fitting a polyline.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FitError {
    #[error("degenerate input: zero-length tangent at point {index}")]
    ZeroTangent { index: usize },

    #[error("degenerate input: points {first}..={last} have zero arc length")]
    ZeroArcLength { first: usize, last: usize },

    #[error("need at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("error tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),
}

impl FitError {
    /// True for failures caused by coincident input points.
    ///
    /// Callers can deduplicate the stroke (see [`crate::prepare`]) and retry,
    /// or skip it.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::ZeroTangent { .. } | Self::ZeroArcLength { .. })
    }
}
