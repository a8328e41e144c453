//! Chord-length parametrization of a polyline subrange.

use crate::error::FitError;
use crate::geom::Vec3;

/// Assign each point in `points[first..=last]` a parameter proportional to
/// its cumulative arc length, so the first is `0.0` and the last `1.0`.
///
/// Fails when the subrange has zero total length.
pub fn chord_length_parametrize(
    points: &[Vec3],
    first: usize,
    last: usize,
) -> Result<Vec<f64>, FitError> {
    let range = &points[first..=last];

    let mut cumulative = Vec::with_capacity(range.len());
    let mut total = 0.0;
    cumulative.push(0.0);
    for pair in range.windows(2) {
        total += pair[1].distance(pair[0]);
        cumulative.push(total);
    }

    if total <= 0.0 || !total.is_finite() {
        return Err(FitError::ZeroArcLength { first, last });
    }

    Ok(cumulative.into_iter().map(|d| d / total).collect())
}
