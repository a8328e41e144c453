//! Recursive cubic fitting: polyline → piecewise cubic Bezier.
//!
//! Per subrange:
//! 1. Two points: place handles at a third of the chord along the tangents
//! 2. Chord-length parametrize and least-squares fit one cubic
//! 3. If close enough, refine parameters by Newton-Raphson and refit
//! 4. Otherwise split at the worst point and fit both halves

use log::{debug, trace};

use crate::config::FitConfig;
use crate::error::FitError;
use crate::geom::Vec3;
use crate::param::chord_length_parametrize;
use crate::refit::{compute_max_error, reparametrize};
use crate::result::{FitResult, FittedSegment};
use crate::segment::generate_bezier;
use crate::tangent::{center_tangent, left_tangent, right_tangent};

/// Fit `points` with the default configuration and tolerance `error`.
pub fn fit_curve(points: &[Vec3], error: f64) -> Result<FitResult, FitError> {
    let config = FitConfig {
        tolerance: error,
        ..FitConfig::default()
    };
    fit_curve_with(points, &config)
}

/// Fit `points` with an explicit configuration.
///
/// Any degenerate subrange aborts the whole fit; no partial result is returned.
pub fn fit_curve_with(points: &[Vec3], config: &FitConfig) -> Result<FitResult, FitError> {
    if points.len() < 2 {
        return Err(FitError::TooFewPoints(points.len()));
    }
    if !(config.tolerance.is_finite() && config.tolerance > 0.0) {
        return Err(FitError::InvalidTolerance(config.tolerance));
    }

    let last = points.len() - 1;
    let tangent1 = left_tangent(points, 0)?;
    let tangent2 = right_tangent(points, last)?;

    let segments = fit_cubic(points, 0, last, tangent1, tangent2, config)?;
    debug!(
        "fitted {} points with {} segments (tolerance {})",
        points.len(),
        segments.len(),
        config.tolerance
    );

    Ok(FitResult::new(points[0], segments))
}

/// Fit `points[first..=last]` with the given end tangents.
///
/// Returns the `(handle1, handle2, end)` triple of every segment in order;
/// the start point is the caller's `points[first]`. Requires `first < last`.
pub fn fit_cubic(
    points: &[Vec3],
    first: usize,
    last: usize,
    tangent1: Vec3,
    tangent2: Vec3,
    config: &FitConfig,
) -> Result<Vec<FittedSegment>, FitError> {
    debug_assert!(first < last, "empty range {}..={}", first, last);
    let error = config.tolerance;
    let iteration_error = error * error;

    if last - first + 1 == 2 {
        let dist = points[last].distance(points[first]) / 3.0;
        return Ok(vec![FittedSegment {
            handle1: points[first] + tangent1 * dist,
            handle2: points[last] + tangent2 * dist,
            end: points[last],
        }]);
    }

    let mut u = chord_length_parametrize(points, first, last)?;
    let mut bez = generate_bezier(points, first, last, &u, tangent1, tangent2);
    let (mut max_error, mut split_point) = compute_max_error(points, first, last, &bez, &u);

    // Entry uses error², acceptance uses error.
    if max_error < iteration_error {
        for iteration in 0..config.max_iterations {
            let u_prime = reparametrize(points, first, last, &u, &bez);
            bez = generate_bezier(points, first, last, &u_prime, tangent1, tangent2);
            (max_error, split_point) = compute_max_error(points, first, last, &bez, &u_prime);

            if max_error < error {
                trace!(
                    "accepted {}..={} after {} iteration(s), max error² {:.3e}",
                    first,
                    last,
                    iteration + 1,
                    max_error
                );
                return Ok(vec![FittedSegment::from_cubic(&bez)]);
            }

            u = u_prime;
        }
    }

    debug!(
        "splitting {}..={} at {} (max error² {:.3e})",
        first, last, split_point, max_error
    );

    let center = center_tangent(points, split_point)?;
    let fit_left = || fit_cubic(points, first, split_point, tangent1, center, config);
    let fit_right = || fit_cubic(points, split_point, last, -center, tangent2, config);

    let (mut segments, right) = if config.parallel {
        let (left, right) = rayon::join(fit_left, fit_right);
        (left?, right?)
    } else {
        (fit_left()?, fit_right()?)
    };

    segments.extend(right);
    Ok(segments)
}
