//! Post-hoc quality measurement of a fit.
//!
//! For every input point, finds the closest location on the fitted curve
//! (dense sampling, then Newton refinement) and summarizes the deviations.

use std::fmt;

use crate::bezier::CubicBez3;
use crate::geom::Vec3;
use crate::refit::newton_raphson_root_find;
use crate::result::FitResult;

/// Samples per segment for the coarse nearest-point search.
const SAMPLES_PER_SEGMENT: usize = 64;
/// Newton steps applied to the best coarse sample.
const REFINE_STEPS: usize = 8;

/// Deviation summary of a fit against its input points.
#[derive(Debug, Clone, PartialEq)]
pub struct FitReport {
    pub points: usize,
    pub segments: usize,
    /// Largest point-to-curve distance.
    pub max_deviation: f64,
    /// Mean point-to-curve distance.
    pub mean_deviation: f64,
    /// Input index with the largest deviation.
    pub worst_index: usize,
}

/// Measure how closely `result` follows `points`.
pub fn evaluate(points: &[Vec3], result: &FitResult) -> FitReport {
    let cubics: Vec<CubicBez3> = result.cubics().collect();

    let mut max_deviation = 0.0;
    let mut worst_index = 0;
    let mut total = 0.0;
    for (i, &p) in points.iter().enumerate() {
        let d = distance_to_curve(&cubics, p);
        total += d;
        if d > max_deviation {
            max_deviation = d;
            worst_index = i;
        }
    }

    FitReport {
        points: points.len(),
        segments: cubics.len(),
        max_deviation,
        mean_deviation: if points.is_empty() { 0.0 } else { total / points.len() as f64 },
        worst_index,
    }
}

/// Distance from `p` to the nearest point on any of `cubics`.
///
/// Returns `f64::INFINITY` when there are no segments.
pub fn distance_to_curve(cubics: &[CubicBez3], p: Vec3) -> f64 {
    let mut best = f64::INFINITY;
    for cubic in cubics {
        let mut best_t = 0.0;
        let mut best_d = f64::INFINITY;
        for k in 0..=SAMPLES_PER_SEGMENT {
            let t = k as f64 / SAMPLES_PER_SEGMENT as f64;
            let d = cubic.eval(t).distance(p);
            if d < best_d {
                best_d = d;
                best_t = t;
            }
        }

        let mut t = best_t;
        for _ in 0..REFINE_STEPS {
            t = newton_raphson_root_find(cubic, p, t).clamp(0.0, 1.0);
            best_d = best_d.min(cubic.eval(t).distance(p));
        }

        best = best.min(best_d);
    }
    best
}

impl fmt::Display for FitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  Fit         {} points \u{2192} {} segments",
            self.points, self.segments
        )?;
        writeln!(
            f,
            "  Deviation   max {:.4} (point {})  mean {:.4}",
            self.max_deviation, self.worst_index, self.mean_deviation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::FittedSegment;
    use approx::assert_abs_diff_eq;

    fn line() -> FitResult {
        FitResult::new(
            Vec3::new(0.0, 0.0, 0.0),
            vec![FittedSegment {
                handle1: Vec3::new(1.0, 0.0, 0.0),
                handle2: Vec3::new(2.0, 0.0, 0.0),
                end: Vec3::new(3.0, 0.0, 0.0),
            }],
        )
    }

    #[test]
    fn perpendicular_offset() {
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.3, 0.5, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
        ];
        let report = evaluate(&points, &line());
        assert_eq!(report.segments, 1);
        assert_eq!(report.worst_index, 1);
        assert_abs_diff_eq!(report.max_deviation, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(report.mean_deviation, 0.5 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn beyond_the_end_clamps() {
        let d = distance_to_curve(&line().cubics().collect::<Vec<_>>(), Vec3::new(5.0, 0.0, 0.0));
        assert_abs_diff_eq!(d, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn no_segments_is_infinite() {
        assert_eq!(distance_to_curve(&[], Vec3::ZERO), f64::INFINITY);
    }
}
