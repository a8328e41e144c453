//! Fit error measurement and Newton-Raphson reparametrization.
//!
//! After a segment is fitted with chord-length parameters, each point's
//! parameter is nudged toward the curve location closest to it, and the
//! segment is refitted with the improved parameters.

use crate::bezier::{evaluate, CubicBez3};
use crate::geom::Vec3;

/// Maximum squared distance between the interior points of
/// `points[first..=last]` and `bez` evaluated at their parameters.
///
/// Returns `(max_squared_distance, index_of_worst_point)`. Ties go to the
/// later index.
pub fn compute_max_error(
    points: &[Vec3],
    first: usize,
    last: usize,
    bez: &CubicBez3,
    u: &[f64],
) -> (f64, usize) {
    let mut max_dist = 0.0;
    let mut split_point = (first + last) / 2;

    for i in first + 1..last {
        let dist = (bez.eval(u[i - first]) - points[i]).length_squared();
        if dist >= max_dist {
            max_dist = dist;
            split_point = i;
        }
    }

    (max_dist, split_point)
}

/// One Newton-Raphson step toward the root of `(Q(u) - p) · Q'(u)`.
///
/// A zero denominator leaves `u` unchanged.
pub fn newton_raphson_root_find(bez: &CubicBez3, p: Vec3, u: f64) -> f64 {
    let d1 = bez.first_derivative();
    let d2 = bez.second_derivative();

    let q = bez.eval(u);
    let q1 = evaluate(2, &d1, u);
    let q2 = evaluate(1, &d2, u);

    let diff = q - p;
    let numerator = diff.dot(q1);
    let denominator = q1.length_squared() + diff.dot(q2);

    if denominator == 0.0 {
        return u;
    }
    u - numerator / denominator
}

/// Improve every parameter in `u` by one Newton step against `bez`.
pub fn reparametrize(
    points: &[Vec3],
    first: usize,
    last: usize,
    u: &[f64],
    bez: &CubicBez3,
) -> Vec<f64> {
    points[first..=last]
        .iter()
        .zip(u)
        .map(|(&p, &ui)| newton_raphson_root_find(bez, p, ui))
        .collect()
}
