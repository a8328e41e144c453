//! Least-squares fit of a single cubic segment.
//!
//! Endpoints and endpoint tangent directions are fixed; only the two
//! handle lengths are solved for, from the 2×2 normal equations.

use crate::bezier::{b0, b1, b2, b3, CubicBez3};
use crate::geom::Vec3;

/// Determinants smaller than this are treated as a singular system.
const SINGULAR_DET: f64 = 1e-12;

/// Fit the handles of a cubic from `points[first]` to `points[last]`.
///
/// `u` holds one parameter per point in the range. `tangent1` leaves the
/// start, `tangent2` leaves the end backwards. When the system is singular
/// or either handle length comes out below `1e-6` of the chord, both
/// handles fall back to a third of the chord (Wu/Barsky).
pub fn generate_bezier(
    points: &[Vec3],
    first: usize,
    last: usize,
    u: &[f64],
    tangent1: Vec3,
    tangent2: Vec3,
) -> CubicBez3 {
    let p0 = points[first];
    let p3 = points[last];

    let mut c00 = 0.0;
    let mut c01 = 0.0;
    let mut c11 = 0.0;
    let mut x0 = 0.0;
    let mut x1 = 0.0;

    for (i, &ui) in u.iter().enumerate().take(last - first + 1) {
        let a0 = tangent1 * b1(ui);
        let a1 = tangent2 * b2(ui);

        c00 += a0.length_squared();
        c01 += a0.dot(a1);
        c11 += a1.length_squared();

        let fixed = p0 * (b0(ui) + b1(ui)) + p3 * (b2(ui) + b3(ui));
        let residual = points[first + i] - fixed;
        x0 += a0.dot(residual);
        x1 += a1.dot(residual);
    }

    let seg_length = p3.distance(p0);
    let epsilon = 1.0e-6 * seg_length;

    let det = c00 * c11 - c01 * c01;
    let alphas = if det.abs() < SINGULAR_DET {
        None
    } else {
        let alpha1 = (c11 * x0 - c01 * x1) / det;
        let alpha2 = (c00 * x1 - c01 * x0) / det;
        (alpha1 >= epsilon && alpha2 >= epsilon).then_some((alpha1, alpha2))
    };

    let (alpha1, alpha2) = alphas.unwrap_or_else(|| {
        let third = seg_length / 3.0;
        (third, third)
    });

    CubicBez3::new(p0, p0 + tangent1 * alpha1, p3 + tangent2 * alpha2, p3)
}
