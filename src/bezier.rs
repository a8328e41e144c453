//! Bezier evaluation.
//!
//! De Casteljau evaluation for any degree, the cubic Bernstein basis used
//! by the least-squares fit, and the first/second derivative control
//! polygons (hodographs) used by Newton-Raphson refinement.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

use crate::geom::Vec3;

/// A control point that de Casteljau evaluation can interpolate.
///
/// Implemented for 3D `Vec3` and for kurbo's 2D `Point` and `Vec2`, so the
/// same evaluator serves both dimensions.
pub trait ControlPoint: Copy {
    /// `(1 - t) * self + t * other`, exact at `t = 0` and `t = 1`.
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl ControlPoint for Vec3 {
    #[inline]
    fn lerp(self, other: Self, t: f64) -> Self {
        Vec3::lerp(self, other, t)
    }
}

impl ControlPoint for Point {
    #[inline]
    fn lerp(self, other: Self, t: f64) -> Self {
        let mt = 1.0 - t;
        Point::new(mt * self.x + t * other.x, mt * self.y + t * other.y)
    }
}

impl ControlPoint for Vec2 {
    #[inline]
    fn lerp(self, other: Self, t: f64) -> Self {
        let mt = 1.0 - t;
        Vec2::new(mt * self.x + t * other.x, mt * self.y + t * other.y)
    }
}

/// Evaluate a Bezier curve of `degree` at parameter `t` (de Casteljau).
///
/// `ctrl` must hold at least `degree + 1` control points; extra points
/// are ignored.
pub fn evaluate<P: ControlPoint>(degree: usize, ctrl: &[P], t: f64) -> P {
    debug_assert!(ctrl.len() > degree, "degree {} needs {} control points", degree, degree + 1);
    let mut buf: Vec<P> = ctrl[..=degree].to_vec();
    for round in 1..=degree {
        for j in 0..=degree - round {
            buf[j] = buf[j].lerp(buf[j + 1], t);
        }
    }
    buf[0]
}

// ── Cubic Bernstein basis ────────────────────────────────────

#[inline]
pub fn b0(u: f64) -> f64 {
    let mu = 1.0 - u;
    mu * mu * mu
}

#[inline]
pub fn b1(u: f64) -> f64 {
    let mu = 1.0 - u;
    3.0 * u * mu * mu
}

#[inline]
pub fn b2(u: f64) -> f64 {
    3.0 * u * u * (1.0 - u)
}

#[inline]
pub fn b3(u: f64) -> f64 {
    u * u * u
}

// ── Cubic segment ────────────────────────────────────────────

/// One cubic Bezier segment in 3D.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBez3 {
    pub p0: Vec3,
    pub p1: Vec3,
    pub p2: Vec3,
    pub p3: Vec3,
}

impl CubicBez3 {
    pub const fn new(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        Self { p0, p1, p2, p3 }
    }

    pub const fn to_array(&self) -> [Vec3; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// Point on the curve at `t`.
    pub fn eval(&self, t: f64) -> Vec3 {
        evaluate(3, &self.to_array(), t)
    }

    /// Control points of the first derivative (degree 2): `3 (Q[i+1] - Q[i])`.
    pub fn first_derivative(&self) -> [Vec3; 3] {
        [
            (self.p1 - self.p0) * 3.0,
            (self.p2 - self.p1) * 3.0,
            (self.p3 - self.p2) * 3.0,
        ]
    }

    /// Control points of the second derivative (degree 1): `2 (Q'[i+1] - Q'[i])`.
    pub fn second_derivative(&self) -> [Vec3; 2] {
        let d1 = self.first_derivative();
        [(d1[1] - d1[0]) * 2.0, (d1[2] - d1[1]) * 2.0]
    }

    /// Drop `z` and return the x/y projection as a kurbo cubic.
    pub fn to_kurbo(&self) -> kurbo::CubicBez {
        let flat = |v: Vec3| Point::new(v.x, v.y);
        kurbo::CubicBez::new(flat(self.p0), flat(self.p1), flat(self.p2), flat(self.p3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn scattered(n: usize) -> Vec<Vec3> {
        // Deterministic, irregular control points.
        (0..n)
            .map(|i| {
                let f = i as f64;
                Vec3::new((f * 37.0) % 97.0, (f * 53.0 + 11.0) % 89.0, (f * 71.0 + 5.0) % 83.0)
            })
            .collect()
    }

    #[test]
    fn endpoints_are_exact_for_any_degree() {
        for degree in 1..=10 {
            let ctrl = scattered(degree + 1);
            assert_eq!(evaluate(degree, &ctrl, 0.0), ctrl[0]);
            assert_eq!(evaluate(degree, &ctrl, 1.0), ctrl[degree]);
        }
    }

    #[test]
    fn cubic_matches_bernstein_form() {
        let ctrl = scattered(4);
        for k in 0..=20 {
            let t = k as f64 / 20.0;
            let q = evaluate(3, &ctrl, t);
            let expected = ctrl[0] * b0(t) + ctrl[1] * b1(t) + ctrl[2] * b2(t) + ctrl[3] * b3(t);
            assert_abs_diff_eq!(q.x, expected.x, epsilon = 1e-9);
            assert_abs_diff_eq!(q.y, expected.y, epsilon = 1e-9);
            assert_abs_diff_eq!(q.z, expected.z, epsilon = 1e-9);
        }
    }

    #[test]
    fn evaluates_2d_and_3d_alike() {
        let ctrl3 = scattered(4);
        let ctrl2: Vec<Point> = ctrl3.iter().map(|v| Point::new(v.x, v.y)).collect();
        let q3 = evaluate(3, &ctrl3, 0.37);
        let q2 = evaluate(3, &ctrl2, 0.37);
        assert_eq!(q2, Point::new(q3.x, q3.y));
        assert_eq!(evaluate(3, &ctrl2, 1.0), ctrl2[3]);
    }

    #[test]
    fn basis_is_a_partition_of_unity() {
        for k in 0..=10 {
            let u = k as f64 / 10.0;
            assert_abs_diff_eq!(b0(u) + b1(u) + b2(u) + b3(u), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn hodograph_matches_finite_difference() {
        let c = CubicBez3::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 2.0, 0.5),
            Vec3::new(3.0, 2.0, -0.5),
            Vec3::new(4.0, 0.0, 1.0),
        );
        let d1 = c.first_derivative();
        let d2 = c.second_derivative();
        let (t, h) = (0.4, 1e-6);
        let numeric = (c.eval(t + h) - c.eval(t - h)) * (0.5 / h);
        let analytic = evaluate(2, &d1, t);
        assert_abs_diff_eq!(numeric.x, analytic.x, epsilon = 1e-5);
        assert_abs_diff_eq!(numeric.y, analytic.y, epsilon = 1e-5);
        assert_abs_diff_eq!(numeric.z, analytic.z, epsilon = 1e-5);

        let numeric2 = (evaluate(2, &d1, t + h) - evaluate(2, &d1, t - h)) * (0.5 / h);
        let analytic2 = evaluate(1, &d2, t);
        assert_abs_diff_eq!(numeric2.y, analytic2.y, epsilon = 1e-4);
    }
}
