//! Unit tangent estimates at the ends and interior of a polyline.

use crate::error::FitError;
use crate::geom::Vec3;

/// Unit tangent leaving `points[end]` toward `points[end + 1]`.
pub fn left_tangent(points: &[Vec3], end: usize) -> Result<Vec3, FitError> {
    (points[end + 1] - points[end])
        .normalized()
        .ok_or(FitError::ZeroTangent { index: end })
}

/// Unit tangent leaving `points[end]` back toward `points[end - 1]`.
pub fn right_tangent(points: &[Vec3], end: usize) -> Result<Vec3, FitError> {
    (points[end - 1] - points[end])
        .normalized()
        .ok_or(FitError::ZeroTangent { index: end })
}

/// Unit tangent at an interior point, averaged from both neighbours.
///
/// Points backward along the polyline; the right-hand piece of a split
/// uses its negation.
pub fn center_tangent(points: &[Vec3], center: usize) -> Result<Vec3, FitError> {
    let v1 = points[center - 1] - points[center];
    let v2 = points[center] - points[center + 1];
    (v1 + v2)
        .scale(0.5)
        .normalized()
        .ok_or(FitError::ZeroTangent { index: center })
}
