//! Caller-side input cleanup.
//!
//! The fitter never drops points on its own, since that would shift the
//! indices downstream code maps segments back to. Strokes sampled with
//! repeated positions should go through here first.

use crate::geom::Vec3;

/// Remove points equal to their predecessor.
pub fn dedup_consecutive(points: &[Vec3]) -> Vec<Vec3> {
    let mut out: Vec<Vec3> = Vec::with_capacity(points.len());
    for &p in points {
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    out
}
