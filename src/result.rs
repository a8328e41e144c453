//! The fitted curve: a start point followed by one `(handle1, handle2, end)`
//! triple per segment, so shared endpoints are stored once.

use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

use crate::bezier::CubicBez3;
use crate::geom::Vec3;

/// The part of a cubic segment that is not shared with its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FittedSegment {
    /// Handle leaving the previous endpoint.
    pub handle1: Vec3,
    /// Handle entering `end`.
    pub handle2: Vec3,
    pub end: Vec3,
}

impl FittedSegment {
    pub fn from_cubic(cubic: &CubicBez3) -> Self {
        Self {
            handle1: cubic.p1,
            handle2: cubic.p2,
            end: cubic.p3,
        }
    }
}

/// A piecewise cubic Bezier approximating a polyline.
///
/// `start` is the first input point and every segment's `end` is an input
/// point; segment `i + 1` starts where segment `i` ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub start: Vec3,
    pub segments: Vec<FittedSegment>,
}

impl FitResult {
    pub fn new(start: Vec3, segments: Vec<FittedSegment>) -> Self {
        Self { start, segments }
    }

    /// Last on-curve point.
    pub fn end(&self) -> Vec3 {
        self.segments.last().map_or(self.start, |seg| seg.end)
    }

    /// Full control polygons, one per segment, in order.
    ///
    /// Each cubic is `(point_i, handle_out, handle_in, point_i+1)`.
    pub fn cubics(&self) -> impl Iterator<Item = CubicBez3> + '_ {
        let mut current = self.start;
        self.segments.iter().map(move |seg| {
            let cubic = CubicBez3::new(current, seg.handle1, seg.handle2, seg.end);
            current = seg.end;
            cubic
        })
    }

    /// Flat control point list: `[start, h1, h2, end, h1, h2, end, ...]`.
    pub fn to_points(&self) -> Vec<Vec3> {
        let mut points = Vec::with_capacity(1 + 3 * self.segments.len());
        points.push(self.start);
        for seg in &self.segments {
            points.extend([seg.handle1, seg.handle2, seg.end]);
        }
        points
    }

    /// Project onto the x/y plane as a kurbo path (z is dropped).
    pub fn to_bezpath(&self) -> BezPath {
        let flat = |v: Vec3| Point::new(v.x, v.y);
        let mut path = BezPath::new();
        path.move_to(flat(self.start));
        for seg in &self.segments {
            path.curve_to(flat(seg.handle1), flat(seg.handle2), flat(seg.end));
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    fn two_segments() -> FitResult {
        FitResult::new(
            Vec3::new(0.0, 0.0, 0.0),
            vec![
                FittedSegment {
                    handle1: Vec3::new(1.0, 0.0, 0.0),
                    handle2: Vec3::new(2.0, 1.0, 0.0),
                    end: Vec3::new(3.0, 1.0, 1.0),
                },
                FittedSegment {
                    handle1: Vec3::new(4.0, 1.0, 1.0),
                    handle2: Vec3::new(5.0, 0.0, 2.0),
                    end: Vec3::new(6.0, 0.0, 2.0),
                },
            ],
        )
    }

    #[test]
    fn cubics_share_endpoints() {
        let result = two_segments();
        let cubics: Vec<CubicBez3> = result.cubics().collect();
        assert_eq!(cubics.len(), 2);
        assert_eq!(cubics[0].p0, result.start);
        assert_eq!(cubics[0].p3, cubics[1].p0);
        assert_eq!(cubics[1].p3, result.end());
    }

    #[test]
    fn flat_points_layout() {
        let points = two_segments().to_points();
        assert_eq!(points.len(), 7);
        assert_eq!(points[0], Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(points[3], Vec3::new(3.0, 1.0, 1.0));
        assert_eq!(points[6], Vec3::new(6.0, 0.0, 2.0));
    }

    #[test]
    fn bezpath_projection_drops_z() {
        let path = two_segments().to_bezpath();
        let elements = path.elements();
        assert_eq!(elements.len(), 3);
        assert_eq!(elements[0], PathEl::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(
            elements[2],
            PathEl::CurveTo(Point::new(4.0, 1.0), Point::new(5.0, 0.0), Point::new(6.0, 0.0))
        );
    }

    #[test]
    fn json_shape() {
        let result = FitResult::new(
            Vec3::new(0.0, 0.0, 0.0),
            vec![FittedSegment {
                handle1: Vec3::new(1.0, 0.0, 0.0),
                handle2: Vec3::new(2.0, 0.0, 0.0),
                end: Vec3::new(3.0, 0.0, 0.0),
            }],
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "start": [0.0, 0.0, 0.0],
                "segments": [{
                    "handle1": [1.0, 0.0, 0.0],
                    "handle2": [2.0, 0.0, 0.0],
                    "end": [3.0, 0.0, 0.0],
                }],
            })
        );
    }
}
