//! Definition of the segment shape.

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// A segment shape.
///
/// Segments have no volume: two of them only intersect when they cross or
/// overlap, which makes them handy to exercise the degenerate paths of GJK.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }
}

impl SupportMap for Segment {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        if self.a.coords.dot(dir) >= self.b.coords.dot(dir) {
            self.a
        } else {
            self.b
        }
    }
}
