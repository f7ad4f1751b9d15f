//! The segment or half-line traced by the [`LineTracer`](crate::query::LineTracer).

use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use na::Unit;

/// A line segment going from `start` to `end`, or a half-line if `infinite_length` is set.
///
/// The parameter `t` of a point `start + (end - start) * t` of the ray lies in `[0, 1]` for a
/// segment, and in `[0, +inf)` for a half-line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Ray {
    /// Starting point of the ray.
    pub start: Point<Real>,
    /// End point of the ray, or any point it passes through if `infinite_length` is set.
    pub end: Point<Real>,
    /// Does the ray extend beyond `end`?
    pub infinite_length: bool,
}

impl Ray {
    /// The segment from `start` to `end`.
    pub fn new(start: Point<Real>, end: Point<Real>) -> Ray {
        Ray {
            start,
            end,
            infinite_length: false,
        }
    }

    /// The half-line starting at `start` and passing through `through`.
    pub fn infinite(start: Point<Real>, through: Point<Real>) -> Ray {
        Ray {
            start,
            end: through,
            infinite_length: true,
        }
    }

    /// The vector from `self.start` to `self.end`.
    #[inline]
    pub fn direction(&self) -> Vector<Real> {
        self.end - self.start
    }

    /// The normalized direction of this ray, if `self.start != self.end`.
    #[inline]
    pub fn normalized_direction(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.direction(), DEFAULT_EPSILON)
    }

    /// The point `self.start + self.direction() * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.start + self.direction() * t
    }

    /// Transforms this ray by the given isometry.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        Ray {
            start: m * self.start,
            end: m * self.end,
            infinite_length: self.infinite_length,
        }
    }
}
