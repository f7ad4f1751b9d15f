//! Support mapping based Ball shape.

use na::Unit;

use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// A Ball shape, centered on its local-space origin.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Ball {
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball from its radius.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball { radius }
    }
}

impl SupportMap for Ball {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        // A zero direction has no preferred support point: any point of the sphere works.
        let dir = Unit::try_new(*dir, 0.0).unwrap_or_else(Vector::x_axis);
        self.local_support_point_toward(&dir)
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        Point::from(**dir * self.radius)
    }
}
