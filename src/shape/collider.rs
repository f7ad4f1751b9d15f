//! The capability GJK and EPA consume: a world-space support function plus an origin.

use crate::math::{Isometry, Point, Real, Rotation, Vector};
use crate::shape::SupportMap;
use na::Unit;

/// A convex shape placed in the world.
///
/// This is the only thing the collision queries know about a shape. They borrow colliders
/// immutably for the duration of one call and never keep a reference afterward. Placing the
/// collider (through [`Collider::set_origin`]) is left entirely to the application.
pub trait Collider {
    /// The world-space point of this collider that maximizes its dot product with `dir`.
    ///
    /// `dir` does not have to be normalized. Ties may be broken arbitrarily, but must be broken
    /// the same way every time for the same input.
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as `self.support_point` except that `dir` is normalized.
    fn support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.support_point(dir.as_ref())
    }

    /// The world-space origin of this collider.
    fn origin(&self) -> Point<Real>;

    /// Moves this collider so that its origin is at `origin`.
    fn set_origin(&mut self, origin: Point<Real>);
}

/// A support-mapped shape attached to a world-space position.
///
/// This turns any [`SupportMap`] (a cuboid, a ball, a capsule, etc.) into a [`Collider`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShapeCollider<S> {
    /// The position of the shape's local frame in world-space.
    pub position: Isometry<Real>,
    /// The shape, expressed in its local frame.
    pub shape: S,
}

impl<S: SupportMap> ShapeCollider<S> {
    /// Places `shape` at `position`.
    pub fn new(position: Isometry<Real>, shape: S) -> Self {
        Self { position, shape }
    }

    /// Places `shape` at `origin`, without rotation.
    pub fn at(origin: Point<Real>, shape: S) -> Self {
        Self::new(Isometry::translation(origin.x, origin.y, origin.z), shape)
    }

    /// Sets the orientation of this collider, keeping its origin.
    pub fn set_rotation(&mut self, rotation: Rotation<Real>) {
        self.position.rotation = rotation;
    }
}

impl<S: SupportMap> Collider for ShapeCollider<S> {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.shape.support_point(&self.position, dir)
    }

    #[inline]
    fn support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.shape.support_point_toward(&self.position, dir)
    }

    #[inline]
    fn origin(&self) -> Point<Real> {
        self.position.translation.vector.into()
    }

    #[inline]
    fn set_origin(&mut self, origin: Point<Real>) {
        self.position.translation.vector = origin.coords;
    }
}
