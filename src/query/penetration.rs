use crate::math::{Point, Real, Vector};
use na::Unit;

/// The result of a penetration query between two intersecting colliders `A` and `B`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Penetration {
    /// How deep the colliders overlap along `normal`. Never negative.
    pub depth: Real,
    /// Unit direction pointing from `A` toward `B`.
    ///
    /// Translating `B` by `normal * depth`, or `A` by `-normal * depth`, separates the colliders.
    pub normal: Unit<Vector<Real>>,
    /// `normal * depth`.
    pub penetration_vector: Vector<Real>,
    /// The deepest point of `A` inside `B`, in world-space.
    pub point1: Point<Real>,
    /// The deepest point of `B` inside `A`, in world-space.
    pub point2: Point<Real>,
    /// The number of support points computed while expanding the polytope.
    pub iterations: usize,
    /// The number of vertices of the final polytope.
    pub num_vertices: usize,
    /// The number of faces of the final polytope.
    pub num_faces: usize,
}

impl Penetration {
    /// Creates a penetration result, computing `penetration_vector` from `normal` and `depth`.
    pub fn new(
        depth: Real,
        normal: Unit<Vector<Real>>,
        point1: Point<Real>,
        point2: Point<Real>,
    ) -> Self {
        Self {
            depth,
            normal,
            penetration_vector: *normal * depth,
            point1,
            point2,
            iterations: 0,
            num_vertices: 0,
            num_faces: 0,
        }
    }

    /// The same penetration, seen from `B`: the normal is negated and the points swapped.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            penetration_vector: -self.penetration_vector,
            point1: self.point2,
            point2: self.point1,
            ..*self
        }
    }
}
