//! A collider backed by the vertex buffer of a convex mesh.

use crate::math::{Isometry, Point, Real, Rotation, Vector};
use crate::shape::Collider;
use crate::utils;

/// Errors that can occur when building a [`MeshCollider`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshColliderError {
    /// A mesh collider must contain at least one vertex.
    #[error("a mesh collider must contain at least one vertex.")]
    Empty,
    /// One vertex has a NaN or infinite coordinate.
    #[error("the vertex {0} has a non-finite coordinate.")]
    NonFiniteVertex(usize),
    /// The scale has a NaN or infinite component.
    #[error("the mesh scale has a non-finite component.")]
    NonFiniteScale,
}

/// A convex collider defined by the vertices of a mesh.
///
/// The support function scans every vertex, so this is best suited for meshes with a small
/// number of vertices. The vertices are stored in the mesh frame; they are scaled
/// component-wise by `scale`, then rotated and translated by `position` to reach world-space.
///
/// Only the convex hull of the vertices matters to the collision queries: concave meshes are
/// treated as their convex hull.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct MeshCollider {
    vertices: Vec<Point<Real>>,
    scale: Vector<Real>,
    position: Isometry<Real>,
}

impl MeshCollider {
    /// Creates a mesh collider at the world origin, with a unit scale.
    pub fn new(vertices: Vec<Point<Real>>) -> Result<Self, MeshColliderError> {
        Self::with_scale(vertices, Vector::repeat(1.0))
    }

    /// Creates a mesh collider at the world origin, with the given component-wise scale.
    pub fn with_scale(
        vertices: Vec<Point<Real>>,
        scale: Vector<Real>,
    ) -> Result<Self, MeshColliderError> {
        if vertices.is_empty() {
            return Err(MeshColliderError::Empty);
        }

        if let Some(i) = vertices
            .iter()
            .position(|pt| pt.iter().any(|x| !x.is_finite()))
        {
            return Err(MeshColliderError::NonFiniteVertex(i));
        }

        if scale.iter().any(|x| !x.is_finite()) {
            return Err(MeshColliderError::NonFiniteScale);
        }

        Ok(Self {
            vertices,
            scale,
            position: Isometry::identity(),
        })
    }

    /// The vertices of this mesh, in the mesh frame (before scaling).
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The component-wise scale applied to the vertices.
    #[inline]
    pub fn scale(&self) -> &Vector<Real> {
        &self.scale
    }

    /// Replaces the component-wise scale applied to the vertices.
    ///
    /// A non-finite scale is rejected and leaves `self` unchanged.
    pub fn set_scale(&mut self, scale: Vector<Real>) -> Result<(), MeshColliderError> {
        if scale.iter().any(|x| !x.is_finite()) {
            return Err(MeshColliderError::NonFiniteScale);
        }

        self.scale = scale;
        Ok(())
    }

    /// The world-space position of the mesh frame.
    #[inline]
    pub fn position(&self) -> &Isometry<Real> {
        &self.position
    }

    /// Sets the world-space position of the mesh frame.
    #[inline]
    pub fn set_position(&mut self, position: Isometry<Real>) {
        self.position = position;
    }

    /// The orientation of the mesh frame.
    #[inline]
    pub fn rotation(&self) -> &Rotation<Real> {
        &self.position.rotation
    }

    /// Sets the orientation of the mesh frame, keeping its origin.
    #[inline]
    pub fn set_rotation(&mut self, rotation: Rotation<Real>) {
        self.position.rotation = rotation;
    }

    /// Transforms a point from the mesh frame to world-space.
    #[inline]
    pub fn to_world(&self, pt: &Point<Real>) -> Point<Real> {
        self.position * Point::from(pt.coords.component_mul(&self.scale))
    }

    /// The index of the vertex furthest along the world-space direction `dir`.
    pub fn support_vertex_id(&self, dir: &Vector<Real>) -> usize {
        // For p' = S * p, we have p' · d = p · (S * d) since S is diagonal.
        let local_dir = self
            .position
            .inverse_transform_vector(dir)
            .component_mul(&self.scale);
        utils::point_cloud_support_point_id(&local_dir, &self.vertices)
    }
}

impl Collider for MeshCollider {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.to_world(&self.vertices[self.support_vertex_id(dir)])
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
