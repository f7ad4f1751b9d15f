//! An indexed triangle mesh placed in the world.

use crate::math::{Isometry, Point, Real};
use crate::shape::Triangle;

/// Errors that can occur when building a [`TriangleMesh`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriangleMeshError {
    /// A triangle mesh must contain at least one triangle.
    #[error("a triangle mesh must contain at least one triangle.")]
    EmptyIndices,
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {index} which does not exist.")]
    IndexOutOfBounds {
        /// The index of the faulty triangle.
        triangle: u32,
        /// The out-of-bounds vertex index.
        index: u32,
    },
}

/// A set of triangles sharing a vertex buffer.
///
/// Unlike [`MeshCollider`](crate::shape::MeshCollider) this keeps the faces of the mesh,
/// which is what line tracing needs. It does not have to be convex.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct TriangleMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
    /// The world-space position of the mesh frame.
    pub position: Isometry<Real>,
}

impl TriangleMesh {
    /// Creates a triangle mesh at the world origin.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriangleMeshError> {
        if indices.is_empty() {
            return Err(TriangleMeshError::EmptyIndices);
        }

        for (triangle, idx) in indices.iter().enumerate() {
            if let Some(index) = idx.iter().find(|i| **i as usize >= vertices.len()) {
                return Err(TriangleMeshError::IndexOutOfBounds {
                    triangle: triangle as u32,
                    index: *index,
                });
            }
        }

        Ok(Self {
            vertices,
            indices,
            position: Isometry::identity(),
        })
    }

    /// The vertex buffer of this mesh, in the mesh frame.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// The `i`-th triangle of this mesh, in the mesh frame.
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// An iterator through all the triangles of this mesh, in world-space.
    pub fn world_triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        (0..self.indices.len() as u32).map(move |i| self.triangle(i).transformed(&self.position))
    }
}
