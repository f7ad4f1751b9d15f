use crate::math::{Point, Real, Vector};
use crate::query::epa::EpaOptions;
use crate::query::gjk::{self, CSOPoint};
use crate::utils;
use na::Unit;

/// A triangular face of the polytope, wound counter-clockwise when seen from outside.
#[derive(Copy, Clone, Debug)]
pub(super) struct Face {
    pub pts: [usize; 3],
    pub normal: Unit<Vector<Real>>,
    /// Signed distance from the origin to the face's plane.
    pub dist: Real,
}

impl Face {
    /// Builds the face `pts`, keeping its winding. `None` if the face is degenerate.
    pub fn new(vertices: &[CSOPoint], pts: [usize; 3]) -> Option<Self> {
        let normal = utils::ccw_face_normal([
            &vertices[pts[0]].point,
            &vertices[pts[1]].point,
            &vertices[pts[2]].point,
        ])?;
        let dist = normal.dot(&vertices[pts[0]].point.coords);

        Some(Face { pts, normal, dist })
    }

    /// Builds the face `pts` with its normal pointing away from `interior`.
    pub fn new_facing_away(
        vertices: &[CSOPoint],
        pts: [usize; 3],
        interior: &Point<Real>,
    ) -> Option<Self> {
        let face = Self::new(vertices, pts)?;

        if face.normal.dot(&(vertices[pts[0]].point - interior)) < 0.0 {
            Self::new(vertices, [pts[0], pts[2], pts[1]])
        } else {
            Some(face)
        }
    }

    /// Can `point` see this face, i.e., is it more than `margin` in front of its plane?
    pub fn can_be_seen_by(&self, point: &Point<Real>, margin: Real) -> bool {
        self.normal.dot(&point.coords) - self.dist > margin
    }

    /// The directed edges of this face.
    pub fn edges(&self) -> [[usize; 2]; 3] {
        [
            [self.pts[0], self.pts[1]],
            [self.pts[1], self.pts[2]],
            [self.pts[2], self.pts[0]],
        ]
    }

    /// Barycentric coordinates of the projection of the origin on this face.
    pub fn origin_bcoords(&self, vertices: &[CSOPoint]) -> [Real; 3] {
        let a = vertices[self.pts[0]].point;
        let b = vertices[self.pts[1]].point;
        let c = vertices[self.pts[2]].point;
        let proj = Point::from(*self.normal * self.dist);

        let ab = b - a;
        let ac = c - a;
        let ap = proj - a;
        let d00 = ab.dot(&ab);
        let d01 = ab.dot(&ac);
        let d11 = ac.dot(&ac);
        let d20 = ap.dot(&ab);
        let d21 = ap.dot(&ac);
        let denom = d00 * d11 - d01 * d01;

        if denom.abs() <= gjk::eps_tol() * d00 * d11 {
            return [1.0, 0.0, 0.0];
        }

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        [1.0 - v - w, v, w]
    }
}

/// Scratch memory for the polytope expanded by the [`EPA`](crate::query::epa::EPA).
///
/// The arena is owned by the caller and lent to each penetration query, which clears it before
/// use. Its vertex and face counts are bounded: a query that would need more than the arena's
/// capacity gives up and reports no result instead of allocating. Reusing one arena across
/// queries avoids any allocation after the first one.
///
/// Concurrent queries need one arena each.
#[derive(Clone, Debug)]
pub struct PolytopeArena {
    max_vertices: usize,
    max_faces: usize,
    pub(super) vertices: Vec<CSOPoint>,
    pub(super) faces: Vec<Face>,
    pub(super) horizon: Vec<[usize; 2]>,
}

impl Default for PolytopeArena {
    fn default() -> Self {
        Self::for_iterations(EpaOptions::default().max_iterations)
    }
}

impl PolytopeArena {
    /// An arena holding at most `max_vertices` vertices and `max_faces` faces at any time.
    ///
    /// Any capacity is accepted. An arena too small for the initial tetrahedron (4 vertices and
    /// 4 faces) makes every query fail.
    pub fn with_capacity(max_vertices: usize, max_faces: usize) -> Self {
        Self {
            max_vertices,
            max_faces,
            vertices: Vec::with_capacity(max_vertices),
            faces: Vec::with_capacity(max_faces),
            horizon: Vec::new(),
        }
    }

    /// An arena large enough for `iterations` expansions of the initial tetrahedron.
    ///
    /// Each expansion adds one vertex, and a closed triangulated polytope with `n` vertices has
    /// at most `2n - 4` faces.
    pub fn for_iterations(iterations: usize) -> Self {
        let max_vertices = 4 + iterations;
        Self::with_capacity(max_vertices, 2 * max_vertices - 4)
    }

    /// The maximum number of vertices this arena can hold.
    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }

    /// The maximum number of live faces this arena can hold.
    pub fn max_faces(&self) -> usize {
        self.max_faces
    }

    /// The number of vertices left by the last query.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The number of live faces left by the last query.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    pub(super) fn reset(&mut self) {
        self.vertices.clear();
        self.faces.clear();
        self.horizon.clear();
    }

    /// Adds a vertex, returning its index, or `None` if the arena is full.
    pub(super) fn push_vertex(&mut self, vertex: CSOPoint) -> Option<usize> {
        if self.vertices.len() >= self.max_vertices {
            log::debug!(
                "EPA polytope arena exhausted: more than {} vertices.",
                self.max_vertices
            );
            return None;
        }

        self.vertices.push(vertex);
        Some(self.vertices.len() - 1)
    }

    /// Adds a face, or returns `None` if the arena is full.
    pub(super) fn push_face(&mut self, face: Face) -> Option<()> {
        if self.faces.len() >= self.max_faces {
            log::debug!(
                "EPA polytope arena exhausted: more than {} faces.",
                self.max_faces
            );
            return None;
        }

        self.faces.push(face);
        Some(())
    }

    /// The live face closest to the origin.
    pub(super) fn closest_face(&self) -> Option<Face> {
        self.faces
            .iter()
            .min_by(|a, b| a.dist.total_cmp(&b.dist))
            .copied()
    }

    /// Adds `edge` to the horizon, unless its twin is already there, in which case both cancel
    /// out.
    pub(super) fn toggle_horizon_edge(&mut self, edge: [usize; 2]) {
        if let Some(twin) = self
            .horizon
            .iter()
            .position(|e| e[0] == edge[1] && e[1] == edge[0])
        {
            let _ = self.horizon.swap_remove(twin);
        } else {
            self.horizon.push(edge);
        }
    }
}
