use crate::math::{Real, Vector};
use crate::query::gjk::{self, CSOPoint};
use arrayvec::ArrayVec;

/// The simplex grown by the GJK algorithm.
///
/// This is an ordered set of up to four [`CSOPoint`]s, the most recent one first. Each call to
/// [`Simplex::handle`] reduces it to the feature (vertex, edge, triangle) closest to the origin
/// and computes the next search direction, until a tetrahedron encloses the origin.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Simplex {
    points: ArrayVec<CSOPoint, 4>,
}

impl Simplex {
    /// Creates an empty simplex.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `point` as the most recent point of this simplex.
    ///
    /// Existing points are shifted by one rank. If the simplex already contained four points,
    /// the oldest one is dropped.
    pub fn push_front(&mut self, point: CSOPoint) {
        if self.points.is_full() {
            let _ = self.points.pop();
        }

        self.points.insert(0, point);
    }

    /// The number of points of this simplex, between 0 and 4.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Does this simplex contain no point?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The `i`-th point of this simplex, `0` being the most recent.
    ///
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn point(&self, i: usize) -> &CSOPoint {
        &self.points[i]
    }

    /// All the points of this simplex, the most recent first.
    #[inline]
    pub fn points(&self) -> &[CSOPoint] {
        &self.points
    }

    /// The most recent point of this simplex.
    #[inline]
    pub fn front(&self) -> Option<&CSOPoint> {
        self.points.first()
    }

    /// Removes every point from this simplex.
    pub fn clear(&mut self) {
        self.points.clear()
    }

    /// Does `point` match one of the points of this simplex, up to the GJK tolerance?
    pub fn contains_point(&self, point: &CSOPoint) -> bool {
        self.points
            .iter()
            .any(|pt| relative_eq!(pt.point, point.point, epsilon = gjk::eps_tol()))
    }

    /// Reduces this simplex to its feature closest to the origin and updates the search
    /// direction `dir` so that it points toward the origin.
    ///
    /// Returns `true` if, and only if, this simplex is a tetrahedron enclosing the origin. In
    /// that case the simplex and `dir` are left unchanged.
    pub fn handle(&mut self, dir: &mut Vector<Real>) -> bool {
        match self.points.len() {
            0 => false,
            1 => {
                *dir = -self.points[0].point.coords;
                false
            }
            2 => {
                self.handle_line(dir);
                false
            }
            3 => {
                self.handle_triangle(dir);
                false
            }
            _ => self.handle_tetrahedron(dir),
        }
    }

    fn set(&mut self, pts: &[CSOPoint]) {
        self.points.clear();
        self.points.extend(pts.iter().copied());
    }

    fn handle_line(&mut self, dir: &mut Vector<Real>) {
        let a = self.points[0];
        let b = self.points[1];
        let ab = b - a;
        let ao = -a.point.coords;

        if ab.dot(&ao) > scaled_tol(ab.norm() * ao.norm()) {
            *dir = edge_direction(&ab, &ao);
        } else {
            self.set(&[a]);
            *dir = ao;
        }
    }

    fn handle_triangle(&mut self, dir: &mut Vector<Real>) {
        let a = self.points[0];
        let b = self.points[1];
        let c = self.points[2];
        let ab = b - a;
        let ac = c - a;
        let ao = -a.point.coords;
        let abc = ab.cross(&ac);

        let (ab_norm, ac_norm, ao_norm) = (ab.norm(), ac.norm(), ao.norm());

        // Edge regions are inclusive so that a flat triangle never reaches the face case.
        if abc.cross(&ac).dot(&ao) > -scaled_tol(ab_norm * ac_norm * ac_norm * ao_norm) {
            if ac.dot(&ao) > scaled_tol(ac_norm * ao_norm) {
                self.set(&[a, c]);
                *dir = edge_direction(&ac, &ao);
            } else {
                self.reduce_to_ab_or_a(dir);
            }
        } else if ab.cross(&abc).dot(&ao) > -scaled_tol(ab_norm * ab_norm * ac_norm * ao_norm) {
            self.reduce_to_ab_or_a(dir);
        } else if abc.dot(&ao) >= 0.0 {
            *dir = abc;
        } else {
            self.set(&[a, c, b]);
            *dir = -abc;
        }
    }

    fn reduce_to_ab_or_a(&mut self, dir: &mut Vector<Real>) {
        let a = self.points[0];
        let b = self.points[1];
        let ab = b - a;
        let ao = -a.point.coords;

        if ab.dot(&ao) > scaled_tol(ab.norm() * ao.norm()) {
            self.set(&[a, b]);
            *dir = edge_direction(&ab, &ao);
        } else {
            self.set(&[a]);
            *dir = ao;
        }
    }

    fn handle_tetrahedron(&mut self, dir: &mut Vector<Real>) -> bool {
        let [a, b, c, d] = [
            self.points[0],
            self.points[1],
            self.points[2],
            self.points[3],
        ];
        let ab = b - a;
        let ac = c - a;
        let ad = d - a;

        let volume = ab.cross(&ac).dot(&ad);
        if volume.abs() <= scaled_tol(ab.norm() * ac.norm() * ad.norm()) {
            log::trace!("Flat GJK tetrahedron, dropping its oldest point.");
            self.points.truncate(3);
            self.handle_triangle(dir);
            return false;
        }

        // The three faces adjacent to the newest point, each with its opposite vertex.
        for [p, q, opp] in [[b, c, d], [c, d, b], [d, b, c]] {
            if outside_face(&a, &p, &q, &opp) {
                self.set(&[a, p, q]);
                self.handle_triangle(dir);
                return false;
            }
        }

        if outside_face(&b, &c, &d, &a) {
            self.set(&[b, c, d]);
            self.handle_triangle(dir);
            return false;
        }

        true
    }
}

/// Is the origin strictly in front of the face `(p0, p1, p2)`, the front being the side
/// opposite to `opp`?
fn outside_face(p0: &CSOPoint, p1: &CSOPoint, p2: &CSOPoint, opp: &CSOPoint) -> bool {
    let mut normal = (*p1 - *p0).cross(&(*p2 - *p0));

    if normal.dot(&(*opp - *p0)) > 0.0 {
        normal = -normal;
    }

    let po = -p0.point.coords;
    normal.dot(&po) > scaled_tol(normal.norm() * po.norm())
}

fn scaled_tol(magnitude: Real) -> Real {
    gjk::eps_tol() * magnitude
}

/// The direction orthogonal to the edge `ab` pointing toward the origin, `ao` being the
/// vector from `a` to the origin.
fn edge_direction(ab: &Vector<Real>, ao: &Vector<Real>) -> Vector<Real> {
    let dir = ab.cross(ao).cross(ab);

    if dir.norm() > scaled_tol(ab.norm_squared() * ao.norm()) {
        dir
    } else {
        // The origin lies on the edge.
        any_orthogonal(ab)
    }
}

fn any_orthogonal(v: &Vector<Real>) -> Vector<Real> {
    let mut result = Vector::x();

    if v.norm_squared() > 0.0 {
        Vector::orthonormal_subspace_basis(&[*v], |dir| {
            result = *dir;
            false
        });
    }

    result
}
