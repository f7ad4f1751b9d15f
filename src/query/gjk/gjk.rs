//! The Gilbert-Johnson-Keerthi intersection test.
//!
//! GJK works on the Minkowski difference (also called Configuration Space Obstacle or CSO)
//! `A - B` of two convex colliders: they intersect if, and only if, this difference contains
//! the origin. Instead of building the difference, GJK samples it through the colliders'
//! support functions and grows a [`Simplex`] toward the origin until either:
//!
//! - a tetrahedron of support points encloses the origin (the colliders intersect), or
//! - a support point fails to get past the origin along the search direction (they don't).
//!
//! The enclosing tetrahedron is the starting polytope of the [EPA](crate::query::epa).

use na::Unit;

use crate::math::{Real, Vector, DEFAULT_EPSILON};
use crate::query::gjk::{CSOPoint, Simplex};
use crate::shape::Collider;

/// Results of the GJK algorithm.
#[derive(Clone, Debug, PartialEq)]
pub enum GjkResult {
    /// The colliders intersect. The simplex is a tetrahedron enclosing the origin.
    Intersection(Simplex),
    /// The colliders are disjoint, or merely touching.
    NoIntersection,
}

impl GjkResult {
    /// Is this an intersection?
    pub fn is_intersection(&self) -> bool {
        matches!(self, GjkResult::Intersection(_))
    }

    /// The enclosing simplex, if the colliders intersect.
    pub fn into_simplex(self) -> Option<Simplex> {
        match self {
            GjkResult::Intersection(simplex) => Some(simplex),
            GjkResult::NoIntersection => None,
        }
    }
}

/// Options of the GJK algorithm.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GjkOptions {
    /// The maximum number of support points computed before giving up.
    ///
    /// Reaching this limit is reported as no intersection.
    pub max_iterations: usize,
}

impl Default for GjkOptions {
    fn default() -> Self {
        Self { max_iterations: 64 }
    }
}

/// The base tolerance of the GJK and EPA algorithms.
///
/// It is always scaled by the magnitude of the quantities it is compared to.
pub fn eps_tol() -> Real {
    let _eps = DEFAULT_EPSILON;
    _eps * 10.0
}

/// Checks whether `g1` and `g2` intersect.
///
/// The search starts along `init_dir` if provided. Otherwise it starts along the vector
/// joining the colliders' origins (from `g1` to `g2`), or along the `x` axis if both origins
/// coincide.
///
/// Colliders that only touch (the origin lies on the boundary of their Minkowski difference)
/// are reported as not intersecting.
pub fn intersect<G1, G2>(
    g1: &G1,
    g2: &G2,
    init_dir: Option<Unit<Vector<Real>>>,
    options: &GjkOptions,
) -> GjkResult
where
    G1: ?Sized + Collider,
    G2: ?Sized + Collider,
{
    let mut dir = match init_dir {
        Some(dir) => dir.into_inner(),
        None => initial_direction(g1, g2),
    };
    let mut simplex = Simplex::new();

    for niter in 0..options.max_iterations {
        let Some(search_dir) = Unit::try_new(dir, 0.0) else {
            log::debug!(
                "GJK search direction vanished at iteration {}: grazing contact.",
                niter
            );
            return GjkResult::NoIntersection;
        };

        let support = CSOPoint::from_colliders_toward(g1, g2, &search_dir);

        // The support point did not get past the origin: the CSO lies behind the plane
        // orthogonal to `search_dir` containing the origin. The threshold is relative to the
        // distance of the support point to the origin.
        if support.point.coords.dot(&search_dir) <= eps_tol() * support.point.coords.norm() {
            log::trace!("GJK separated the colliders after {} iterations.", niter);
            return GjkResult::NoIntersection;
        }

        if simplex.contains_point(&support) {
            log::trace!("GJK stopped making progress after {} iterations.", niter);
            return GjkResult::NoIntersection;
        }

        simplex.push_front(support);

        if simplex.handle(&mut dir) {
            log::trace!("GJK enclosed the origin after {} iterations.", niter + 1);
            return GjkResult::Intersection(simplex);
        }
    }

    log::debug!(
        "GJK reached its iteration limit ({}) without enclosing the origin.",
        options.max_iterations
    );
    GjkResult::NoIntersection
}

fn initial_direction<G1, G2>(g1: &G1, g2: &G2) -> Vector<Real>
where
    G1: ?Sized + Collider,
    G2: ?Sized + Collider,
{
    let dir = g2.origin() - g1.origin();

    if dir.iter().all(|x| x.is_finite()) && dir.norm_squared() > 0.0 {
        dir
    } else {
        Vector::x()
    }
}
