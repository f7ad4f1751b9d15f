//! Penetration depth computation with the Expanding Polytope Algorithm.

use crate::math::{Point, Real, Vector};
use crate::query::epa::polytope_arena::{Face, PolytopeArena};
use crate::query::gjk::{self, CSOPoint, Simplex};
use crate::query::Penetration;
use crate::shape::Collider;

/// Options of the Expanding Polytope Algorithm.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EpaOptions {
    /// The maximum number of support points computed while expanding the polytope.
    ///
    /// Reaching this limit without converging yields no result.
    pub max_iterations: usize,
    /// Relative convergence tolerance.
    ///
    /// The expansion stops once the lowest support plane found so far lies less than
    /// `tolerance * r` past the closest face of the polytope, `r` being the distance from the
    /// origin to the farthest vertex of the polytope. Smooth colliders converge linearly, so
    /// each halving of this tolerance costs a few more iterations.
    pub tolerance: Real,
}

impl Default for EpaOptions {
    fn default() -> Self {
        Self {
            max_iterations: 256,
            tolerance: 1.0e-4,
        }
    }
}

/// The Expanding Polytope Algorithm.
///
/// Given two intersecting colliders and a tetrahedron of their Minkowski difference enclosing
/// the origin (as computed by [`gjk::intersect`]), the EPA grows a convex polytope inside the
/// Minkowski difference, one support point at a time. The face of the polytope closest to the
/// origin bounds the penetration depth from below, and the support plane of the difference along
/// that face's normal bounds it from above. Once both bounds meet (up to `tolerance`, relative to
/// the size of the polytope), the lowest support plane gives the penetration depth and the
/// separating normal. Reporting the upper bound guarantees that moving the colliders apart by
/// that depth separates them.
///
/// The polytope lives in a caller-provided [`PolytopeArena`], so the algorithm itself never
/// allocates once the arena has been used.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EPA {
    /// The options of this solver.
    pub options: EpaOptions,
}

impl EPA {
    /// Creates a new EPA solver.
    pub fn new(options: EpaOptions) -> Self {
        EPA { options }
    }

    /// Computes the penetration of `g1` and `g2`, starting from the GJK `simplex`.
    ///
    /// Returns `None` if:
    /// - `simplex` does not have exactly four points,
    /// - the polytope becomes degenerate or, through rounding errors, non-convex,
    /// - `arena` is too small to hold the polytope,
    /// - the expansion does not converge within `self.options.max_iterations` support points.
    ///
    /// If `simplex` is a tetrahedron that does not enclose the origin, the result is unspecified.
    pub fn penetration<G1, G2>(
        &self,
        g1: &G1,
        g2: &G2,
        simplex: &Simplex,
        arena: &mut PolytopeArena,
    ) -> Option<Penetration>
    where
        G1: ?Sized + Collider,
        G2: ?Sized + Collider,
    {
        arena.reset();

        if simplex.len() != 4 {
            log::debug!(
                "EPA needs a tetrahedron to start from, got {} points.",
                simplex.len()
            );
            return None;
        }

        for pt in simplex.points() {
            let _ = arena.push_vertex(*pt)?;
        }

        let interior = Point::from(
            arena
                .vertices
                .iter()
                .fold(Vector::<Real>::zeros(), |acc, pt| acc + pt.point.coords)
                / 4.0,
        );
        // Every tolerance below is relative to the size of the polytope.
        let mut scale = arena
            .vertices
            .iter()
            .fold(0.0, |acc: Real, pt| acc.max(pt.point.coords.norm()));

        for pts in [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]] {
            let Some(face) = Face::new_facing_away(&arena.vertices, pts, &interior) else {
                log::debug!("EPA started from a degenerate tetrahedron.");
                return None;
            };
            arena.push_face(face)?;
        }

        // The lowest support plane seen so far bounds the penetration depth from above, while
        // the closest face bounds it from below.
        let mut upper_bound = Real::MAX;
        let mut upper_face: Option<Face> = None;

        for niter in 0..self.options.max_iterations {
            let best = arena.closest_face()?;
            let margin = gjk::eps_tol() * scale;

            if best.dist < -margin {
                log::debug!(
                    "The origin lies outside of the EPA polytope (distance: {}).",
                    best.dist
                );
                return None;
            }

            let support = CSOPoint::from_colliders_toward(g1, g2, &best.normal);
            let support_dist = support.point.coords.dot(&best.normal);

            if support_dist < upper_bound {
                upper_bound = support_dist;
                upper_face = Some(best);
            }

            let gap = upper_bound - best.dist;

            log::trace!(
                "EPA iteration {}: closest face at {}, depth bound {}.",
                niter,
                best.dist,
                upper_bound
            );

            if gap <= self.options.tolerance.max(gjk::eps_tol()) * scale {
                let face = upper_face.unwrap_or(best);
                return Some(penetration_from_face(&face, upper_bound, arena, niter + 1));
            }

            let new_id = arena.push_vertex(support)?;
            let new_pt = support.point;
            scale = scale.max(new_pt.coords.norm());
            let margin = gjk::eps_tol() * scale;

            // Remove every face the new point can see. The face being expanded always goes,
            // even if the support point is within the visibility margin of its plane.
            let mut i = 0;
            while i < arena.faces.len() {
                let face = arena.faces[i];

                if face.pts == best.pts || face.can_be_seen_by(&new_pt, margin) {
                    for edge in face.edges() {
                        arena.toggle_horizon_edge(edge);
                    }
                    let _ = arena.faces.swap_remove(i);
                } else {
                    i += 1;
                }
            }

            for k in 0..arena.horizon.len() {
                let [a, b] = arena.horizon[k];
                let Some(face) = Face::new(&arena.vertices, [a, b, new_id]) else {
                    log::debug!("EPA produced a degenerate face at iteration {}.", niter);
                    return None;
                };

                if face.dist < best.dist - margin {
                    // The polytope stopped being convex around the origin.
                    log::debug!(
                        "EPA expansion got closer to the origin ({} < {}).",
                        face.dist,
                        best.dist
                    );
                    return None;
                }

                arena.push_face(face)?;
            }

            arena.horizon.clear();
        }

        log::debug!(
            "EPA did not converge within {} iterations.",
            self.options.max_iterations
        );
        None
    }
}

fn penetration_from_face(
    face: &Face,
    depth: Real,
    arena: &PolytopeArena,
    iterations: usize,
) -> Penetration {
    let bcoords = face.origin_bcoords(&arena.vertices);
    let [a, b, c] = face.pts.map(|id| arena.vertices[id]);

    let point1 = a.orig1 * bcoords[0] + b.orig1.coords * bcoords[1] + c.orig1.coords * bcoords[2];
    let point2 = a.orig2 * bcoords[0] + b.orig2.coords * bcoords[1] + c.orig2.coords * bcoords[2];

    Penetration {
        iterations,
        num_vertices: arena.vertices.len(),
        num_faces: arena.faces.len(),
        ..Penetration::new(depth.max(0.0), face.normal, point1, point2)
    }
}
