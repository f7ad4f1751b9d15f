use crate::query::epa::{EpaOptions, PolytopeArena, EPA};
use crate::query::gjk::{self, GjkOptions, GjkResult};
use crate::query::Penetration;
use crate::shape::Collider;

/// Computes how deep two intersecting colliders overlap, and how to separate them.
///
/// This runs the GJK algorithm to find a simplex enclosing the origin, then the EPA to expand
/// it, both with default options. The polytope of the EPA is stored in `arena`, which can be
/// reused across calls.
///
/// Returns `None` if the colliders don't intersect, or if the EPA failed (see
/// [`EPA::penetration`]).
pub fn resolve_penetration<G1, G2>(
    g1: &G1,
    g2: &G2,
    arena: &mut PolytopeArena,
) -> Option<Penetration>
where
    G1: ?Sized + Collider,
    G2: ?Sized + Collider,
{
    resolve_penetration_with_options(
        g1,
        g2,
        &GjkOptions::default(),
        &EpaOptions::default(),
        arena,
    )
}

/// Same as [`resolve_penetration`] with custom GJK and EPA options.
pub fn resolve_penetration_with_options<G1, G2>(
    g1: &G1,
    g2: &G2,
    gjk_options: &GjkOptions,
    epa_options: &EpaOptions,
    arena: &mut PolytopeArena,
) -> Option<Penetration>
where
    G1: ?Sized + Collider,
    G2: ?Sized + Collider,
{
    match gjk::intersect(g1, g2, None, gjk_options) {
        GjkResult::Intersection(simplex) => {
            EPA::new(*epa_options).penetration(g1, g2, &simplex, arena)
        }
        GjkResult::NoIntersection => None,
    }
}
