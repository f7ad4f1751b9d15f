//! Independent collision queries over many collider pairs, run on the rayon thread pool.

use crate::query::epa::{EpaOptions, PolytopeArena};
use crate::query::gjk::GjkOptions;
use crate::query::{self, Penetration};
use crate::shape::Collider;
use rayon::prelude::*;

/// Runs [`query::intersection_test`] on every pair, in parallel.
///
/// The result at index `i` is the test of `pairs[i]`.
pub fn par_intersection_tests<G1, G2>(pairs: &[(G1, G2)]) -> Vec<bool>
where
    G1: Collider + Sync,
    G2: Collider + Sync,
{
    pairs
        .par_iter()
        .map(|(g1, g2)| query::intersection_test(g1, g2))
        .collect()
}

/// Runs [`query::resolve_penetration_with_options`] on every pair, in parallel.
///
/// Each worker thread allocates its own [`PolytopeArena`], sized for
/// `epa_options.max_iterations`, and reuses it for all the pairs it processes. The result at
/// index `i` is the penetration of `pairs[i]`.
pub fn par_resolve_penetrations<G1, G2>(
    pairs: &[(G1, G2)],
    epa_options: &EpaOptions,
) -> Vec<Option<Penetration>>
where
    G1: Collider + Sync,
    G2: Collider + Sync,
{
    let gjk_options = GjkOptions::default();

    pairs
        .par_iter()
        .map_init(
            || PolytopeArena::for_iterations(epa_options.max_iterations),
            |arena, (g1, g2)| {
                query::resolve_penetration_with_options(g1, g2, &gjk_options, epa_options, arena)
            },
        )
        .collect()
}
