//! Non-persistent geometric queries.
//!
//! # Collision queries
//! The most general functions provided by this module are:
//!
//! * [`intersection_test()`] to determine if two colliders are intersecting or not.
//! * [`resolve_penetration()`] to compute how deep two colliders overlap, and the direction
//!   separating them.
//!
//! Both work on any pair of [`Collider`](crate::shape::Collider)s. They are built on the
//! [`gjk`] and [`epa`] modules, which can be used directly to reuse the GJK simplex or to tune
//! each algorithm.
//!
//! # Line tracing
//! The [`LineTracer`] checks line-of-sight against triangles and triangle meshes.

pub use self::epa::{EpaOptions, PolytopeArena, EPA};
pub use self::gjk::{GjkOptions, GjkResult};
pub use self::intersection_test::{
    intersection_test, intersection_test_with_options, resolve_penetration,
    resolve_penetration_with_options,
};
pub use self::penetration::Penetration;
pub use self::ray::{LineTracer, Ray};

#[cfg(feature = "parallel")]
pub use self::batch::{par_intersection_tests, par_resolve_penetrations};

#[cfg(feature = "parallel")]
mod batch;
pub mod epa;
pub mod gjk;
mod intersection_test;
mod penetration;
mod ray;
