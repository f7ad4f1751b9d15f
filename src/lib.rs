/*!
narrowphase3d
=============

**narrowphase3d** is a 3-dimensional narrow-phase collision library written
with the rust programming language.

It answers two questions about a pair of convex colliders:

- do they intersect? (the GJK algorithm, see [`query::intersection_test`]);
- if they do, what is the smallest translation that separates them? (the EPA
  algorithm, see [`query::resolve_penetration`]).

Colliders are anything implementing [`shape::Collider`]: a world-space support
function plus an origin. The crate ships a brute-force [`shape::MeshCollider`]
and a [`shape::ShapeCollider`] wrapper for primitive shapes.

```
# #[cfg(feature = "f64")] extern crate narrowphase3d_f64 as narrowphase3d;
use narrowphase3d::math::{Isometry, Vector};
use narrowphase3d::query::{self, PolytopeArena};
use narrowphase3d::shape::{Cuboid, ShapeCollider};

let cube = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
let a = ShapeCollider::new(Isometry::identity(), cube);
let b = ShapeCollider::new(Isometry::translation(1.5, 0.0, 0.0), cube);

assert!(query::intersection_test(&a, &b));

let mut arena = PolytopeArena::default();
let penetration = query::resolve_penetration(&a, &b, &mut arena).unwrap();
assert!((penetration.depth - 0.5).abs() < 1.0e-3);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
///
/// Every tolerance of the crate is a multiple of [`DEFAULT_EPSILON`](math::DEFAULT_EPSILON),
/// so switching from `f32` to `f64` rescales them automatically.
#[cfg(feature = "dim3")]
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Matrix3, Point3, Translation3, UnitVector3, Vector3};
    use na::{UnitQuaternion, U3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The dimension of the ambient space.
    pub type Dim = U3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The translation type.
    pub use Translation3 as Translation;
}
