//! Shapes and colliders.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::collider::{Collider, ShapeCollider};
pub use self::cuboid::Cuboid;
pub use self::mesh_collider::{MeshCollider, MeshColliderError};
pub use self::segment::Segment;
#[doc(inline)]
pub use self::support_map::SupportMap;
pub use self::triangle::Triangle;
pub use self::triangle_mesh::{TriangleMesh, TriangleMeshError};

mod ball;
mod capsule;
mod collider;
mod cuboid;
mod mesh_collider;
mod segment;
mod support_map;
mod triangle;
mod triangle_mesh;
