//! The EPA algorithm for penetration depth computation.

pub use self::epa::{EpaOptions, EPA};
pub use self::polytope_arena::PolytopeArena;

mod epa;
mod polytope_arena;
