//! Implementation details of the `intersection_test` and `resolve_penetration` functions.

pub use self::intersection_test::{intersection_test, intersection_test_with_options};
pub use self::resolve_penetration::{resolve_penetration, resolve_penetration_with_options};

mod resolve_penetration;
