use na::{Point3, Vector3};
use narrowphase3d::query::{self, EpaOptions, GjkOptions, PolytopeArena};
use narrowphase3d::shape::{Collider, Cuboid, MeshCollider, ShapeCollider};

fn cube_at(x: f32, y: f32, z: f32) -> ShapeCollider<Cuboid> {
    ShapeCollider::at(Point3::new(x, y, z), Cuboid::new(Vector3::repeat(1.0)))
}

#[test]
fn cube_cube_depth_and_normal() {
    let a = cube_at(0.0, 0.0, 0.0);
    let b = cube_at(1.5, 0.0, 0.0);
    let mut arena = PolytopeArena::default();

    assert!(query::intersection_test(&a, &b));
    let pen = query::resolve_penetration(&a, &b, &mut arena).expect("Penetration not found.");

    assert_relative_eq!(pen.depth, 0.5, epsilon = 1.0e-3);
    assert_relative_eq!(*pen.normal, Vector3::x(), epsilon = 1.0e-3);
    assert_relative_eq!(pen.normal.norm(), 1.0, epsilon = 1.0e-5);

    let c = Cuboid::new(Vector3::new(2.0, 1.0, 1.0));
    let a = ShapeCollider::at(Point3::new(0.0, 0.2, 0.0), c);
    let b = ShapeCollider::at(Point3::origin(), c);
    let pen = query::resolve_penetration(&a, &b, &mut arena).expect("Penetration not found.");

    assert_relative_eq!(pen.depth, 1.8, epsilon = 1.0e-3);
    assert_relative_eq!(*pen.normal, -Vector3::y(), epsilon = 1.0e-3);
}

#[test]
fn moving_b_along_the_normal_separates_the_cubes() {
    let a = cube_at(0.0, 0.0, 0.0);
    let mut arena = PolytopeArena::default();

    for origin in [
        Point3::new(1.5, 0.0, 0.0),
        Point3::new(0.3, -1.2, 0.1),
        Point3::new(-0.4, 0.2, 1.7),
    ] {
        let mut b = cube_at(origin.x, origin.y, origin.z);
        let pen = query::resolve_penetration(&a, &b, &mut arena).unwrap();

        b.set_origin(origin + *pen.normal * (pen.depth - 1.0e-2));
        assert!(query::intersection_test(&a, &b));

        b.set_origin(origin + *pen.normal * (pen.depth + 1.0e-3));
        assert!(!query::intersection_test(&a, &b));

        b.set_origin(origin + pen.penetration_vector * 1.1);
        assert!(!query::intersection_test(&a, &b));
    }
}

#[test]
fn swapping_colliders_flips_the_normal() {
    let a = cube_at(0.0, 0.0, 0.0);
    let b = cube_at(0.2, 1.4, -0.1);
    let mut arena = PolytopeArena::default();

    let ab = query::resolve_penetration(&a, &b, &mut arena).unwrap();
    let ba = query::resolve_penetration(&b, &a, &mut arena).unwrap();

    assert_relative_eq!(ab.depth, ba.depth, epsilon = 1.0e-3);
    assert_relative_eq!(*ab.normal, -*ba.normal, epsilon = 1.0e-3);
    assert_relative_eq!(*ab.normal, Vector3::y(), epsilon = 1.0e-3);
}

#[test]
fn reusing_the_arena_gives_identical_results() {
    let a = cube_at(0.0, 0.0, 0.0);
    let b = cube_at(0.7, 0.4, 1.1);
    let mut arena = PolytopeArena::default();

    let first = query::resolve_penetration(&a, &b, &mut arena).unwrap();
    let other = query::resolve_penetration(&a, &cube_at(1.5, 0.0, 0.0), &mut arena);
    assert!(other.is_some());
    let second = query::resolve_penetration(&a, &b, &mut arena).unwrap();

    assert_eq!(first, second);
}

#[test]
fn counters_describe_the_final_polytope() {
    let a = cube_at(0.0, 0.0, 0.0);
    let b = cube_at(0.6, 0.9, 0.3);
    let mut arena = PolytopeArena::default();

    let pen = query::resolve_penetration(&a, &b, &mut arena).unwrap();

    assert!(pen.iterations >= 1);
    assert_eq!(pen.num_vertices, pen.iterations + 3);
    assert!(pen.num_faces >= 4);
    assert!(pen.num_faces <= 2 * pen.num_vertices - 4);
    assert_eq!(pen.num_vertices, arena.num_vertices());
    assert_eq!(pen.num_faces, arena.num_faces());
}

#[test]
fn undersized_arenas_fail_gracefully() {
    let a = cube_at(0.0, 0.0, 0.0);
    let b = cube_at(1.5, 0.0, 0.0);

    for mut arena in [
        PolytopeArena::with_capacity(0, 0),
        PolytopeArena::with_capacity(4, 3),
        PolytopeArena::with_capacity(3, 10),
    ] {
        assert!(query::resolve_penetration(&a, &b, &mut arena).is_none());
    }

    let mut arena = PolytopeArena::for_iterations(64);
    assert!(query::resolve_penetration(&a, &b, &mut arena).is_some());
}

#[test]
fn disjoint_colliders_have_no_penetration() {
    let a = cube_at(0.0, 0.0, 0.0);
    let b = cube_at(0.0, 0.0, 2.5);
    let mut arena = PolytopeArena::default();

    assert!(query::resolve_penetration(&a, &b, &mut arena).is_none());
}

#[test]
fn mesh_collider_penetration_with_scale() {
    let cube = Cuboid::new(Vector3::repeat(1.0));
    let mut a = MeshCollider::new(cube.vertices().to_vec()).unwrap();
    let mut b = MeshCollider::new(cube.vertices().to_vec()).unwrap();
    let mut arena = PolytopeArena::default();

    // `a` spans [-3, 3] along x once scaled.
    a.set_scale(Vector3::new(3.0, 1.0, 1.0)).unwrap();
    b.set_origin(Point3::new(3.5, 0.0, 0.0));

    let pen = query::resolve_penetration_with_options(
        &a,
        &b,
        &GjkOptions::default(),
        &EpaOptions {
            max_iterations: 32,
            tolerance: 1.0e-5,
        },
        &mut arena,
    )
    .unwrap();

    assert_relative_eq!(pen.depth, 0.5, epsilon = 1.0e-3);
    assert_relative_eq!(*pen.normal, Vector3::x(), epsilon = 1.0e-3);
    assert_relative_eq!(pen.point1.x, 3.0, epsilon = 1.0e-3);
    assert_relative_eq!(pen.point2.x, 2.5, epsilon = 1.0e-3);
}
