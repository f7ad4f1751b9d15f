use na::{Point3, Vector3};
use narrowphase3d::query::{self, PolytopeArena};
use narrowphase3d::shape::{Collider, Cuboid, MeshCollider, Segment, ShapeCollider, Triangle};

fn segment_mesh(a: Point3<f32>, b: Point3<f32>) -> MeshCollider {
    MeshCollider::new(vec![a, b]).unwrap()
}

#[test]
fn segment_through_a_cube() {
    let segment = segment_mesh(Point3::new(-2.0, -0.1, 0.05), Point3::new(2.0, 0.1, -0.05));
    let mut cube = ShapeCollider::at(Point3::new(0.0, 0.5, 0.0), Cuboid::new(Vector3::repeat(1.0)));
    let mut arena = PolytopeArena::default();

    assert!(query::intersection_test(&segment, &cube));

    // The closest face of the Minkowski difference is slightly tilted by the segment.
    let pen = query::resolve_penetration(&segment, &cube, &mut arena).unwrap();
    assert!(pen.depth > 0.5 && pen.depth < 0.6);
    assert!(pen.normal.y > 0.99);

    cube.set_origin(Point3::new(0.0, 0.5, 0.0) + *pen.normal * (pen.depth + 1.0e-3));
    assert!(!query::intersection_test(&segment, &cube));
}

#[test]
fn crossing_segments_are_flat() {
    let mut arena = PolytopeArena::default();
    let s1 = segment_mesh(Point3::new(-1.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
    let s2 = segment_mesh(Point3::new(0.0, -1.0, 0.0), Point3::new(0.0, 1.0, 0.0));

    // The Minkowski difference of two segments has no volume.
    match query::resolve_penetration(&s1, &s2, &mut arena) {
        None => {}
        Some(pen) => assert_relative_eq!(pen.depth, 0.0, epsilon = 1.0e-3),
    }

    let shape_segment = ShapeCollider::at(
        Point3::origin(),
        Segment::new(Point3::new(0.0, 0.0, -1.0), Point3::new(0.0, 0.0, 1.0)),
    );
    let first = query::intersection_test(&s1, &shape_segment);
    assert_eq!(query::intersection_test(&s1, &shape_segment), first);
}

#[test]
fn disjoint_segments() {
    let s1 = segment_mesh(Point3::new(-1.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
    let s2 = segment_mesh(Point3::new(0.0, -1.0, 1.0), Point3::new(0.0, 1.0, 1.0));

    assert!(!query::intersection_test(&s1, &s2));
}

#[test]
fn triangle_resting_inside_a_cube() {
    let triangle = ShapeCollider::at(
        Point3::origin(),
        Triangle::new(
            Point3::new(-0.5, 0.9, -0.5),
            Point3::new(0.5, 0.9, -0.5),
            Point3::new(0.0, 0.9, 0.5),
        ),
    );
    let cube = ShapeCollider::at(Point3::origin(), Cuboid::new(Vector3::repeat(1.0)));
    let mut arena = PolytopeArena::default();

    let pen = query::resolve_penetration(&cube, &triangle, &mut arena).unwrap();
    assert_relative_eq!(pen.depth, 0.1, epsilon = 1.0e-3);
    assert_relative_eq!(*pen.normal, Vector3::y(), epsilon = 1.0e-3);
}

#[test]
fn single_point_colliders() {
    let p = MeshCollider::new(vec![Point3::new(0.2, 0.1, 0.0)]).unwrap();
    let cube = ShapeCollider::at(Point3::origin(), Cuboid::new(Vector3::repeat(1.0)));
    let far = MeshCollider::new(vec![Point3::new(3.0, 0.0, 0.0)]).unwrap();

    assert!(query::intersection_test(&p, &cube));
    assert!(!query::intersection_test(&far, &cube));
}
