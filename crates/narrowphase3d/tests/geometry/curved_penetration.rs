use na::{Point3, Quaternion, Unit, UnitQuaternion, Vector3};
use narrowphase3d::query::{self, PolytopeArena};
use narrowphase3d::shape::{Ball, Capsule, Collider, ShapeCollider};

fn rand_range(rng: &mut oorandom::Rand32, min: f32, max: f32) -> f32 {
    min + rng.rand_float() * (max - min)
}

fn rand_point(rng: &mut oorandom::Rand32, extent: f32) -> Point3<f32> {
    Point3::new(
        rand_range(rng, -extent, extent),
        rand_range(rng, -extent, extent),
        rand_range(rng, -extent, extent),
    )
}

fn rand_rotation(rng: &mut oorandom::Rand32) -> UnitQuaternion<f32> {
    Unit::try_new(
        Quaternion::new(
            rng.rand_float() - 0.5,
            rng.rand_float() - 0.5,
            rng.rand_float() - 0.5,
            rng.rand_float() - 0.5,
        ),
        1.0e-5,
    )
    .unwrap_or(UnitQuaternion::identity())
}

fn check_ball_pairs(scale: f32) {
    let mut rng = oorandom::Rand32::new(5);
    let mut arena = PolytopeArena::default();
    let mut intersecting = 0;

    for _ in 0..300 {
        let r1 = rand_range(&mut rng, 0.3, 1.0) * scale;
        let r2 = rand_range(&mut rng, 0.3, 1.0) * scale;
        let a = ShapeCollider::at(rand_point(&mut rng, 1.0) * scale, Ball::new(r1));
        let b = ShapeCollider::at(rand_point(&mut rng, 1.0) * scale, Ball::new(r2));
        let centers = b.origin() - a.origin();
        let dist = centers.norm();

        if dist > r1 + r2 - 1.0e-2 * scale {
            continue;
        }
        intersecting += 1;

        let pen = query::resolve_penetration(&a, &b, &mut arena).unwrap();
        assert_relative_eq!(pen.depth, r1 + r2 - dist, epsilon = 1.0e-3 * scale);
        assert!(pen.normal.dot(&(centers / dist)) > 0.999, "{a:?} {b:?}");
        assert!(pen.iterations < query::EpaOptions::default().max_iterations);
    }

    assert!(intersecting > 100);
}

#[test]
fn random_ball_pairs_penetration_depth() {
    check_ball_pairs(1.0);
}

#[test]
fn random_large_ball_pairs_penetration_depth() {
    check_ball_pairs(1000.0);
}

fn check_ball_capsule_pairs(scale: f32) {
    let mut rng = oorandom::Rand32::new(2024);
    let mut arena = PolytopeArena::default();
    let mut intersecting = 0;

    for _ in 0..300 {
        let r1 = rand_range(&mut rng, 0.3, 1.0) * scale;
        let r2 = rand_range(&mut rng, 0.3, 1.0) * scale;
        let half_height = rand_range(&mut rng, 0.2, 1.0) * scale;
        let a = ShapeCollider::at(rand_point(&mut rng, 1.5) * scale, Ball::new(r1));
        let mut b = ShapeCollider::at(
            rand_point(&mut rng, 1.5) * scale,
            Capsule::new_y(half_height, r2),
        );
        b.set_rotation(rand_rotation(&mut rng));

        if !query::intersection_test(&a, &b) {
            continue;
        }
        intersecting += 1;

        let pen = query::resolve_penetration(&a, &b, &mut arena).unwrap();
        assert!(pen.depth >= 0.0);

        let origin = b.origin();
        b.set_origin(origin + *pen.normal * (pen.depth + 1.0e-3 * scale));
        assert!(!query::intersection_test(&a, &b), "{a:?} {b:?}");
    }

    assert!(intersecting > 50);
}

#[test]
fn random_ball_capsule_pairs_are_separated_by_their_penetration() {
    check_ball_capsule_pairs(1.0);
}

#[test]
fn random_large_ball_capsule_pairs_are_separated_by_their_penetration() {
    check_ball_capsule_pairs(1000.0);
}

#[test]
fn large_balls_penetration() {
    let a = ShapeCollider::at(Point3::origin(), Ball::new(100.0));
    let b = ShapeCollider::at(Point3::new(150.0, 20.0, 0.0), Ball::new(100.0));
    let centers = Vector3::new(150.0, 20.0, 0.0);

    let pen = query::resolve_penetration(&a, &b, &mut PolytopeArena::default()).unwrap();

    assert_relative_eq!(pen.depth, 200.0 - centers.norm(), epsilon = 0.1);
    assert!(pen.normal.dot(&centers.normalize()) > 0.99);
}

#[test]
fn crossing_capsules_penetration() {
    for scale in [1.0, 1000.0] {
        let a = ShapeCollider::at(
            Point3::origin(),
            Capsule::new(
                Point3::new(-scale, 0.0, 0.0),
                Point3::new(scale, 0.0, 0.0),
                0.5 * scale,
            ),
        );
        let b = ShapeCollider::at(
            Point3::new(0.5, 0.8, 0.0) * scale,
            Capsule::new(
                Point3::new(0.0, 0.0, -scale),
                Point3::new(0.0, 0.0, scale),
                0.5 * scale,
            ),
        );

        let pen = query::resolve_penetration(&a, &b, &mut PolytopeArena::default()).unwrap();

        assert_relative_eq!(pen.depth / scale, 0.2, epsilon = 1.0e-3);
        assert_relative_eq!(*pen.normal, Vector3::y(), epsilon = 1.0e-3);
    }
}
