use proptest::prelude::*;

use crate::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn approx_eq(a: Float, b: Float, tolerance: Float) -> bool {
    (a - b).abs() <= tolerance * a.abs().max(b.abs()).max(1.0)
}

impl proptest::arbitrary::Arbitrary for Vector2 {
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        (-10.0..10.0, -10.0..10.0)
            .prop_map(|(x, y)| Vector2::new(x, y))
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

impl proptest::arbitrary::Arbitrary for Vector3 {
    type Parameters = ();

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        (-10.0..10.0, -10.0..10.0, -10.0..10.0)
            .prop_map(|(x, y, z)| Vector3::new(x, y, z))
            .boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

fn positive_vector3() -> impl Strategy<Value = Vector3> {
    (0.1..10.0, 0.1..10.0, 0.1..10.0).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

proptest! {
    #[test]
    fn proptest_dot_is_commutative(a: Vector3, b: Vector3) {
        prop_assert_eq!(a.dot(&b), b.dot(&a));
    }

    #[test]
    fn proptest_norm_is_nonnegative(v: Vector3) {
        prop_assert!(v.norm() >= 0.0);
        prop_assert_eq!(v.norm() == 0.0, v.is_zero());
        prop_assert_eq!(0.0, Vector3::ZERO.norm());
    }

    #[test]
    fn proptest_with_norm(v: Vector3, norm in 0.1..100.0) {
        prop_assume!(v.norm() > 1e-6);
        prop_assert!(approx_eq(norm, v.with_norm(norm).norm(), 1e-12));
        prop_assert!(Vector3::ZERO.with_norm(norm).is_zero());
    }

    #[test]
    fn proptest_collinearity(v: Vector2, scale in -10.0..10.0) {
        prop_assume!(!v.is_zero());
        prop_assert!(v.is_collinear_within(&v, Precision::APPROX));
        prop_assert!(v.is_collinear_within(&(v * scale), Precision::APPROX));
        prop_assert!(!v.is_collinear_with(&v.perpendicular()));
    }

    #[test]
    fn proptest_rotation_preserves_norm(v: Vector3, rotation: Vector3) {
        init_logging();
        prop_assert!(approx_eq(v.norm(), v.rotated(rotation).norm(), 1e-12));
    }

    #[test]
    fn proptest_segment_contains_its_points(a: Vector3, b: Vector3, t in 0.0..=1.0) {
        init_logging();
        let s = segment(a, b);
        prop_assert!(s.contains(&a));
        prop_assert!(s.contains_within(&b, Precision::APPROX));
        prop_assert!(s.contains_within(&s.midpoint(), Precision::APPROX));
        prop_assert!(s.contains_within(&(a + (b - a) * t), Precision::APPROX));
    }

    #[test]
    fn proptest_ray_excludes_points_behind_origin(origin: Vector3, through: Vector3, t in 0.1..10.0) {
        prop_assume!(origin.distance_to(&through) > 0.1);
        let ray = ray_from_left(origin, through);
        let behind = origin - ray.descriptor() * t;
        prop_assert!(ray.contains(&origin));
        prop_assert!(!ray.contains_within(&behind, Precision::APPROX));
        prop_assert_eq!(origin, ray.nearest_point(&behind));
    }

    #[test]
    fn proptest_line_nearest_point_keeps_contained_points(a: Vector3, b: Vector3, t in -2.0..3.0) {
        let p = a + (b - a) * t;
        let s = segment(a, b);
        if s.contains(&p) {
            prop_assert_eq!(p, s.nearest_point(&p));
        }
        let r = ray_from_left(a, b);
        if r.contains(&p) {
            prop_assert_eq!(p, r.nearest_point(&p));
        }
        let l = straight(a, b);
        if l.contains(&p) {
            prop_assert_eq!(p, l.nearest_point(&p));
        }
        prop_assert_eq!(a, s.nearest_point(&a));
        prop_assert_eq!(a, r.nearest_point(&a));
        prop_assert_eq!(a, l.nearest_point(&a));
    }

    #[test]
    fn proptest_frame_nearest_point_keeps_contained_points(
        half_extents in positive_vector3(),
        p: Vector3,
        axis in 0..3_u8,
        negative: bool,
    ) {
        let frame = Cuboid::from_half_extents(half_extents).frame();
        let h = half_extents.get(axis);
        let on_face = p
            .zip_map(half_extents, |c, h| c.max(-h).min(h))
            .with_component(axis, if negative { -h } else { h });
        prop_assert!(frame.contains(&on_face));
        prop_assert_eq!(on_face, frame.nearest_point(&on_face));
    }

    #[test]
    fn proptest_line_nearest_point_is_contained(a: Vector3, b: Vector3, p: Vector3) {
        init_logging();
        let prec = Precision::new(1e-9);
        let s = segment(a, b);
        prop_assert!(s.contains_within(&s.nearest_point(&p), prec));
        let l = straight(a, b);
        prop_assert!(l.contains_within(&l.nearest_point(&p), prec));
    }

    #[test]
    fn proptest_ball_nearest_point(center: Vector3, radius in 0.1..10.0, p: Vector3) {
        let ball = Sphere::new(radius).with_center(center);
        let q = ball.nearest_point(&p);
        prop_assert!(ball.contains_within(&q, Precision::APPROX));
        if ball.contains(&p) {
            prop_assert_eq!(p, q);
        }
        prop_assert!(ball.frame().contains_within(&ball.frame().nearest_point(&p), Precision::APPROX));
    }

    #[test]
    fn proptest_box_nearest_point(center: Vector3, half_extents in positive_vector3(), p: Vector3) {
        let cuboid = Cuboid::from_half_extents(half_extents).with_center(center);
        let q = cuboid.nearest_point(&p);
        prop_assert!(cuboid.contains_within(&q, Precision::APPROX));
        prop_assert!(q.distance_to(&cuboid.nearest_point(&q)) <= EPSILON);

        let frame = cuboid.frame();
        let r = frame.nearest_point(&p);
        prop_assert!(frame.contains_within(&r, Precision::APPROX));
        prop_assert!(p.distance_to(&q) <= p.distance_to(&r) + EPSILON);
    }

    #[test]
    fn proptest_rotated_box_nearest_point(half_extents in positive_vector3(), orientation: Vector3, p: Vector3) {
        let cuboid = Cuboid::from_half_extents(half_extents).with_orientation(orientation);
        let q = cuboid.nearest_point(&p);
        prop_assert!(cuboid.contains_within(&q, Precision::APPROX));
        let r = cuboid.frame().nearest_point(&p);
        prop_assert!(cuboid.frame().contains_within(&r, Precision::APPROX));
    }
}
