use approx::assert_abs_diff_eq;
use intercept3d::*;

fn boxes() -> Vec<Aabb> {
    let mut out = Vec::new();
    for &(x, y, z) in &[(0.0, 0.0, 0.0), (1.5, 0.0, 0.0), (3.0, 0.0, 0.0), (0.9, -1.9, 0.5), (-2.0, 2.0, 2.1)] {
        for &size in &[Vec3::splat(2.0), Vec3::new(1.0, 3.0, 0.5), Vec3::new(4.0, 0.2, 2.0)] {
            out.push(Aabb::new(Vec3::new(x, y, z), size));
        }
    }
    out
}

#[test]
fn aabb_closest_point() {
    let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(2.0));
    let p = Vec3::new(0.0, 0.0, 1.5);
    assert!(!aabb.contains(p));
    assert_eq!(aabb.closest_point(p), Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn raycast_hits_sphere() {
    let ray = Raycast::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, 10.0);
    let hit = ray.sphere_query(&Sphere::new(Vec3::ZERO, 1.0)).unwrap();
    assert_abs_diff_eq!(hit.impact, Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-5);
    assert_abs_diff_eq!(hit.normal, Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-5);
}

#[test]
fn obb_gap_and_overlap() {
    let a = Obb::new(Vec3::ZERO, Vec3::ONE, Vec3::ZERO);
    let apart = Obb::new(Vec3::new(3.0, 0.0, 0.0), Vec3::ONE, Vec3::ZERO);
    let close = Obb::new(Vec3::new(1.5, 0.0, 0.0), Vec3::ONE, Vec3::ZERO);
    assert_eq!(a.obb_test(&apart), Ok(false));
    assert_eq!(a.obb_test(&close), Ok(true));
}

#[test]
fn swept_sphere_face() {
    let sphere = Sphere::new(Vec3::ZERO, 0.5);
    let target = Aabb::new(Vec3::new(3.0, 0.0, 0.0), Vec3::splat(2.0));
    let sweep = sphere.sweep_aabb(&target, Vec3::new(5.0, 0.0, 0.0)).unwrap();
    assert_abs_diff_eq!(sweep.center.x, 1.5, epsilon = 1e-5);
    assert_abs_diff_eq!(sweep.hit.impact.x, 2.0, epsilon = 1e-5);
}

#[test]
fn box_collision_is_symmetric() {
    let boxes = boxes();
    for a in boxes.iter() {
        for b in boxes.iter() {
            assert_eq!(a.aabb_test(b), b.aabb_test(a));

            let (oa, ob) = (Obb::new(a.origin(), a.extents(), Vec3::ZERO), Obb::new(b.origin(), b.extents(), Vec3::ZERO));
            assert_eq!(oa.obb_test(&ob), ob.obb_test(&oa));

            let turned = Obb { angle: Vec3::new(10.0, 35.0, -20.0), ..ob };
            assert_eq!(oa.obb_test(&turned), turned.obb_test(&oa));
        }
    }
}

#[test]
fn unrotated_sat_agrees_with_aabb() {
    let boxes = boxes();
    for a in boxes.iter() {
        for b in boxes.iter() {
            let (oa, ob) = (Obb::new(a.origin(), a.extents(), Vec3::ZERO), Obb::new(b.origin(), b.extents(), Vec3::ZERO));
            assert_eq!(oa.obb_test(&ob), a.aabb_test(b), "{:?} vs {:?}", a, b);
        }
    }
}

#[test]
fn contained_points_collide_as_point_spheres() {
    let aabb = Aabb::new(Vec3::new(1.0, -2.0, 0.5), Vec3::new(2.0, 3.0, 1.0));
    for n in 0..8 {
        let corner = aabb.corner(n);
        for &f in &[0.0, 0.25, 0.5, 1.0] {
            let p = aabb.origin().lerp(corner, f);
            assert!(aabb.contains(p));
            assert_eq!(aabb.sphere_test(&Sphere::new(p, 0.0)), Ok(true));
        }
    }
}

#[test]
fn raycast_and_segment_agree() {
    let targets: Vec<Shape> = vec![
        Plane::from_point(Vec3::Y, Vec3::new(0.0, -0.5, 0.0)).into(),
        Quad::with_rotation(Vec3::new(0.0, 0.0, 2.0), Vec2::new(3.0, 3.0), Vec3::new(90.0, 0.0, 0.0)).into(),
        Aabb::new(Vec3::new(0.5, 0.0, 1.0), Vec3::splat(2.0)).into(),
        Obb::new(Vec3::new(0.5, 0.0, 1.0), Vec3::ONE, Vec3::new(0.0, 30.0, 15.0)).into(),
        Sphere::new(Vec3::new(0.2, 0.1, 1.0), 1.2).into(),
        Cylinder::new(Vec3::new(0.0, 0.0, 1.5), Vec3::Y, 2.0, 1.0).into(),
        InfiniteCylinder::new(Vec3::new(0.0, 0.0, 1.5), Vec3::Y, 1.0).into(),
        Capsule::new(Vec3::new(0.0, 0.0, 1.5), Vec3::Y, 1.0, 0.8).into(),
    ];
    let rays = [
        Raycast::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, 10.0),
        Raycast::new(Vec3::new(0.3, 0.4, -4.0), Vec3::new(0.0, -0.1, 1.0).normalize(), 8.0),
        Raycast::new(Vec3::new(-4.0, 0.2, 1.2), Vec3::X, 3.0),
    ];

    for ray in rays.iter() {
        let segment = Segment::new(ray.origin, ray.origin + ray.direction * ray.max_distance);
        for target in targets.iter() {
            match (ray.shape_query(target), segment.shape_query(target)) {
                (Some(a), Some(b)) => assert_abs_diff_eq!(a, b, epsilon = 1e-4),
                (None, None) => (),
                (a, b) => panic!("{} disagreed: {:?} vs {:?}", target.kind(), a, b),
            }
        }
    }
}

#[test]
fn zero_radius_sweep_matches_segment() {
    let target = Aabb::new(Vec3::new(3.0, 0.5, -0.5), Vec3::new(2.0, 3.0, 2.0));
    let from = Vec3::new(-1.0, 0.2, 0.1);
    for &d in &[Vec3::new(6.0, 0.0, 0.0), Vec3::new(5.0, 0.7, -0.3), Vec3::new(4.0, -0.4, 0.5)] {
        let sweep = Sphere::new(from, 0.0).sweep_aabb(&target, d).unwrap();
        let hit = Segment::new(from, from + d).aabb_query(&target).unwrap();
        assert_abs_diff_eq!(sweep.hit.impact, hit.impact, epsilon = 1e-5);
    }
}

#[test]
fn unsupported_pairs_are_reported() {
    let aabb: Shape = Aabb::new(Vec3::ZERO, Vec3::ONE).into();
    let cyl: Shape = Cylinder::new(Vec3::ZERO, Vec3::Y, 1.0, 1.0).into();
    match aabb.collide(&cyl) {
        Err(Error::Unsupported { lhs, rhs }) => {
            assert_eq!(lhs, ShapeKind::Aabb);
            assert_eq!(rhs, ShapeKind::Cylinder);
        }
        other => panic!("expected an unsupported pairing, got {:?}", other),
    }
}
