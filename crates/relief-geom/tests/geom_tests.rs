use relief_geom::{Aabb, Sphere, Transform, Vec3};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn vec3_add_sub_neg() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 5.0, -6.0);
    let c = a + b;
    assert!(vec3_approx_eq(c, Vec3::new(-3.0, 7.0, -3.0), 1e-6));
    assert!(vec3_approx_eq(c - a, b, 1e-6));
    assert!(vec3_approx_eq(-a, Vec3::new(-1.0, -2.0, -3.0), 1e-6));
}

#[test]
fn vec3_cross_basis() {
    let i = Vec3::new(1.0, 0.0, 0.0);
    let j = Vec3::new(0.0, 1.0, 0.0);
    let k = Vec3::new(0.0, 0.0, 1.0);
    assert!(vec3_approx_eq(i.cross(j), k, 1e-6));
    assert!(vec3_approx_eq(j.cross(k), i, 1e-6));
    assert!(vec3_approx_eq(k.cross(i), j, 1e-6));
}

#[test]
fn vec3_normalized_zero_is_noop() {
    assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    let n = Vec3::new(3.0, 4.0, 0.0).normalized();
    assert!(vec3_approx_eq(n, Vec3::new(0.6, 0.8, 0.0), 1e-6));
}

#[test]
fn aabb_from_points_and_center() {
    let b = Aabb::from_points([
        Vec3::new(-1.0, 0.0, 2.0),
        Vec3::new(3.0, -2.0, 4.0),
        Vec3::new(0.0, 5.0, 3.0),
    ]);
    assert_eq!(b.min, Vec3::new(-1.0, -2.0, 2.0));
    assert_eq!(b.max, Vec3::new(3.0, 5.0, 4.0));
    assert!(vec3_approx_eq(b.center(), Vec3::new(1.0, 1.5, 3.0), 1e-6));
    assert!(vec3_approx_eq(b.size(), Vec3::new(4.0, 7.0, 2.0), 1e-6));
}

#[test]
fn aabb_empty_is_union_identity() {
    let b = Aabb::new(Vec3::new(0.0, 1.0, 2.0), Vec3::new(3.0, 4.0, 5.0));
    assert!(Aabb::EMPTY.is_empty());
    assert_eq!(Aabb::EMPTY.union(b), b);
    assert_eq!(Aabb::EMPTY.center(), Vec3::ZERO);
    assert!(!b.is_empty());
}

#[test]
fn sphere_encloses_points() {
    let pts = [Vec3::new(-2.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)];
    let s = Sphere::enclosing(&pts);
    assert!(vec3_approx_eq(s.center, Vec3::new(0.0, 0.5, 0.0), 1e-6));
    for p in pts {
        assert!(p.distance(s.center) <= s.radius + 1e-6);
    }
}

#[test]
fn rotation_minus_90_about_x_lifts_plane_z_into_world_y() {
    let t = Transform::IDENTITY.with_rotation_deg(-90.0, 0.0, 0.0);
    // plane (x, y, height) -> world (x, height, -y)
    let p = t.apply(Vec3::new(5.0, 10.0, 42.0));
    assert!(vec3_approx_eq(p, Vec3::new(5.0, 42.0, -10.0), 1e-4));
}

#[test]
fn rotation_90_about_x_maps_strip_height_onto_z() {
    let t = Transform::IDENTITY.with_rotation_deg(90.0, 0.0, 0.0);
    let p = t.apply(Vec3::new(3.0, 7.0, 0.0));
    assert!(vec3_approx_eq(p, Vec3::new(3.0, 0.0, 7.0), 1e-4));
}

#[test]
fn rotation_xyz_order_applies_y_before_x() {
    // (90, -90, 0): strip x runs down the plane's y axis, strip y becomes z.
    let t = Transform::IDENTITY.with_rotation_deg(90.0, -90.0, 0.0);
    let p = t.apply(Vec3::new(4.0, 6.0, 0.0));
    assert!(vec3_approx_eq(p, Vec3::new(0.0, -4.0, 6.0), 1e-4));
}

#[test]
fn transform_scales_before_translating() {
    let t = Transform::from_translation(Vec3::new(10.0, 0.0, 0.0))
        .with_scale(Vec3::new(2.0, 3.0, 4.0));
    let p = t.apply(Vec3::new(1.0, 1.0, 1.0));
    assert!(vec3_approx_eq(p, Vec3::new(12.0, 3.0, 4.0), 1e-6));
}
