use proptest::prelude::*;
use voxform_geom::{Aabb, Vec3};

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
fn vapprox(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx(a.x, b.x, eps) && approx(a.y, b.y, eps) && approx(a.z, b.z, eps)
}

// Integer-valued components keep the algebra exact in f32.
fn grid_f32() -> impl Strategy<Value = f32> {
    (-1_000i32..=1_000).prop_map(|v| v as f32)
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (grid_f32(), grid_f32(), grid_f32()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    #[test]
    fn vec3_add_commutative(a in arb_vec3(), b in arb_vec3()) {
        prop_assert!(vapprox(a + b, b + a, 1e-5));
    }

    // a·(a×b) = 0 and b·(a×b) = 0
    #[test]
    fn vec3_cross_orthogonal(a in arb_vec3(), b in arb_vec3()) {
        let c = a.cross(b);
        prop_assert_eq!(a.dot(c), 0.0);
        prop_assert_eq!(b.dot(c), 0.0);
    }

    #[test]
    fn vec3_cross_anticommutative(a in arb_vec3(), b in arb_vec3()) {
        prop_assert!(vapprox(a.cross(b) + b.cross(a), Vec3::ZERO, 1e-3));
    }

    #[test]
    fn vec3_with_axis_roundtrip(v in arb_vec3(), i in 0usize..3, k in grid_f32()) {
        let w = v.with_axis(i, k);
        prop_assert_eq!(w.axis(i), k);
        for j in (0..3).filter(|&j| j != i) {
            prop_assert_eq!(w.axis(j), v.axis(j));
        }
    }

    #[test]
    fn aabb_from_points_contains_inputs(pts in prop::collection::vec(arb_vec3(), 1..16)) {
        let bb = Aabb::from_points(pts.iter().copied()).unwrap();
        for p in &pts {
            prop_assert!(p.x >= bb.min.x && p.y >= bb.min.y && p.z >= bb.min.z);
            prop_assert!(p.x <= bb.max.x && p.y <= bb.max.y && p.z <= bb.max.z);
        }
    }
}
