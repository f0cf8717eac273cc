use impulse2d::{
    assert_fuzzy_eq,
    core::{
        math::{vec2, Matrix, Vector2},
        traits::FuzzyEq,
    },
};
use std::f64::consts::PI;

#[test]
fn double_negation() {
    for v in [vec2(1.5, -2.0), vec2(0.0, 0.0), vec2(-1e6, 3e-7)] {
        assert_eq!(-(-v), v);
        let mut w = v;
        w.negate_mut().negate_mut();
        assert_eq!(w, v);
    }
}

#[test]
fn normalize_has_unit_length() {
    for v in [vec2(3.0, 4.0), vec2(-1e-3, 2e-3), vec2(1e8, -1e8)] {
        assert_fuzzy_eq!(v.normalize().length(), 1.0);
    }
    assert_eq!(Vector2::<f64>::zero().normalize(), Vector2::zero());
    assert_eq!(vec2(0.0, -5.0).scale_to_length(2.0), vec2(0.0, -2.0));
}

#[test]
fn products() {
    let a = vec2(2.0, 1.0);
    let b = vec2(-1.0, 3.0);
    assert_eq!(a.dot(b), 1.0);
    assert_eq!(a.perp_dot(b), 7.0);
    assert_eq!(a.mul_components(b), vec2(-2.0, 3.0));
    assert_eq!(b.div_components(a), vec2(-0.5, 3.0));
    assert_eq!(a.distance_squared(b), 13.0);
    assert_fuzzy_eq!(a.distance(b), 13.0f64.sqrt());
    assert_eq!(a * 2.0, vec2(4.0, 2.0));
    assert_eq!(a.scale_xy(2.0, -1.0), vec2(4.0, -1.0));
    assert_eq!(
        Vector2::triple_product(a, b, a),
        b.scale(a.dot(a)) - a.scale(b.dot(a))
    );
}

#[test]
fn rotation_is_counter_clockwise() {
    let v = vec2(1.0, 0.0);
    assert_fuzzy_eq!(v.rotate(PI / 2.0), vec2(0.0, 1.0));
    assert_fuzzy_eq!(v.perp(), vec2(0.0, 1.0));
    assert_fuzzy_eq!(vec2(2.0, 1.0).rotate_about(vec2(1.0, 1.0), PI), vec2(0.0, 1.0));
    assert_fuzzy_eq!(v.angle_between(vec2(0.0, -1.0)), -PI / 2.0);
    assert_fuzzy_eq!(vec2(1.0, 1.0).angle_to(vec2(1.0, 3.0)), PI / 2.0);
}

#[test]
fn normals_point_right() {
    assert_fuzzy_eq!(vec2(0.0, 3.0).normal(), vec2(1.0, 0.0));
    assert_fuzzy_eq!(vec2(1.0, 1.0).normal_to(vec2(1.0, -4.0)), vec2(-1.0, 0.0));
    assert_fuzzy_eq!(vec2(2.0, 0.0).unit_perp(), vec2(0.0, 1.0));
}

#[test]
fn projection() {
    let v = vec2(3.0, 3.0);
    assert_eq!(v.project_onto(vec2(2.0, 0.0)), vec2(3.0, 0.0));
    assert_fuzzy_eq!(vec2(1.0, 2.0).project_onto(vec2(1.0, 1.0)), vec2(1.5, 1.5));
}

#[test]
fn longest_and_shortest() {
    let a = vec2(3.0, 4.0);
    let b = vec2(-4.0, 3.0);
    let c = vec2(1.0, 1.0);
    assert_eq!(Vector2::longest(a, c), a);
    assert_eq!(Vector2::shortest(a, c), c);
    // ties keep the first argument
    assert_eq!(Vector2::longest(a, b), a);
    assert_eq!(Vector2::shortest(b, a), b);
}

#[test]
fn transform_by_matrix() {
    let mut m = Matrix::from_translation(5.0, 0.0);
    m.pre_rotate(PI / 2.0);
    assert_fuzzy_eq!(vec2(1.0, 0.0).transform(&m), vec2(5.0, 1.0));
    assert_fuzzy_eq!(vec2(1.0, 0.0).transform(&m.inverse().unwrap()), vec2(0.0, 4.0));
}

#[test]
fn fuzzy_compare() {
    let v = vec2(1.0, 1.0);
    assert!(v.fuzzy_eq(vec2(1.0 + 1e-10, 1.0)));
    assert!(!v.fuzzy_eq(vec2(1.0 + 1e-6, 1.0)));
    assert!(v.fuzzy_eq_eps(vec2(1.0 + 1e-6, 1.0), 1e-5));
    assert!(1.0f64.fuzzy_eq(1.0 + 1e-10));
}
