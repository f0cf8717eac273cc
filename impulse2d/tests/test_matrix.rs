use impulse2d::{
    assert_fuzzy_eq,
    core::{
        math::{vec2, Matrix},
        traits::FuzzyEq,
    },
    error::GeometryError,
};
use std::f64::consts::PI;

fn sample_matrices() -> Vec<Matrix> {
    let mut rotated = Matrix::from_translation(3.0, -2.0);
    rotated.pre_rotate(0.7);
    let mut scaled = Matrix::identity();
    scaled.scale_xy(2.0, 0.5).translate(1.0, 1.0);
    let mut everything = Matrix::new(1.0, 0.0, 0.0, 1.0, -4.0, 9.0);
    everything.rotate(-2.1).pre_scale(3.0).translate(0.5, 0.25);
    vec![
        Matrix::identity(),
        rotated,
        scaled,
        everything,
        Matrix::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0),
    ]
}

#[test]
fn inverse_of_inverse() {
    for m in sample_matrices() {
        let inv = m.inverse().unwrap();
        assert_fuzzy_eq!(inv.inverse().unwrap(), m);
        assert_fuzzy_eq!(m.combined(&inv), Matrix::identity());
        assert_fuzzy_eq!(inv.transform_point(m.transform_point(vec2(2.0, -7.0))), vec2(2.0, -7.0));
    }
}

#[test]
fn singular_matrix() {
    let mut m = Matrix::new(1.0, 2.0, 2.0, 4.0, 1.0, 1.0);
    assert!(!m.is_invertible());
    assert_eq!(m.inverse(), None);
    // in place inversion leaves a singular matrix untouched
    m.invert();
    assert_eq!(m, Matrix::new(1.0, 2.0, 2.0, 4.0, 1.0, 1.0));
}

#[test]
fn combine_applies_self_first() {
    let translate = Matrix::from_translation(1.0, 0.0);
    let mut rotate = Matrix::identity();
    rotate.rotate(PI / 2.0);

    let m = translate.combined(&rotate);
    assert_fuzzy_eq!(m.transform_point(vec2(0.0, 0.0)), vec2(0.0, 1.0));
    let m = rotate.combined(&translate);
    assert_fuzzy_eq!(m.transform_point(vec2(0.0, 0.0)), vec2(1.0, 0.0));
}

#[test]
fn pre_and_post_operations() {
    let mut pre = Matrix::from_translation(2.0, 0.0);
    pre.pre_rotate(PI / 2.0).pre_scale(2.0);
    assert_fuzzy_eq!(pre.translation(), vec2(2.0, 0.0));
    assert_fuzzy_eq!(pre.transform_point(vec2(1.0, 0.0)), vec2(2.0, 2.0));

    let mut post = Matrix::from_translation(2.0, 0.0);
    post.rotate(PI / 2.0).scale(2.0);
    assert_fuzzy_eq!(post.translation(), vec2(0.0, 4.0));
    assert_fuzzy_eq!(post.transform_point(vec2(1.0, 0.0)), vec2(0.0, 6.0));

    let mut m = Matrix::identity();
    m.pre_rotate(PI / 2.0).translate(1.0, 0.0);
    assert_fuzzy_eq!(m.translation(), vec2(0.0, 1.0));
    m.pre_translate(1.0, 0.0);
    assert_fuzzy_eq!(m.translation(), vec2(1.0, 1.0));
}

#[test]
fn decomposition() {
    let mut m = Matrix::from_translation(4.0, 5.0);
    m.pre_rotate(1.2).pre_scale(2.5);
    assert_fuzzy_eq!(m.rotation(), 1.2);
    assert_fuzzy_eq!(m.scale_factors(), vec2(2.5, 2.5));
    assert_fuzzy_eq!(m.uniform_scale().unwrap(), 2.5);
    assert_eq!(m.translation(), vec2(4.0, 5.0));

    m.pre_scale_xy(1.0, 2.0);
    assert!(matches!(
        m.uniform_scale(),
        Err(GeometryError::NonUniformScale { .. })
    ));
}

#[test]
fn construction() {
    assert!(Matrix::<f64>::default().is_identity());
    assert_eq!(
        Matrix::from_slice(&[1.0, 0.0, 0.0, 1.0, 2.0, 3.0]).unwrap(),
        Matrix::from_translation(2.0, 3.0)
    );
    assert_eq!(
        Matrix::<f64>::from_slice(&[1.0, 2.0]),
        Err(GeometryError::InvalidArguments {
            expected: 6,
            found: 2
        })
    );

    let mut m = Matrix::identity();
    m.set_values(2.0, 0.0, 0.0, 2.0, 0.0, 0.0);
    assert_eq!(m.determinant(), 4.0);
    assert!(!m.is_identity());
}
