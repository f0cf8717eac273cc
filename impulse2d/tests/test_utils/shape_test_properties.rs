use impulse2d::{
    core::{
        math::{vec2, Vector2},
        traits::FuzzyEq,
    },
    shape::Polygon,
    AABB,
};

/// Fuzzy compare AABB values
pub fn aabb_fuzzy_eq(a: &AABB<f64>, b: &AABB<f64>) -> bool {
    a.min_x.fuzzy_eq(b.min_x)
        && a.min_y.fuzzy_eq(b.min_y)
        && a.max_x.fuzzy_eq(b.max_x)
        && a.max_y.fuzzy_eq(b.max_y)
}

/// Fuzzy compare optional MTVs, both `None` counts as equal.
pub fn mtv_fuzzy_eq(a: Option<Vector2<f64>>, b: Option<Vector2<f64>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.fuzzy_eq(b),
        _ => false,
    }
}

/// Regular polygon with `n` vertices on a circle of radius `r` around `center`, counter clockwise
/// starting on the +x axis.
pub fn regular_polygon(n: usize, center: Vector2<f64>, r: f64) -> Polygon {
    let step = std::f64::consts::TAU / n as f64;
    let vertices = (0..n)
        .map(|i| {
            let (sin, cos) = (step * i as f64).sin_cos();
            center + vec2(r * cos, r * sin)
        })
        .collect();
    Polygon::new(vertices).unwrap()
}
