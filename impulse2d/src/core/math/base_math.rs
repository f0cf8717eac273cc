use super::Vector2;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use impulse2d::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Normalize radians to be between `0` and `2PI`, e.g. `-PI/4` becomes `7PI/4` and `5PI` becomes
/// `PI`.
///
/// # Examples
///
/// ```
/// # use impulse2d::core::math::*;
/// # use impulse2d::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(normalize_radians(5.0 * PI).fuzzy_eq(PI));
/// assert!(normalize_radians(-PI / 4.0).fuzzy_eq(7.0 * PI / 4.0));
/// ```
#[inline]
pub fn normalize_radians<T>(angle: T) -> T
where
    T: Real,
{
    if angle >= T::zero() && angle <= T::tau() {
        return angle;
    }

    angle - (angle / T::tau()).floor() * T::tau()
}

/// Returns the smaller signed difference rotating from `angle1` to `angle2`, in `(-PI, PI]`.
///
/// # Examples
///
/// ```
/// # use impulse2d::core::math::*;
/// # use impulse2d::core::traits::*;
/// use std::f64::consts::PI;
/// assert!(delta_angle(0.5 * PI, 0.25 * PI).fuzzy_eq(-0.25 * PI));
/// assert!(delta_angle(0.25 * PI, 0.5 * PI).fuzzy_eq(0.25 * PI));
/// assert!(delta_angle(-0.75 * PI, 0.75 * PI).fuzzy_eq(-0.5 * PI));
/// ```
#[inline]
pub fn delta_angle<T>(angle1: T, angle2: T) -> T
where
    T: Real,
{
    let mut diff = normalize_radians(angle2 - angle1);
    if diff > T::pi() {
        diff = diff - T::tau();
    }

    diff
}

/// Projects every point onto `axis` and returns the `(min, max)` interval of the dot products.
///
/// `axis` does not need to be normalized, the interval is then scaled by its length. Returns
/// `None` for an empty point set.
///
/// # Examples
///
/// ```
/// # use impulse2d::core::math::*;
/// let pts = [vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(10.0, -10.0)];
/// assert_eq!(project_points(&pts, vec2(1.0, 0.0)), Some((0.0, 10.0)));
/// assert_eq!(project_points(&pts, vec2(0.0, 1.0)), Some((-10.0, 0.0)));
/// ```
pub fn project_points<T>(points: &[Vector2<T>], axis: Vector2<T>) -> Option<(T, T)>
where
    T: Real,
{
    let (first, rest) = points.split_first()?;
    let init = first.dot(axis);
    Some(rest.iter().fold((init, init), |(min, max), p| {
        let dp = p.dot(axis);
        (num_traits::real::Real::min(min, dp), num_traits::real::Real::max(max, dp))
    }))
}

/// Perpendicular of the edge running from `start` to `end`, not normalized.
///
/// For counter clockwise (y up) winding this points out of the polygon; for clockwise winding it
/// points in. SAT only needs the axis, so either winding works.
#[inline]
pub fn edge_normal<T>(start: Vector2<T>, end: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(start.y - end.y, end.x - start.x)
}
