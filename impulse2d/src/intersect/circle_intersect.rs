use super::sat::{circle_vs_edges, circle_vs_vertices};
use crate::{
    core::{math::Vector2, traits::Real},
    shape::{Circle, Polygon, Rect},
};

#[inline]
fn within<T>(dist_squared: T, radius: T, closed: bool) -> bool
where
    T: Real,
{
    let r2 = radius * radius;
    if closed {
        dist_squared <= r2
    } else {
        dist_squared < r2
    }
}

#[inline]
pub(crate) fn circle_vs_circle_closed<T>(cir1: &Circle<T>, cir2: &Circle<T>, closed: bool) -> bool
where
    T: Real,
{
    let dx = cir2.x - cir1.x;
    let dy = cir2.y - cir1.y;
    within(dx * dx + dy * dy, cir1.r + cir2.r, closed)
}

#[inline]
pub(crate) fn circle_vs_vector_closed<T>(cir: &Circle<T>, vect: Vector2<T>, closed: bool) -> bool
where
    T: Real,
{
    let dx = vect.x - cir.x;
    let dy = vect.y - cir.y;
    within(dx * dx + dy * dy, cir.r, closed)
}

/// Voronoi region test: the rect is expressed relative to the circle center and the distance
/// to the nearest corner or edge is compared against the radius.
pub(crate) fn circle_vs_rect_closed<T>(cir: &Circle<T>, rect: &Rect<T>, closed: bool) -> bool
where
    T: Real,
{
    let l = rect.x - cir.x;
    let t = rect.y - cir.y;
    let r = l + rect.w;
    let b = t - rect.h;

    // offset to the nearest rect side on each axis, None if the rect spans the center there
    let nearest_x = if r < T::zero() {
        Some(r)
    } else if l > T::zero() {
        Some(l)
    } else {
        None
    };
    let nearest_y = if t < T::zero() {
        Some(t)
    } else if b > T::zero() {
        Some(b)
    } else {
        None
    };

    match (nearest_x, nearest_y) {
        (Some(x), Some(y)) => within(x * x + y * y, cir.r, closed),
        (Some(d), None) | (None, Some(d)) => within(d * d, cir.r, closed),
        (None, None) => true,
    }
}

/// Center difference scaled to the penetration depth, concentric shapes resolve along +x.
fn center_push<T>(dc: Vector2<T>, depth_limit: T) -> Option<Vector2<T>>
where
    T: Real,
{
    let l = dc.length();
    if l > depth_limit {
        return None;
    }

    if l == T::zero() {
        return Some(Vector2::new(depth_limit, T::zero()));
    }

    Some(dc.scale((depth_limit - l) / l))
}

/// True if the circles overlap, exactly touching circles do not intersect.
///
/// # Examples
///
/// ```
/// # use impulse2d::intersect::*;
/// # use impulse2d::shape::*;
/// let c1 = Circle::new(0.0, 0.0, 1.0);
/// assert!(circle_vs_circle(&c1, &Circle::new(1.5, 0.0, 1.0)));
/// assert!(!circle_vs_circle(&c1, &Circle::new(2.0, 0.0, 1.0)));
/// ```
#[inline]
pub fn circle_vs_circle<T>(cir1: &Circle<T>, cir2: &Circle<T>) -> bool
where
    T: Real,
{
    circle_vs_circle_closed(cir1, cir2, false)
}

/// MTV moving `cir1` out of `cir2`.
///
/// # Examples
///
/// ```
/// # use impulse2d::intersect::*;
/// # use impulse2d::shape::*;
/// # use impulse2d::core::math::*;
/// let c1 = Circle::new(0.0, 0.0, 1.0);
/// let mtv = circle_vs_circle_sat(&c1, &Circle::new(1.0, 0.0, 1.0)).unwrap();
/// assert_eq!(mtv, vec2(-1.0, 0.0));
/// assert_eq!(circle_vs_circle_sat(&c1, &Circle::new(2.0, 0.0, 1.0)), Some(vec2(0.0, 0.0)));
/// assert_eq!(circle_vs_circle_sat(&c1, &Circle::new(3.0, 0.0, 1.0)), None);
/// ```
pub fn circle_vs_circle_sat<T>(cir1: &Circle<T>, cir2: &Circle<T>) -> Option<Vector2<T>>
where
    T: Real,
{
    let dc = Vector2::new(cir1.x - cir2.x, cir1.y - cir2.y);
    center_push(dc, cir1.r + cir2.r)
}

pub fn circle_vs_polygon<T>(cir: &Circle<T>, poly: &Polygon<T>) -> bool
where
    T: Real,
{
    circle_vs_circle(cir, &poly.bounding_circle()) && circle_vs_vertices(cir, poly.vertices())
}

/// MTV moving the circle out of the polygon.
pub fn circle_vs_polygon_sat<T>(cir: &Circle<T>, poly: &Polygon<T>) -> Option<Vector2<T>>
where
    T: Real,
{
    if !circle_vs_circle_closed(cir, &poly.bounding_circle(), true) {
        return None;
    }

    circle_vs_edges(cir, poly.vertices())
}

#[inline]
pub fn circle_vs_rect<T>(cir: &Circle<T>, rect: &Rect<T>) -> bool
where
    T: Real,
{
    circle_vs_rect_closed(cir, rect, false)
}

/// MTV moving the circle out of the rect.
///
/// A circle inside the rect is pushed out through the nearest side of the rect along the first
/// tested edge axis with the smallest exit distance.
pub fn circle_vs_rect_sat<T>(cir: &Circle<T>, rect: &Rect<T>) -> Option<Vector2<T>>
where
    T: Real,
{
    if !circle_vs_rect_closed(cir, rect, true) {
        return None;
    }

    circle_vs_edges(cir, &rect.vertices())
}

/// True if the point lies strictly inside the circle.
#[inline]
pub fn circle_vs_vector<T>(cir: &Circle<T>, vect: Vector2<T>) -> bool
where
    T: Real,
{
    circle_vs_vector_closed(cir, vect, false)
}

pub fn circle_vs_vector_sat<T>(cir: &Circle<T>, vect: Vector2<T>) -> Option<Vector2<T>>
where
    T: Real,
{
    let dc = Vector2::new(cir.x - vect.x, cir.y - vect.y);
    center_push(dc, cir.r)
}
