use super::sat::{edges_vs_edges, ordered_edges_vs_edges};
use crate::{
    core::{math::Vector2, traits::Real},
    shape::Rect,
};

#[inline]
fn rect_vs_rect_closed<T>(rect1: &Rect<T>, rect2: &Rect<T>, closed: bool) -> bool
where
    T: Real,
{
    if closed {
        rect1.left() <= rect2.right()
            && rect1.right() >= rect2.left()
            && rect1.top() >= rect2.bottom()
            && rect1.bottom() <= rect2.top()
    } else {
        rect1.left() < rect2.right()
            && rect1.right() > rect2.left()
            && rect1.top() > rect2.bottom()
            && rect1.bottom() < rect2.top()
    }
}

#[inline]
fn rect_vs_vector_closed<T>(rect: &Rect<T>, vect: Vector2<T>, closed: bool) -> bool
where
    T: Real,
{
    if closed {
        vect.x >= rect.left()
            && vect.x <= rect.right()
            && vect.y <= rect.top()
            && vect.y >= rect.bottom()
    } else {
        vect.x > rect.left()
            && vect.x < rect.right()
            && vect.y < rect.top()
            && vect.y > rect.bottom()
    }
}

/// True if the rects overlap, rects sharing only an edge do not intersect.
///
/// # Examples
///
/// ```
/// # use impulse2d::intersect::*;
/// # use impulse2d::shape::*;
/// let r1 = Rect::new(0.0, 0.0, 10.0, 10.0);
/// assert!(rect_vs_rect(&r1, &Rect::new(5.0, -5.0, 10.0, 10.0)));
/// assert!(!rect_vs_rect(&r1, &Rect::new(10.0, 0.0, 10.0, 10.0)));
/// ```
#[inline]
pub fn rect_vs_rect<T>(rect1: &Rect<T>, rect2: &Rect<T>) -> bool
where
    T: Real,
{
    rect_vs_rect_closed(rect1, rect2, false)
}

/// MTV moving `rect1` out of `rect2`.
pub fn rect_vs_rect_sat<T>(rect1: &Rect<T>, rect2: &Rect<T>) -> Option<Vector2<T>>
where
    T: Real,
{
    if !rect_vs_rect_closed(rect1, rect2, true) {
        return None;
    }

    ordered_edges_vs_edges(&rect1.vertices(), &rect2.vertices())
}

/// True if the point lies strictly inside the rect.
#[inline]
pub fn rect_vs_vector<T>(rect: &Rect<T>, vect: Vector2<T>) -> bool
where
    T: Real,
{
    rect_vs_vector_closed(rect, vect, false)
}

/// MTV moving the rect off the point.
pub fn rect_vs_vector_sat<T>(rect: &Rect<T>, vect: Vector2<T>) -> Option<Vector2<T>>
where
    T: Real,
{
    if !rect_vs_vector_closed(rect, vect, true) {
        return None;
    }

    edges_vs_edges(&rect.vertices(), &[vect])
}

/// Exact equality.
#[inline]
pub fn vector_vs_vector<T>(vect1: Vector2<T>, vect2: Vector2<T>) -> bool
where
    T: Real,
{
    vect1 == vect2
}

/// Zero MTV for equal points, `None` otherwise.
#[inline]
pub fn vector_vs_vector_sat<T>(vect1: Vector2<T>, vect2: Vector2<T>) -> Option<Vector2<T>>
where
    T: Real,
{
    if vect1 == vect2 {
        Some(Vector2::zero())
    } else {
        None
    }
}
