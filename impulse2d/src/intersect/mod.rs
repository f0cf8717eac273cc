//! Boolean and minimum translation vector (MTV) intersection tests for every pair of shapes.
//!
//! Boolean tests are strict, shapes that only touch do not intersect. The `_sat` variants return
//! the MTV from the perspective of the first argument (adding it to the first shape separates it
//! from the second); touching shapes give a zero MTV and `None` means there is a gap between the
//! shapes.

mod circle_intersect;
mod polygon_intersect;
mod rect_intersect;
mod sat;

pub use circle_intersect::*;
pub use polygon_intersect::*;
pub use rect_intersect::*;

use crate::{
    core::{math::Vector2, traits::Real},
    shape::Shape,
};

/// True if `shape1` and `shape2` overlap.
///
/// # Examples
///
/// ```
/// # use impulse2d::intersect::*;
/// # use impulse2d::shape::*;
/// # use impulse2d::core::math::*;
/// let rect: Shape = Rect::new(0.0, 0.0, 10.0, 10.0).into();
/// let circle: Shape = Circle::new(5.0, -5.0, 1.0).into();
/// assert!(shape_vs_shape(&rect, &circle));
/// assert!(shape_vs_shape(&circle, &rect));
/// assert!(!shape_vs_shape(&rect, &vec2(20.0, 0.0).into()));
/// ```
pub fn shape_vs_shape<T>(shape1: &Shape<T>, shape2: &Shape<T>) -> bool
where
    T: Real,
{
    match (shape1, shape2) {
        (Shape::Circle(c1), Shape::Circle(c2)) => circle_vs_circle(c1, c2),
        (Shape::Circle(c), Shape::Polygon(p)) => circle_vs_polygon(c, p),
        (Shape::Circle(c), Shape::Rect(r)) => circle_vs_rect(c, r),
        (Shape::Circle(c), Shape::Vector(v)) => circle_vs_vector(c, *v),
        (Shape::Polygon(p), Shape::Circle(c)) => circle_vs_polygon(c, p),
        (Shape::Polygon(p1), Shape::Polygon(p2)) => polygon_vs_polygon(p1, p2),
        (Shape::Polygon(p), Shape::Rect(r)) => polygon_vs_rect(p, r),
        (Shape::Polygon(p), Shape::Vector(v)) => polygon_vs_vector(p, *v),
        (Shape::Rect(r), Shape::Circle(c)) => circle_vs_rect(c, r),
        (Shape::Rect(r), Shape::Polygon(p)) => polygon_vs_rect(p, r),
        (Shape::Rect(r1), Shape::Rect(r2)) => rect_vs_rect(r1, r2),
        (Shape::Rect(r), Shape::Vector(v)) => rect_vs_vector(r, *v),
        (Shape::Vector(v), Shape::Circle(c)) => circle_vs_vector(c, *v),
        (Shape::Vector(v), Shape::Polygon(p)) => polygon_vs_vector(p, *v),
        (Shape::Vector(v), Shape::Rect(r)) => rect_vs_vector(r, *v),
        (Shape::Vector(v1), Shape::Vector(v2)) => vector_vs_vector(*v1, *v2),
    }
}

/// MTV moving `shape1` out of `shape2`, `None` if they are separated.
///
/// Swapping the arguments negates the result.
///
/// # Examples
///
/// ```
/// # use impulse2d::intersect::*;
/// # use impulse2d::shape::*;
/// # use impulse2d::core::math::*;
/// let rect: Shape = Rect::new(0.0, 0.0, 10.0, 10.0).into();
/// let circle: Shape = Circle::new(5.0, -5.0, 1.0).into();
/// assert_eq!(shape_vs_shape_sat(&circle, &rect), Some(vec2(-6.0, 0.0)));
/// assert_eq!(shape_vs_shape_sat(&rect, &circle), Some(vec2(6.0, 0.0)));
/// ```
pub fn shape_vs_shape_sat<T>(shape1: &Shape<T>, shape2: &Shape<T>) -> Option<Vector2<T>>
where
    T: Real,
{
    match (shape1, shape2) {
        (Shape::Circle(c1), Shape::Circle(c2)) => circle_vs_circle_sat(c1, c2),
        (Shape::Circle(c), Shape::Polygon(p)) => circle_vs_polygon_sat(c, p),
        (Shape::Circle(c), Shape::Rect(r)) => circle_vs_rect_sat(c, r),
        (Shape::Circle(c), Shape::Vector(v)) => circle_vs_vector_sat(c, *v),
        (Shape::Polygon(p), Shape::Circle(c)) => circle_vs_polygon_sat(c, p).map(|m| -m),
        (Shape::Polygon(p1), Shape::Polygon(p2)) => polygon_vs_polygon_sat(p1, p2),
        (Shape::Polygon(p), Shape::Rect(r)) => polygon_vs_rect_sat(p, r),
        (Shape::Polygon(p), Shape::Vector(v)) => polygon_vs_vector_sat(p, *v),
        (Shape::Rect(r), Shape::Circle(c)) => circle_vs_rect_sat(c, r).map(|m| -m),
        (Shape::Rect(r), Shape::Polygon(p)) => polygon_vs_rect_sat(p, r).map(|m| -m),
        (Shape::Rect(r1), Shape::Rect(r2)) => rect_vs_rect_sat(r1, r2),
        (Shape::Rect(r), Shape::Vector(v)) => rect_vs_vector_sat(r, *v),
        (Shape::Vector(v), Shape::Circle(c)) => circle_vs_vector_sat(c, *v).map(|m| -m),
        (Shape::Vector(v), Shape::Polygon(p)) => polygon_vs_vector_sat(p, *v).map(|m| -m),
        (Shape::Vector(v), Shape::Rect(r)) => rect_vs_vector_sat(r, *v).map(|m| -m),
        (Shape::Vector(v1), Shape::Vector(v2)) => vector_vs_vector_sat(*v1, *v2),
    }
}
