use super::{
    circle_intersect::{circle_vs_circle_closed, circle_vs_rect_closed, circle_vs_vector_closed},
    circle_vs_circle, circle_vs_rect, circle_vs_vector,
    sat::{edges, edges_vs_edges, ordered_edges_vs_edges, vertices_vs_vertices},
};
use crate::{
    core::{math::Vector2, traits::Real},
    shape::{Polygon, Rect},
};

/// True if the polygons overlap, exactly touching polygons do not intersect.
pub fn polygon_vs_polygon<T>(poly1: &Polygon<T>, poly2: &Polygon<T>) -> bool
where
    T: Real,
{
    if !circle_vs_circle(&poly1.bounding_circle(), &poly2.bounding_circle()) {
        return false;
    }

    let (v1, v2) = (poly1.vertices(), poly2.vertices());
    vertices_vs_vertices(v1, v2) && vertices_vs_vertices(v2, v1)
}

/// MTV moving `poly1` out of `poly2`.
pub fn polygon_vs_polygon_sat<T>(poly1: &Polygon<T>, poly2: &Polygon<T>) -> Option<Vector2<T>>
where
    T: Real,
{
    if !circle_vs_circle_closed(&poly1.bounding_circle(), &poly2.bounding_circle(), true) {
        return None;
    }

    ordered_edges_vs_edges(poly1.vertices(), poly2.vertices())
}

pub fn polygon_vs_rect<T>(poly: &Polygon<T>, rect: &Rect<T>) -> bool
where
    T: Real,
{
    if !circle_vs_rect(&poly.bounding_circle(), rect) {
        return false;
    }

    let v1 = poly.vertices();
    let v2 = rect.vertices();
    vertices_vs_vertices(v1, &v2) && vertices_vs_vertices(&v2, v1)
}

/// MTV moving the polygon out of the rect.
pub fn polygon_vs_rect_sat<T>(poly: &Polygon<T>, rect: &Rect<T>) -> Option<Vector2<T>>
where
    T: Real,
{
    if !circle_vs_rect_closed(&poly.bounding_circle(), rect, true) {
        return None;
    }

    edges_vs_edges(poly.vertices(), &rect.vertices())
}

/// Crossing number point in polygon test.
///
/// # Examples
///
/// ```
/// # use impulse2d::intersect::*;
/// # use impulse2d::core::math::*;
/// # use impulse2d::polygon;
/// let tri = polygon![(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)].unwrap();
/// assert!(polygon_vs_vector(&tri, vec2(2.0, 2.0)));
/// assert!(!polygon_vs_vector(&tri, vec2(8.0, 8.0)));
/// ```
pub fn polygon_vs_vector<T>(poly: &Polygon<T>, vect: Vector2<T>) -> bool
where
    T: Real,
{
    if !circle_vs_vector(&poly.bounding_circle(), vect) {
        return false;
    }

    edges(poly.vertices())
        .filter(|&(vj, vi)| {
            (vi.y > vect.y) != (vj.y > vect.y)
                && vect.x < (vj.x - vi.x) * (vect.y - vi.y) / (vj.y - vi.y) + vi.x
        })
        .count()
        % 2
        == 1
}

/// MTV moving the polygon off the point.
pub fn polygon_vs_vector_sat<T>(poly: &Polygon<T>, vect: Vector2<T>) -> Option<Vector2<T>>
where
    T: Real,
{
    if !circle_vs_vector_closed(&poly.bounding_circle(), vect, true) {
        return None;
    }

    edges_vs_edges(poly.vertices(), &[vect])
}
