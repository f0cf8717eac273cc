//! Separating axis helpers shared by the polygon-like intersection routines.
//!
//! Vertex slices describe closed convex outlines, a single vertex is a point. Axes come from the
//! perpendicular of each edge running from the previous vertex to the current one, starting with
//! the edge that closes the outline (last vertex to first).

use crate::{
    core::{
        math::{edge_normal, project_points, Vector2},
        traits::Real,
    },
    shape::Circle,
};

/// Edges of a closed outline as `(previous, current)` vertex pairs, starting with
/// `(last, first)`.
pub(crate) fn edges<T>(
    vertices: &[Vector2<T>],
) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + '_
where
    T: Real,
{
    let n = vertices.len();
    (0..n).map(move |i| (vertices[(i + n - 1) % n], vertices[i]))
}

/// Resolve the overlap of the `moving` and `fixed` projection intervals on `axis`.
///
/// Returns `None` if the intervals are separated by a gap. Otherwise returns the overlap and the
/// axis oriented so that moving the `moving` shape along it by the overlap separates the
/// intervals. When one interval contains the other the smaller of the two boundary gaps is added
/// to the overlap (ties take the max side).
pub(crate) fn resolve_axis<T>(
    axis: Vector2<T>,
    (min_m, max_m): (T, T),
    (min_f, max_f): (T, T),
) -> Option<(T, Vector2<T>)>
where
    T: Real,
{
    if max_m < min_f || min_m > max_f {
        return None;
    }

    let mut overlap =
        num_traits::real::Real::min(max_m, max_f) - num_traits::real::Real::max(min_m, min_f);
    let mut axis = axis;
    let contained = (min_m > min_f && max_m < max_f) || (min_m < min_f && max_m > max_f);
    if contained {
        let diff1 = (min_m - min_f).abs();
        let diff2 = (max_m - max_f).abs();
        if diff1 < diff2 {
            overlap = overlap + diff1;
            if min_m > min_f {
                axis.negate_mut();
            }
        } else {
            overlap = overlap + diff2;
            if max_m > max_f {
                axis.negate_mut();
            }
        }
    } else if min_m < min_f {
        axis.negate_mut();
    }

    Some((overlap, axis))
}

/// Keeps the first axis with the strictly smallest overlap.
#[derive(Debug, Copy, Clone)]
struct SmallestOverlap<T> {
    best: Option<(T, Vector2<T>)>,
}

impl<T> SmallestOverlap<T>
where
    T: Real,
{
    fn new() -> Self {
        SmallestOverlap { best: None }
    }

    fn offer(&mut self, overlap: T, axis: Vector2<T>) {
        match self.best {
            Some((smallest, _)) if overlap >= smallest => {}
            _ => self.best = Some((overlap, axis)),
        }
    }

    fn into_mtv(self) -> Option<Vector2<T>> {
        self.best.map(|(overlap, axis)| axis.scale(overlap))
    }
}

/// MTV needed to move the `v1` outline out of the `v2` outline, `None` if they are separated.
///
/// Axes from both outlines are tested. Zero length edges contribute no axis, if no axis is left
/// at all the result is `None`.
pub(crate) fn edges_vs_edges<T>(v1: &[Vector2<T>], v2: &[Vector2<T>]) -> Option<Vector2<T>>
where
    T: Real,
{
    let mut smallest = SmallestOverlap::new();
    for (start, end) in edges(v1).chain(edges(v2)) {
        let axis = edge_normal(start, end).normalize();
        if axis.is_zero() {
            continue;
        }

        let moving = project_points(v1, axis)?;
        let fixed = project_points(v2, axis)?;
        let (overlap, axis) = resolve_axis(axis, moving, fixed)?;
        smallest.offer(overlap, axis);
    }

    smallest.into_mtv()
}

/// True if `a` sorts before `b`, comparing vertices by x then y and then by length.
fn outline_precedes<T>(a: &[Vector2<T>], b: &[Vector2<T>]) -> bool
where
    T: Real,
{
    for (va, vb) in a.iter().zip(b) {
        if va.x != vb.x {
            return va.x < vb.x;
        }
        if va.y != vb.y {
            return va.y < vb.y;
        }
    }

    a.len() < b.len()
}

/// [edges_vs_edges] for two outlines of the same kind, with ties between axes broken the same
/// way for both argument orders so that swapping the outlines only negates the MTV.
pub(crate) fn ordered_edges_vs_edges<T>(
    v1: &[Vector2<T>],
    v2: &[Vector2<T>],
) -> Option<Vector2<T>>
where
    T: Real,
{
    if outline_precedes(v2, v1) {
        edges_vs_edges(v2, v1).map(|mtv| -mtv)
    } else {
        edges_vs_edges(v1, v2)
    }
}

#[inline]
fn project_circle<T>(cir: &Circle<T>, axis: Vector2<T>) -> (T, T)
where
    T: Real,
{
    let d = Vector2::new(cir.x, cir.y).dot(axis);
    (d - cir.r, d + cir.r)
}

/// Vertex of `vertices` closest to `point`, the first one wins ties.
fn nearest_vertex<T>(vertices: &[Vector2<T>], point: Vector2<T>) -> Option<Vector2<T>>
where
    T: Real,
{
    vertices
        .iter()
        .fold(None, |acc: Option<(T, Vector2<T>)>, &v| {
            let dist = point.distance_squared(v);
            match acc {
                Some((nearest, _)) if dist >= nearest => acc,
                _ => Some((dist, v)),
            }
        })
        .map(|(_, v)| v)
}

/// Axis from the vertex nearest to the circle center toward the center, `None` if the center
/// lies on that vertex.
fn circle_vertex_axis<T>(cir: &Circle<T>, vertices: &[Vector2<T>]) -> Option<Vector2<T>>
where
    T: Real,
{
    let c = Vector2::new(cir.x, cir.y);
    let axis = (c - nearest_vertex(vertices, c)?).normalize();
    if axis.is_zero() {
        None
    } else {
        Some(axis)
    }
}

/// MTV needed to move the circle out of the `vertices` outline, `None` if they are separated.
pub(crate) fn circle_vs_edges<T>(cir: &Circle<T>, vertices: &[Vector2<T>]) -> Option<Vector2<T>>
where
    T: Real,
{
    let edge_axes = edges(vertices).map(|(start, end)| edge_normal(start, end).normalize());
    let mut smallest = SmallestOverlap::new();
    for axis in edge_axes.chain(circle_vertex_axis(cir, vertices)) {
        if axis.is_zero() {
            continue;
        }

        let moving = project_circle(cir, axis);
        let fixed = project_points(vertices, axis)?;
        let (overlap, axis) = resolve_axis(axis, moving, fixed)?;
        smallest.offer(overlap, axis);
    }

    smallest.into_mtv()
}

/// Strict interval separation used by the boolean tests, touching intervals count as separated.
#[inline]
fn separated<T>((min1, max1): (T, T), (min2, max2): (T, T)) -> bool
where
    T: Real,
{
    max1 <= min2 || min1 >= max2
}

/// True if no edge axis of `v1` separates the two outlines.
///
/// Only half of a full SAT test, call it both ways round.
pub(crate) fn vertices_vs_vertices<T>(v1: &[Vector2<T>], v2: &[Vector2<T>]) -> bool
where
    T: Real,
{
    for (start, end) in edges(v1) {
        let axis = edge_normal(start, end);
        if axis.is_zero() {
            continue;
        }

        match (project_points(v1, axis), project_points(v2, axis)) {
            (Some(p1), Some(p2)) if !separated(p1, p2) => {}
            _ => return false,
        }
    }

    true
}

/// True if no edge axis of the outline nor the nearest vertex axis separates it from the circle.
pub(crate) fn circle_vs_vertices<T>(cir: &Circle<T>, vertices: &[Vector2<T>]) -> bool
where
    T: Real,
{
    let edge_axes = edges(vertices).map(|(start, end)| edge_normal(start, end).normalize());
    for axis in edge_axes.chain(circle_vertex_axis(cir, vertices)) {
        if axis.is_zero() {
            continue;
        }

        match project_points(vertices, axis) {
            Some(p) if !separated(p, project_circle(cir, axis)) => {}
            _ => return false,
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn resolve_axis_orientation() {
        let axis = vec2(1.0, 0.0);
        // moving sits left of fixed, pushed further left
        assert_eq!(
            resolve_axis(axis, (0.0, 2.0), (1.0, 3.0)),
            Some((1.0, vec2(-1.0, 0.0)))
        );
        // moving sits right of fixed, pushed right
        assert_eq!(
            resolve_axis(axis, (1.0, 3.0), (0.0, 2.0)),
            Some((1.0, vec2(1.0, 0.0)))
        );
        assert_eq!(resolve_axis(axis, (0.0, 1.0), (2.0, 3.0)), None);
        // touching overlaps by zero
        assert_eq!(
            resolve_axis(axis, (0.0, 1.0), (1.0, 2.0)),
            Some((0.0, vec2(-1.0, 0.0)))
        );
    }

    #[test]
    fn resolve_axis_containment() {
        let axis = vec2(1.0, 0.0);
        // moving [1, 3] inside fixed [0, 10], closest exit is through the min side
        assert_eq!(
            resolve_axis(axis, (1.0, 3.0), (0.0, 10.0)),
            Some((3.0, vec2(-1.0, 0.0)))
        );
        // moving [7, 9] inside fixed [0, 10], closest exit is through the max side
        assert_eq!(
            resolve_axis(axis, (7.0, 9.0), (0.0, 10.0)),
            Some((3.0, vec2(1.0, 0.0)))
        );
    }

    #[test]
    fn edges_start_with_closing_edge() {
        let pts = [vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 1.0)];
        let e: Vec<_> = edges(&pts).collect();
        assert_eq!(e[0], (vec2(1.0, 1.0), vec2(0.0, 0.0)));
        assert_eq!(e[1], (vec2(0.0, 0.0), vec2(1.0, 0.0)));
        assert_eq!(e.len(), 3);
    }

    #[test]
    fn tied_axes_resolve_the_same_both_ways() {
        // x and y overlaps are both 1
        let square = [vec2(0.0, 0.0), vec2(4.0, 0.0), vec2(4.0, 4.0), vec2(0.0, 4.0)];
        let tri = [vec2(3.0, 3.0), vec2(3.0, 6.0), vec2(6.0, 3.0)];
        let ab = ordered_edges_vs_edges(&square, &tri).unwrap();
        let ba = ordered_edges_vs_edges(&tri, &square).unwrap();
        assert_eq!(ab, -ba);
        assert_eq!(ab, edges_vs_edges(&square, &tri).unwrap());
    }

    #[test]
    fn point_outline_has_no_axis() {
        let p = [vec2(1.0, 1.0)];
        assert_eq!(edges_vs_edges(&p, &p), None);
    }
}
