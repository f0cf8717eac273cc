use super::{Circle, ShapeId, ShapeOps};
use crate::{
    core::{
        math::{Matrix, Vector2},
        traits::Real,
    },
    error::{GeometryError, Result},
};
use static_aabb2d_index::AABB;
use std::{cell::Cell, fmt};

/// Closed polygon described by its vertices (at least 3).
///
/// The vertex average and the bounding circle radius around it are computed lazily and cached;
/// any transform or re-centering invalidates the caches. Winding order is not constrained, the
/// intersection routines only assume the polygon is convex.
pub struct Polygon<T = f64> {
    vertices: Vec<Vector2<T>>,
    center: Cell<Option<Vector2<T>>>,
    radius: Cell<Option<T>>,
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Create a polygon from `vertices`, fails with
    /// [InvalidShape](GeometryError::InvalidShape) if there are fewer than 3 vertices.
    ///
    /// Collinear or repeated vertices are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// # use impulse2d::core::math::*;
    /// # use impulse2d::shape::*;
    /// let square = Polygon::new(vec![
    ///     vec2(0.0, 0.0),
    ///     vec2(2.0, 0.0),
    ///     vec2(2.0, 2.0),
    ///     vec2(0.0, 2.0),
    /// ])
    /// .unwrap();
    /// assert_eq!(square.center(), vec2(1.0, 1.0));
    /// assert!(Polygon::new(vec![vec2(0.0, 0.0), vec2(1.0, 0.0)]).is_err());
    /// ```
    pub fn new(vertices: Vec<Vector2<T>>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::InvalidShape {
                vertex_count: vertices.len(),
            });
        }

        Ok(Polygon {
            vertices,
            center: Cell::new(None),
            radius: Cell::new(None),
        })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<T>] {
        &self.vertices
    }

    /// Owned copy of the vertices.
    #[inline]
    pub fn to_vertices(&self) -> Vec<Vector2<T>> {
        self.vertices.clone()
    }

    /// Distance from the center to the farthest vertex.
    pub fn bounding_radius(&self) -> T {
        if let Some(r) = self.radius.get() {
            return r;
        }

        let c = self.center();
        let r = self
            .vertices
            .iter()
            .fold(T::zero(), |acc, v| num_traits::real::Real::max(acc, v.distance_squared(c)))
            .sqrt();
        self.radius.set(Some(r));
        r
    }

    /// Circle around the center that encloses every vertex.
    #[inline]
    pub fn bounding_circle(&self) -> Circle<T> {
        Circle::from_center(self.center(), self.bounding_radius())
    }

    fn invalidate_caches(&mut self) {
        self.center.set(None);
        self.radius.set(None);
    }
}

impl<T> ShapeOps<T> for Polygon<T>
where
    T: Real,
{
    #[inline]
    fn shape_id(&self) -> ShapeId {
        ShapeId::Polygon
    }

    /// Average of the vertices.
    fn center(&self) -> Vector2<T> {
        if let Some(c) = self.center.get() {
            return c;
        }

        let sum = self
            .vertices
            .iter()
            .fold(Vector2::zero(), |acc: Vector2<T>, v| acc + v);
        let count = T::from(self.vertices.len()).unwrap_or_else(T::one);
        let c = Vector2::new(sum.x / count, sum.y / count);
        self.center.set(Some(c));
        c
    }

    /// Translates every vertex so the vertex average lands on `center`.
    fn set_center(&mut self, center: Vector2<T>) -> &mut Self {
        let offset = center - self.center();
        for v in self.vertices.iter_mut() {
            *v += offset;
        }
        self.invalidate_caches();
        self.center.set(Some(center));
        self
    }

    fn apply_transform(&mut self, matrix: &Matrix<T>) -> Result<&mut Self> {
        for v in self.vertices.iter_mut() {
            *v = matrix.transform_point(*v);
        }
        self.invalidate_caches();
        Ok(self)
    }

    fn bounding_box(&self) -> AABB<T> {
        let first = self.vertices[0];
        let init = AABB::new(first.x, first.y, first.x, first.y);
        self.vertices[1..].iter().fold(init, |acc, v| {
            AABB::new(
                num_traits::real::Real::min(acc.min_x, v.x),
                num_traits::real::Real::min(acc.min_y, v.y),
                num_traits::real::Real::max(acc.max_x, v.x),
                num_traits::real::Real::max(acc.max_y, v.y),
            )
        })
    }
}

impl<T> Clone for Polygon<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Polygon {
            vertices: self.vertices.clone(),
            center: Cell::new(None),
            radius: Cell::new(None),
        }
    }
}

/// Polygons are equal when their vertex lists are equal, caches are ignored.
impl<T> PartialEq for Polygon<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl<T> fmt::Debug for Polygon<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polygon")
            .field("vertices", &self.vertices)
            .finish()
    }
}

impl<T> fmt::Display for Polygon<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon(")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "<{}, {}>", v.x, v.y)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{math::vec2, traits::FuzzyEq};

    fn square() -> Polygon<f64> {
        Polygon::new(vec![
            vec2(0.0, 0.0),
            vec2(4.0, 0.0),
            vec2(4.0, 4.0),
            vec2(0.0, 4.0),
        ])
        .unwrap()
    }

    #[test]
    fn caches_follow_transforms() {
        let mut p = square();
        assert_eq!(p.center(), vec2(2.0, 2.0));
        assert_fuzzy_eq!(p.bounding_radius(), 8.0f64.sqrt());

        p.apply_transform(Matrix::identity().scale(2.0)).unwrap();
        assert_eq!(p.center(), vec2(4.0, 4.0));
        assert_fuzzy_eq!(p.bounding_radius(), 32.0f64.sqrt());

        p.set_center(vec2(0.0, 0.0));
        assert_eq!(p.vertices()[0], vec2(-4.0, -4.0));
        assert_fuzzy_eq!(p.bounding_radius(), 32.0f64.sqrt());
    }

    #[test]
    fn display() {
        let p = Polygon::new(vec![vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(0.0, 1.0)]).unwrap();
        assert_eq!(p.to_string(), "Polygon(<0, 0>, <1, 0>, <0, 1>)");
    }

    #[test]
    fn clone_compares_equal() {
        let p = square();
        p.center();
        let q = p.clone();
        assert_eq!(p, q);
        assert_eq!(q.center(), p.center());
    }
}
